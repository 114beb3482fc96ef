// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer identity.

use core::fmt;

/// A handle to a layer in a [`LayerStore`](super::LayerStore).
///
/// Contains the registration index and the epoch of the registration pass,
/// so handles taken before the container was re-registered can be detected.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    /// Registration index (0-based, document order).
    pub(crate) idx: u32,
    /// Must match the store's epoch.
    pub(crate) epoch: u32,
}

impl LayerId {
    /// Returns the registration index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the registration epoch.
    #[inline]
    #[must_use]
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({}@epoch{})", self.idx, self.epoch)
    }
}
