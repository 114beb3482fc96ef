// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container geometry and oversized layer frames.
//!
//! The container's page position is the sum, over the element and each of
//! its offset parents, of `offset - scroll + client border`. Its size is the
//! rendered content box. From those, [`ContainerGeometry`] derives the
//! center and the normalization range used by the input normalizer.
//!
//! Each layer is then grown by `grow * (index + 1)` on both axes and centered
//! over the container, see [`layer_frame`].

use kurbo::{Point, Size, Vec2};

/// Offset metrics of one element in an offset-parent chain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetMetrics {
    /// Offset relative to the offset parent.
    pub offset: Vec2,
    /// Current scroll position of the element.
    pub scroll: Vec2,
    /// Width of the left/top client border.
    pub client: Vec2,
}

/// Sums an offset-parent chain (element first) into a page position.
#[must_use]
pub fn page_position(chain: impl IntoIterator<Item = OffsetMetrics>) -> Point {
    chain
        .into_iter()
        .fold(Point::ORIGIN, |acc, m| acc + m.offset - m.scroll + m.client)
}

/// Returns the page scroll offset to compensate for.
///
/// `page_offset` is the viewport's scroll position and `client` the root
/// element's client border; each axis is `max(0, page_offset) - client`.
#[must_use]
pub fn page_scroll(page_offset: Vec2, client: Vec2) -> Vec2 {
    Vec2::new(
        page_offset.x.max(0.0) - client.x,
        page_offset.y.max(0.0) - client.y,
    )
}

/// The rendered box of an element in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    /// Content-box size.
    pub size: Size,
    /// Absolute page position of the top-left corner.
    pub origin: Point,
}

/// Derived container geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    /// Container size.
    pub size: Size,
    /// Absolute page position.
    pub origin: Point,
    /// Center, relative to [`origin`](Self::origin).
    pub center: Point,
    /// Per-axis normalization extent: `max(center, extent - center)`.
    pub range: Vec2,
}

impl ContainerGeometry {
    /// Derives geometry from an element box.
    ///
    /// Negative sizes are floored at zero.
    #[must_use]
    pub fn from_box(bounds: ElementBox) -> Self {
        let size = Size::new(bounds.size.width.max(0.0), bounds.size.height.max(0.0));
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let range = Vec2::new(
            center.x.max(size.width - center.x),
            center.y.max(size.height - center.y),
        );
        Self {
            size,
            origin: bounds.origin,
            center,
            range,
        }
    }

    /// Returns the center in page coordinates.
    #[must_use]
    pub fn page_center(&self) -> Point {
        self.origin + self.center.to_vec2()
    }
}

/// The oversized frame of a layer before any easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    /// Oversized layer size.
    pub size: Size,
    /// Offset that centers the layer over the container.
    pub offset: Vec2,
}

/// Computes the frame of the layer at `index` for a given grow step.
///
/// Layer `i` grows by `grow * (i + 1)` and is centered, so its initial
/// offset is `(container - size) / 2` on each axis.
#[must_use]
pub fn layer_frame(container: Size, grow: f64, index: usize) -> LayerFrame {
    let depth = (index + 1) as f64;
    let amount = grow * depth;
    let size = Size::new(container.width + amount, container.height + amount);
    let offset = Vec2::new(
        (container.width - size.width) * 0.5,
        (container.height - size.height) * 0.5,
    );
    LayerFrame { size, offset }
}

/// Returns how far a layer overhangs the container on each axis.
#[must_use]
pub fn overhang(layer: Size, container: Size) -> Vec2 {
    Vec2::new(layer.width - container.width, layer.height - container.height)
}
