// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifecycle controller.
//!
//! [`Parallax`] owns the configuration, the layer store, the container
//! geometry and the latest input vector, and wires them to a [`Host`], a
//! [`Presenter`] and a [`Driver`].
//!
//! The engine has two states, disabled and enabled. While enabled it is
//! subscribed to every [`EventKind`] and always has one tick pending. Each
//! tick eases and presents the layers if the surface has focus, and then
//! requests the next tick either way, so the loop resumes as soon as focus
//! returns.
//!
//! # Inert engines
//!
//! A container that cannot be resolved is not an error. The engine is built
//! with no container and no layers; every operation, including
//! [`enable`](Parallax::enable) and [`disable`](Parallax::disable), remains
//! callable and simply has nothing to move.

use alloc::string::String;
use core::fmt;

use kurbo::Point;

use crate::attr::AttrValue;
use crate::backend::{Driver, EventKind, FrameScheduler, Presenter};
use crate::capability::CapabilityDescriptor;
use crate::config::{EngineConfig, OptionsPatch};
use crate::easing;
use crate::geometry::ContainerGeometry;
use crate::host::Host;
use crate::input::{self, InputVector, OrientationSample};
use crate::layer::{FrameChanges, LayerOverrides, LayerSettings, LayerStore, is_layer_tag};
use crate::trace::{
    GeometryEvent, InputEvent, InputSource, LayersRegisteredEvent, LifecycleEvent, TickEvent,
    Tracer, Transition,
};

/// How the container is given to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerRef<E> {
    /// A direct element reference.
    Element(E),
    /// An identifier resolved through [`Host::lookup`].
    Id(String),
}

impl<E> From<&str> for ContainerRef<E> {
    fn from(id: &str) -> Self {
        Self::Id(id.into())
    }
}

/// A parallax engine bound to one container.
pub struct Parallax<H: Host, P, D: FrameScheduler> {
    host: H,
    presenter: P,
    driver: D,
    config: EngineConfig,
    container: Option<H::Element>,
    fixed: bool,
    layers: LayerStore<H::Element>,
    geometry: ContainerGeometry,
    input: InputVector,
    active: bool,
    pending: Option<D::TickHandle>,
    frame_index: u64,
    changes: FrameChanges,
    tracer: Tracer,
}

impl<H: Host, P, D: FrameScheduler> fmt::Debug for Parallax<H, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallax")
            .field("config", &self.config)
            .field("has_container", &self.container.is_some())
            .field("fixed", &self.fixed)
            .field("layers", &self.layers)
            .field("geometry", &self.geometry)
            .field("input", &self.input)
            .field("active", &self.active)
            .field("frame_index", &self.frame_index)
            .finish_non_exhaustive()
    }
}

impl<H, P, D> Parallax<H, P, D>
where
    H: Host,
    P: Presenter<H::Element>,
    D: Driver,
{
    /// Creates an engine, registers the container's layers, lays them out and
    /// runs one easing pass.
    ///
    /// The engine starts disabled.
    pub fn new(
        host: H,
        presenter: P,
        driver: D,
        container: ContainerRef<H::Element>,
        options: &OptionsPatch,
    ) -> Self {
        let mut config = EngineConfig::default();
        config.merge(options);
        let mut engine = Self {
            host,
            presenter,
            driver,
            config,
            container: None,
            fixed: false,
            layers: LayerStore::new(),
            geometry: ContainerGeometry::default(),
            input: InputVector::ZERO,
            active: false,
            pending: None,
            frame_index: 0,
            changes: FrameChanges::default(),
            tracer: Tracer::none(),
        };
        engine.set_container(container);
        engine.update_layers();
        engine.parallax_layers();
        engine
    }

    /// Installs a tracer.
    pub fn set_tracer(&mut self, tracer: Tracer) {
        self.tracer = tracer;
    }

    /// Returns the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    // -- Options --

    /// Merges `patch` over the current options and lays the layers out
    /// again.
    pub fn set_options(&mut self, patch: &OptionsPatch) {
        self.config.merge(patch);
        self.update_layers();
    }

    /// Looks up an option by name, returning `default` for unknown names.
    #[must_use]
    pub fn option(&self, name: &str, default: AttrValue) -> AttrValue {
        self.config.get_or(name, default)
    }

    // -- Registration and geometry --

    /// Replaces the container and re-registers its layers.
    ///
    /// Every handle into the previous layer set becomes stale. If the
    /// container cannot be resolved the engine is left without layers.
    /// Sizes and offsets are not computed until the next
    /// [`update_layers`](Self::update_layers).
    pub fn set_container(&mut self, container: ContainerRef<H::Element>) {
        self.layers.clear();
        self.container = None;
        self.fixed = false;

        let element = match container {
            ContainerRef::Element(element) => Some(element),
            ContainerRef::Id(id) => self.host.lookup(&id),
        };
        let Some(element) = element else {
            self.tracer.layers_registered(&LayersRegisteredEvent {
                container_found: false,
                layer_count: 0,
                fixed: false,
                epoch: self.layers.epoch(),
            });
            return;
        };

        self.fixed = self.host.is_fixed(&element);
        let accelerate = self.presenter.capability().supports_3d;
        if accelerate {
            self.presenter.accelerate(&element);
        }
        for child in self.host.children(&element) {
            if !is_layer_tag(&self.host.tag_name(&child)) {
                continue;
            }
            if accelerate {
                self.presenter.accelerate(&child);
            }
            let settings = read_settings(&self.host, &self.config, &child);
            self.layers.register(child, settings);
        }
        self.container = Some(element);

        self.tracer.layers_registered(&LayersRegisteredEvent {
            container_found: true,
            layer_count: u32::try_from(self.layers.len()).unwrap_or(u32::MAX),
            fixed: self.fixed,
            epoch: self.layers.epoch(),
        });
    }

    /// Re-reads the container geometry and every layer's overrides, then
    /// sizes, centers and presents each layer.
    pub fn update_layers(&mut self) {
        let Some(container) = &self.container else {
            return;
        };
        self.geometry = ContainerGeometry::from_box(self.host.element_box(container));

        for idx in 0..self.layers.len() {
            let settings = read_settings(&self.host, &self.config, &self.layers.elements()[idx]);
            self.layers.set_settings_at(idx, settings);
        }

        self.changes.clear();
        self.layers.layout(self.geometry.size, &mut self.changes);
        self.presenter.apply(&self.layers, &self.changes);

        self.tracer.geometry(&GeometryEvent {
            size: self.geometry.size,
            origin: self.geometry.origin,
            range: self.geometry.range,
            layer_count: u32::try_from(self.layers.len()).unwrap_or(u32::MAX),
        });
    }

    /// Runs one easing pass over every layer and presents the result.
    ///
    /// For a fixed-position container the page scroll is subtracted and
    /// kept as part of each layer's offset.
    pub fn parallax_layers(&mut self) {
        if self.container.is_none() {
            return;
        }
        let scroll = self.fixed.then(|| self.host.scroll_offset());
        self.changes.clear();
        easing::tick(
            self.layers.states_mut(),
            self.input,
            self.geometry.size,
            scroll,
            &mut self.changes,
        );
        self.presenter.apply(&self.layers, &self.changes);
    }

    // -- Platform callbacks --

    /// Handles a viewport resize: lays the layers out again, then runs one
    /// easing pass.
    pub fn on_resize(&mut self) {
        self.update_layers();
        self.parallax_layers();
    }

    /// Handles pointer movement at `page` (page coordinates).
    ///
    /// Ignored while disabled.
    pub fn on_pointer_move(&mut self, page: Point) {
        if !self.active {
            return;
        }
        self.input = input::from_pointer(page, &self.geometry);
        self.tracer.input(&InputEvent {
            source: InputSource::Pointer,
            input: self.input,
        });
    }

    /// Handles a device-orientation reading.
    ///
    /// Ignored while disabled.
    pub fn on_orientation(&mut self, sample: OrientationSample) {
        if !self.active {
            return;
        }
        let rotation = self.host.screen_rotation();
        self.input = input::from_orientation(sample, &self.config, rotation);
        self.tracer.input(&InputEvent {
            source: InputSource::Orientation,
            input: self.input,
        });
    }

    /// Handles a scheduled tick.
    ///
    /// Eases and presents the layers if the surface has focus, then requests
    /// the next tick. A tick delivered after [`disable`](Self::disable) does
    /// nothing and requests nothing.
    pub fn on_tick(&mut self) {
        self.pending = None;
        if !self.active {
            return;
        }

        let eased = self.host.has_focus();
        if eased {
            self.parallax_layers();
        }
        self.tracer.tick(&TickEvent {
            frame_index: self.frame_index,
            eased,
            moved: if eased {
                u32::try_from(self.changes.moved.len()).unwrap_or(u32::MAX)
            } else {
                0
            },
        });
        self.frame_index += 1;

        if self.active {
            self.pending = Some(self.driver.request_tick());
        }
    }

    // -- Lifecycle --

    /// Subscribes to platform events and starts the tick loop.
    ///
    /// Does nothing if already enabled.
    pub fn enable(&mut self) {
        if self.active {
            return;
        }
        for kind in EventKind::ALL {
            self.driver.subscribe(kind);
        }
        self.pending = Some(self.driver.request_tick());
        self.active = true;
        self.tracer.lifecycle(&LifecycleEvent {
            frame_index: self.frame_index,
            transition: Transition::Enabled,
        });
    }

    /// Unsubscribes from platform events and cancels the pending tick.
    ///
    /// Layer state is left as it is. Does nothing if already disabled.
    pub fn disable(&mut self) {
        if !self.active {
            return;
        }
        for kind in EventKind::ALL {
            self.driver.unsubscribe(kind);
        }
        if let Some(handle) = self.pending.take() {
            self.driver.cancel_tick(handle);
        }
        self.active = false;
        self.tracer.lifecycle(&LifecycleEvent {
            frame_index: self.frame_index,
            transition: Transition::Disabled,
        });
    }

    // -- Accessors --

    /// Returns whether the engine is enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current options.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the transform capability in use.
    #[must_use]
    pub fn capability(&self) -> &CapabilityDescriptor {
        self.presenter.capability()
    }

    /// Returns the resolved container, if any.
    #[must_use]
    pub fn container(&self) -> Option<&H::Element> {
        self.container.as_ref()
    }

    /// Returns whether the container is fixed-position.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the registered layers.
    #[must_use]
    pub fn layers(&self) -> &LayerStore<H::Element> {
        &self.layers
    }

    /// Returns the current container geometry.
    #[must_use]
    pub fn geometry(&self) -> &ContainerGeometry {
        &self.geometry
    }

    /// Returns the latest input vector.
    #[must_use]
    pub fn input(&self) -> InputVector {
        self.input
    }

    /// Returns the number of ticks handled so far.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the driver.
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

/// Reads an element's override attributes and resolves them over `config`.
fn read_settings<H: Host>(host: &H, config: &EngineConfig, element: &H::Element) -> LayerSettings {
    LayerOverrides::read(|name| host.attribute(element, name)).resolve(config)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Size, Vec2};

    use super::*;
    use crate::geometry::ElementBox;
    use crate::input::ScreenRotation;
    use crate::backend::EventSource;

    #[derive(Clone, Debug, Default)]
    struct Node {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<usize>,
        fixed: bool,
        bounds: ElementBox,
    }

    #[derive(Debug, Default)]
    struct FakeHost {
        nodes: Vec<Node>,
        ids: Vec<(&'static str, usize)>,
        scroll: Vec2,
        focus: bool,
        rotation: ScreenRotation,
    }

    impl Host for FakeHost {
        type Element = usize;

        fn lookup(&self, id: &str) -> Option<usize> {
            self.ids.iter().find(|(k, _)| *k == id).map(|(_, n)| *n)
        }

        fn children(&self, element: &usize) -> Vec<usize> {
            self.nodes[*element].children.clone()
        }

        fn tag_name(&self, element: &usize) -> String {
            self.nodes[*element].tag.to_ascii_uppercase()
        }

        fn attribute(&self, element: &usize, name: &str) -> Option<String> {
            self.nodes[*element]
                .attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
        }

        fn is_fixed(&self, element: &usize) -> bool {
            self.nodes[*element].fixed
        }

        fn element_box(&self, element: &usize) -> ElementBox {
            self.nodes[*element].bounds
        }

        fn scroll_offset(&self) -> Vec2 {
            self.scroll
        }

        fn has_focus(&self) -> bool {
            self.focus
        }

        fn screen_rotation(&self) -> ScreenRotation {
            self.rotation
        }
    }

    #[derive(Debug, Default)]
    struct FakePresenter {
        capability: CapabilityDescriptor,
        accelerated: Vec<usize>,
        applies: Vec<FrameChanges>,
        written: Vec<(u32, Vec2)>,
    }

    impl Presenter<usize> for FakePresenter {
        fn capability(&self) -> &CapabilityDescriptor {
            &self.capability
        }

        fn accelerate(&mut self, element: &usize) {
            self.accelerated.push(*element);
        }

        fn apply(&mut self, store: &LayerStore<usize>, changes: &FrameChanges) {
            for &idx in &changes.moved {
                self.written.push((idx, store.state_at(idx).offset));
            }
            self.applies.push(changes.clone());
        }
    }

    #[derive(Debug, Default)]
    struct FakeDriver {
        next: u32,
        requested: Vec<u32>,
        cancelled: Vec<u32>,
        subscribed: Vec<EventKind>,
        unsubscribed: Vec<EventKind>,
    }

    impl FrameScheduler for FakeDriver {
        type TickHandle = u32;

        fn request_tick(&mut self) -> u32 {
            self.next += 1;
            self.requested.push(self.next);
            self.next
        }

        fn cancel_tick(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    impl EventSource for FakeDriver {
        fn subscribe(&mut self, kind: EventKind) {
            self.subscribed.push(kind);
        }

        fn unsubscribe(&mut self, kind: EventKind) {
            self.unsubscribed.push(kind);
        }
    }

    type TestEngine = Parallax<FakeHost, FakePresenter, FakeDriver>;

    /// A focused page with a 400×300 container `#stage` at the origin.
    fn scene(children: &[(&'static str, &[(&'static str, &str)])]) -> FakeHost {
        let mut host = FakeHost {
            focus: true,
            ..FakeHost::default()
        };
        host.nodes.push(Node {
            tag: "section",
            bounds: ElementBox {
                size: Size::new(400.0, 300.0),
                origin: Point::ORIGIN,
            },
            ..Node::default()
        });
        host.ids.push(("stage", 0));
        for (tag, attrs) in children {
            let idx = host.nodes.len();
            host.nodes.push(Node {
                tag,
                attrs: attrs.iter().map(|(k, v)| (*k, v.to_string())).collect(),
                ..Node::default()
            });
            host.nodes[0].children.push(idx);
        }
        host
    }

    fn engine(host: FakeHost) -> TestEngine {
        engine_with(host, CapabilityDescriptor::NONE)
    }

    fn engine_with(host: FakeHost, capability: CapabilityDescriptor) -> TestEngine {
        Parallax::new(
            host,
            FakePresenter {
                capability,
                ..FakePresenter::default()
            },
            FakeDriver::default(),
            "stage".into(),
            &OptionsPatch::default(),
        )
    }

    const INSTANT: &[(&str, &str)] = &[("speed", "1"), ("overflow", "false")];

    #[test]
    fn missing_container_is_inert() {
        let mut e = Parallax::new(
            scene(&[("div", &[])]),
            FakePresenter::default(),
            FakeDriver::default(),
            ContainerRef::Id("missing".into()),
            &OptionsPatch::default(),
        );
        assert!(e.container().is_none());
        assert!(e.layers().is_empty());

        e.enable();
        e.on_pointer_move(Point::new(10.0, 10.0));
        e.on_resize();
        e.on_tick();
        e.disable();

        assert!(e.presenter().applies.is_empty(), "nothing to present");
        assert_eq!(e.driver().subscribed, EventKind::ALL);
        assert_eq!(e.driver().unsubscribed, EventKind::ALL);
    }

    #[test]
    fn layers_follow_registration_order() {
        let e = engine(scene(&[
            ("div", &[]),
            ("span", &[]),
            ("img", &[]),
            ("script", &[]),
            ("canvas", &[]),
            ("ul", &[]),
        ]));
        assert_eq!(e.layers().len(), 4, "span and script are skipped");
        assert_eq!(e.layers().elements(), [1, 3, 5, 6]);
        for (i, state) in e.layers().states().iter().enumerate() {
            let depth = (i + 1) as f64;
            assert_eq!(state.index as usize, i);
            assert_eq!(state.z_order as usize, i + 1);
            assert_eq!(
                state.size,
                Size::new(400.0 + 50.0 * depth, 300.0 + 50.0 * depth)
            );
        }
    }

    #[test]
    fn construction_lays_out_then_eases_once() {
        let e = engine(scene(&[("div", &[]), ("div", &[])]));
        let applies = &e.presenter().applies;
        assert_eq!(applies.len(), 2, "layout, then one easing pass");
        assert_eq!(applies[0].indexed, vec![0, 1]);
        assert_eq!(applies[0].resized, vec![0, 1]);
        assert!(applies[1].indexed.is_empty() && applies[1].resized.is_empty());
        assert_eq!(applies[1].moved, vec![0, 1]);
        assert!(!e.is_active(), "engine starts disabled");
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut e = engine(scene(&[("div", &[])]));
        e.enable();
        e.enable();
        assert!(e.is_active());
        assert_eq!(e.driver().subscribed, EventKind::ALL);
        assert_eq!(e.driver().requested, [1]);

        e.disable();
        e.disable();
        assert!(!e.is_active());
        assert_eq!(e.driver().unsubscribed, EventKind::ALL);
        assert_eq!(e.driver().cancelled, [1]);

        e.enable();
        assert_eq!(e.driver().requested, [1, 2], "re-enable starts a new loop");
    }

    #[test]
    fn full_pointer_input_moves_instant_layer_to_edge() {
        let mut e = engine(scene(&[("div", INSTANT)]));
        assert_eq!(e.layers().state_at(0).offset, Vec2::new(-25.0, -25.0));

        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        assert_eq!(e.input(), Vec2::new(1.0, 1.0));
        e.on_tick();

        assert_eq!(e.layers().state_at(0).offset, Vec2::new(-50.0, -50.0));
        assert_eq!(
            e.presenter().written.last(),
            Some(&(0, Vec2::new(-50.0, -50.0)))
        );
    }

    #[test]
    fn half_speed_layer_converges_gradually() {
        let mut e = engine(scene(&[("div", &[("speed", "0.5"), ("overflow", "false")])]));
        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.on_tick();
        assert_eq!(e.layers().state_at(0).offset.x, -37.5);
        e.on_tick();
        assert_eq!(e.layers().state_at(0).offset.x, -43.75);
    }

    #[test]
    fn inverted_axis_mirrors_travel() {
        let mut e = engine(scene(&[(
            "div",
            &[("speed", "1"), ("overflow", "false"), ("invertx", "true")],
        )]));
        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.on_tick();
        assert_eq!(e.layers().state_at(0).offset, Vec2::new(0.0, -50.0));
    }

    #[test]
    fn fixed_container_compensates_scroll() {
        let mut host = scene(&[("div", INSTANT)]);
        host.nodes[0].fixed = true;
        host.scroll = Vec2::new(10.0, 20.0);
        let mut e = engine(host);
        assert!(e.is_fixed());

        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.on_tick();
        assert_eq!(e.layers().state_at(0).offset, Vec2::new(-60.0, -70.0));
    }

    #[test]
    fn unfocused_tick_skips_work_but_keeps_loop() {
        let mut e = engine(scene(&[("div", INSTANT)]));
        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.host_mut().focus = false;
        let applies = e.presenter().applies.len();

        e.on_tick();
        assert_eq!(e.presenter().applies.len(), applies, "nothing presented");
        assert_eq!(e.layers().state_at(0).offset, Vec2::new(-25.0, -25.0));
        assert_eq!(e.driver().requested, [1, 2], "loop stays alive");

        e.host_mut().focus = true;
        e.on_tick();
        assert_eq!(e.layers().state_at(0).offset, Vec2::new(-50.0, -50.0));
        assert_eq!(e.frame_index(), 2);
    }

    #[test]
    fn tick_after_disable_does_nothing() {
        let mut e = engine(scene(&[("div", INSTANT)]));
        e.enable();
        e.disable();
        let applies = e.presenter().applies.len();
        e.on_tick();
        assert_eq!(e.presenter().applies.len(), applies);
        assert_eq!(e.driver().requested, [1], "no tick requested");
    }

    #[test]
    fn input_is_ignored_while_disabled() {
        let mut e = engine(scene(&[("div", &[])]));
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.on_orientation(OrientationSample {
            beta: Some(10.0),
            gamma: Some(10.0),
        });
        assert_eq!(e.input(), Vec2::ZERO);
    }

    #[test]
    fn orientation_uses_host_rotation() {
        let mut host = scene(&[("div", &[])]);
        host.rotation = ScreenRotation::Landscape;
        let mut e = engine(host);
        e.enable();
        let sample = OrientationSample {
            beta: Some(20.0),
            gamma: Some(-10.0),
        };
        e.on_orientation(sample);
        assert_eq!(
            e.input(),
            input::from_orientation(sample, e.config(), ScreenRotation::Landscape)
        );
    }

    #[test]
    fn resize_relays_out_and_eases() {
        let mut e = engine(scene(&[("div", &[])]));
        e.host_mut().nodes[0].bounds.size = Size::new(800.0, 600.0);
        let applies = e.presenter().applies.len();

        e.on_resize();
        assert_eq!(e.geometry().size, Size::new(800.0, 600.0));
        assert_eq!(e.layers().state_at(0).size, Size::new(850.0, 650.0));
        assert_eq!(e.presenter().applies.len(), applies + 2);
    }

    #[test]
    fn set_options_relays_out() {
        let mut e = engine(scene(&[("div", &[]), ("div", &[("grow", "10")])]));
        e.set_options(&OptionsPatch {
            layer_grow_size: Some(20.0),
            ..OptionsPatch::default()
        });
        assert_eq!(e.layers().state_at(0).size, Size::new(420.0, 320.0));
        assert_eq!(
            e.layers().state_at(1).size,
            Size::new(420.0, 320.0),
            "per-layer override wins"
        );
        assert_eq!(
            e.option("layerGrowSize", AttrValue::Null),
            AttrValue::Number(20.0)
        );
    }

    #[test]
    fn get_option_falls_back_for_unknown_names() {
        let e = engine(scene(&[]));
        assert_eq!(
            e.option("easingSpeed", AttrValue::Null),
            AttrValue::Number(0.075)
        );
        assert_eq!(
            e.option("invert_x", AttrValue::Null),
            AttrValue::Bool(false)
        );
        assert_eq!(
            e.option("sparkle", AttrValue::Text("x".into())),
            AttrValue::Text("x".into())
        );
    }

    #[test]
    fn overrides_are_coerced() {
        let e = engine(scene(&[(
            "div",
            &[
                ("grow", "42"),
                ("overflow", "null"),
                ("invertx", "true"),
                ("inverty", "none"),
            ],
        )]));
        let settings = e.layers().state_at(0).settings;
        assert_eq!(settings.grow, 42.0);
        assert!(!settings.allow_overflow, "anything but exact true clamps");
        assert!(settings.invert_x);
        assert!(settings.invert_y, "unrecognized text is truthy");
        assert_eq!(settings.speed, 0.075, "missing speed uses the default");
    }

    #[test]
    fn acceleration_only_with_3d_support() {
        let plain = engine(scene(&[("div", &[]), ("span", &[]), ("p", &[])]));
        assert!(plain.presenter().accelerated.is_empty());

        let fast = engine_with(
            scene(&[("div", &[]), ("span", &[]), ("p", &[])]),
            CapabilityDescriptor::FULL_3D,
        );
        assert_eq!(fast.presenter().accelerated, [0, 1, 3]);
    }

    #[test]
    fn set_container_invalidates_handles() {
        let mut host = scene(&[("div", &[])]);
        host.nodes.push(Node {
            tag: "div",
            bounds: ElementBox {
                size: Size::new(100.0, 100.0),
                origin: Point::ORIGIN,
            },
            ..Node::default()
        });
        let mut e = engine(host);
        let old = e.layers().ids().next().expect("one layer");

        e.set_container(ContainerRef::Element(2));
        assert!(!e.layers().is_alive(old));
        assert!(e.layers().is_empty(), "new container has no children");
        assert_eq!(e.container(), Some(&2));
    }

    #[test]
    fn clamp_holds_across_many_ticks() {
        let mut e = engine(scene(&[
            ("div", &[("speed", "0.7"), ("overflow", "false")]),
            ("div", &[("speed", "0.3"), ("overflow", "0")]),
        ]));
        e.enable();
        let points = [
            Point::new(5000.0, -300.0),
            Point::new(-900.0, 1200.0),
            Point::new(210.0, 140.0),
        ];
        for point in points.iter().cycle().take(30) {
            e.on_pointer_move(*point);
            e.on_tick();
            for state in e.layers().states() {
                let over = crate::geometry::overhang(state.size, e.geometry().size);
                assert!(
                    -over.x <= state.offset.x && state.offset.x <= 0.0,
                    "layer {} x = {}",
                    state.index,
                    state.offset.x
                );
                assert!(
                    -over.y <= state.offset.y && state.offset.y <= 0.0,
                    "layer {} y = {}",
                    state.index,
                    state.offset.y
                );
            }
        }
    }

    #[cfg(feature = "trace")]
    #[derive(Default)]
    struct EventLog(alloc::rc::Rc<core::cell::RefCell<Vec<String>>>);

    #[cfg(feature = "trace")]
    impl crate::trace::TraceSink for EventLog {
        fn on_layers_registered(&mut self, e: &LayersRegisteredEvent) {
            self.0.borrow_mut().push(alloc::format!(
                "layers count={} found={}",
                e.layer_count, e.container_found
            ));
        }

        fn on_geometry(&mut self, e: &GeometryEvent) {
            self.0.borrow_mut().push(alloc::format!(
                "geometry {}x{} layers={}",
                e.size.width, e.size.height, e.layer_count
            ));
        }

        fn on_input(&mut self, e: &InputEvent) {
            self.0.borrow_mut().push(alloc::format!(
                "input {:?} ({}, {})",
                e.source, e.input.x, e.input.y
            ));
        }

        fn on_tick(&mut self, e: &TickEvent) {
            self.0.borrow_mut().push(alloc::format!(
                "tick {} eased={} moved={}",
                e.frame_index, e.eased, e.moved
            ));
        }

        fn on_lifecycle(&mut self, e: &LifecycleEvent) {
            self.0
                .borrow_mut()
                .push(alloc::format!("{:?} at {}", e.transition, e.frame_index));
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_sees_every_engine_event_in_order() {
        let log = EventLog::default();
        let events = log.0.clone();
        let mut e = engine(scene(&[("div", &[]), ("p", &[])]));
        e.set_tracer(Tracer::new(alloc::boxed::Box::new(log)));

        e.set_container("stage".into());
        e.update_layers();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.enable();
        e.on_pointer_move(Point::new(400.0, 300.0));
        e.on_tick();
        e.host_mut().focus = false;
        e.on_tick();
        e.disable();
        e.on_tick();

        assert_eq!(
            *events.borrow(),
            [
                "layers count=2 found=true",
                "geometry 400x300 layers=2",
                "Enabled at 0",
                "input Pointer (1, 1)",
                "tick 0 eased=true moved=2",
                "tick 1 eased=false moved=0",
                "Disabled at 2",
            ],
            "pointer input before enable and ticks after disable are not traced"
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn unresolved_container_is_traced() {
        let log = EventLog::default();
        let events = log.0.clone();
        let mut e = engine(scene(&[("div", &[])]));
        e.set_tracer(Tracer::new(alloc::boxed::Box::new(log)));

        e.set_container(ContainerRef::Id("missing".into()));
        e.update_layers();
        assert_eq!(
            *events.borrow(),
            ["layers count=0 found=false"],
            "no geometry without a container"
        );
    }
}
