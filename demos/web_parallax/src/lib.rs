// Copyright 2026 the Parallax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a layered scene that follows the pointer.
//!
//! Builds a dark stage with a sky canvas, three planes of colored dots and a
//! caption. Each plane carries its own `data-*` overrides, so the planes
//! drift at different speeds and distances. The caption is a `<span>` and
//! stays put.
//!
//! Build with: `wasm-pack build --target web demos/web_parallax`
//!
//! Then serve `demos/web_parallax/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;

use parallax_backend_web::ParallaxHandle;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

const STAGE_ID: &str = "stage";
const STAGE_W: f64 = 720.0;
const STAGE_H: f64 = 420.0;

/// One plane of the scene: overrides, then the dots drawn on it.
struct Plane {
    attributes: &'static [(&'static str, &'static str)],
    color: &'static str,
    /// `(x, y, diameter)` in px, relative to the plane.
    dots: &'static [(f64, f64, f64)],
}

const PLANES: [Plane; 3] = [
    Plane {
        attributes: &[("data-grow", "30"), ("data-speed", "0.04")],
        color: "rgba(137, 180, 250, 0.55)",
        dots: &[(80.0, 60.0, 24.0), (420.0, 120.0, 18.0), (610.0, 300.0, 30.0)],
    },
    Plane {
        attributes: &[("data-grow", "60"), ("data-invertx", "true")],
        color: "rgba(166, 227, 161, 0.75)",
        dots: &[(200.0, 220.0, 48.0), (520.0, 80.0, 36.0)],
    },
    Plane {
        attributes: &[("data-grow", "110"), ("data-speed", "0.15")],
        color: "rgba(243, 139, 168, 0.9)",
        dots: &[(120.0, 300.0, 72.0), (460.0, 260.0, 90.0)],
    },
];

/// Builds the scene and starts the engine.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let stage = create_stage(&document)?;
    let sky = create_sky(&document)?;
    stage.append_child(&sky)?;
    for plane in &PLANES {
        let plane_el = create_plane(&document, plane)?;
        stage.append_child(&plane_el)?;
    }
    let caption = create_caption(&document)?;
    stage.append_child(&caption)?;
    body.append_child(&stage)?;

    let parallax = ParallaxHandle::new(JsValue::from_str(STAGE_ID), JsValue::UNDEFINED)?;
    parallax.enable();

    // Keep the engine alive; there is no teardown on the web.
    core::mem::forget(parallax);

    Ok(())
}

fn create_stage(doc: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    el.set_id(STAGE_ID);
    let s = el.style();
    s.set_property("width", &format!("{STAGE_W}px"))?;
    s.set_property("height", &format!("{STAGE_H}px"))?;
    s.set_property("position", "relative")?;
    s.set_property("overflow", "hidden")?;
    s.set_property("background", "#1e1e2e")?;
    s.set_property("border-radius", "16px")?;
    s.set_property("box-shadow", "0 8px 32px rgba(0,0,0,0.5)")?;
    Ok(el)
}

/// A canvas layer; the engine keeps its `width`/`height` attributes in step
/// with its grown size.
fn create_sky(doc: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("canvas")?.unchecked_into();
    el.set_attribute("data-grow", "10")?;
    el.set_attribute("data-speed", "0.02")?;
    el.style().set_property(
        "background",
        "linear-gradient(180deg, #181825 0%, #313244 100%)",
    )?;
    Ok(el)
}

fn create_plane(doc: &Document, plane: &Plane) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("div")?.unchecked_into();
    for &(name, value) in plane.attributes {
        el.set_attribute(name, value)?;
    }
    // Dots are grandchildren of the stage, so they move with their plane.
    for &(x, y, d) in plane.dots {
        let dot = create_dot(doc, plane.color, x, y, d)?;
        el.append_child(&dot)?;
    }
    Ok(el)
}

fn create_dot(doc: &Document, color: &str, x: f64, y: f64, d: f64) -> Result<Element, JsValue> {
    let el: HtmlElement = doc.create_element("span")?.unchecked_into();
    let s = el.style();
    s.set_property("position", "absolute")?;
    s.set_property("left", &format!("{x}px"))?;
    s.set_property("top", &format!("{y}px"))?;
    s.set_property("width", &format!("{d}px"))?;
    s.set_property("height", &format!("{d}px"))?;
    s.set_property("border-radius", "50%")?;
    s.set_property("background", color)?;
    Ok(el.into())
}

/// Not a layer tag, so the engine leaves it alone.
fn create_caption(doc: &Document) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element("span")?.unchecked_into();
    el.set_text_content(Some("move the pointer"));
    let s = el.style();
    s.set_property("position", "absolute")?;
    s.set_property("left", "24px")?;
    s.set_property("bottom", "20px")?;
    s.set_property("z-index", "100")?;
    s.set_property("color", "#cdd6f4")?;
    s.set_property("font", "14px sans-serif")?;
    Ok(el)
}
