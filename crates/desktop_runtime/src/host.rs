//! Thin browser-host boundary: viewport queries, element geometry, and DOM
//! focus moves. Everything here degrades to a deterministic fallback off
//! wasm so native test builds of the component tree still compile.

use desktop_core::model::IconRect;

/// Viewport size in CSS pixels, taskbar included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub w: i32,
    pub h: i32,
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> ViewportSize {
    let window = web_sys::window().expect("browser window");
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: i32| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v as i32)
            .unwrap_or(fallback)
    };
    ViewportSize {
        w: read(window.inner_width(), 1024),
        h: read(window.inner_height(), 768),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> ViewportSize {
    ViewportSize { w: 1024, h: 768 }
}

/// Document-space rectangle of a laid-out element, for icon measurement.
#[cfg(target_arch = "wasm32")]
pub fn element_rect(element: &web_sys::Element) -> IconRect {
    let rect = element.get_bounding_client_rect();
    let window = web_sys::window().expect("browser window");
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    IconRect {
        x: (rect.left() + scroll_x) as i32,
        y: (rect.top() + scroll_y) as i32,
        w: rect.width() as i32,
        h: rect.height() as i32,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_rect(_element: &web_sys::Element) -> IconRect {
    IconRect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    }
}

/// Moves DOM focus to the element with the given id, if present.
#[cfg(target_arch = "wasm32")]
pub fn focus_element_by_id(dom_id: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(dom_id) {
        if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_element_by_id(_dom_id: &str) {}
