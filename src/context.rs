use js_sys::{Float32Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, WebGlRenderingContext as Gl};

use crate::error::SceneError;

pub fn create_webgl_context(canvas: &HtmlCanvasElement) -> Result<Gl, SceneError> {
    // Drawn once: keep the drawing buffer. Antialiasing stays on for the
    // sun's rim and the thin rays.
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)?;
    Reflect::set(&options, &JsValue::from_str("antialias"), &JsValue::TRUE)?;
    Reflect::set(&options, &JsValue::from_str("depth"), &JsValue::FALSE)?;
    Reflect::set(&options, &JsValue::from_str("stencil"), &JsValue::FALSE)?;
    Reflect::set(
        &options,
        &JsValue::from_str("preserveDrawingBuffer"),
        &JsValue::TRUE,
    )?;
    Reflect::set(
        &options,
        &JsValue::from_str("powerPreference"),
        &JsValue::from_str("low-power"),
    )?;

    let options = JsValue::from(options);
    let ctx = canvas
        .get_context_with_context_options("webgl", &options)?
        .or_else(|| canvas.get_context("webgl").ok().flatten())
        .ok_or_else(|| SceneError::Context("WebGL unavailable".to_string()))?;

    ctx.dyn_into::<Gl>().map_err(|_| {
        SceneError::Context("context is not a WebGlRenderingContext".to_string())
    })
}

pub fn gl_error_name(error: u32) -> &'static str {
    match error {
        Gl::NO_ERROR => "NO_ERROR",
        Gl::INVALID_ENUM => "INVALID_ENUM",
        Gl::INVALID_VALUE => "INVALID_VALUE",
        Gl::INVALID_OPERATION => "INVALID_OPERATION",
        Gl::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        Gl::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        Gl::CONTEXT_LOST_WEBGL => "CONTEXT_LOST_WEBGL",
        _ => "UNKNOWN_ERROR",
    }
}

pub fn gl_check(gl: &Gl, label: &str) -> Option<String> {
    let error = gl.get_error();
    if error == Gl::NO_ERROR {
        None
    } else {
        Some(format!(
            "gl error after {}: {} (0x{:x})",
            label,
            gl_error_name(error),
            error
        ))
    }
}

/// `ALIASED_LINE_WIDTH_RANGE` as `(min, max)`. Most browsers report `(1, 1)`.
pub fn line_width_range(gl: &Gl) -> Option<(f32, f32)> {
    let range = gl
        .get_parameter(Gl::ALIASED_LINE_WIDTH_RANGE)
        .ok()?
        .dyn_into::<Float32Array>()
        .ok()?;
    if range.length() < 2 {
        return None;
    }
    Some((range.get_index(0), range.get_index(1)))
}

pub fn set_status(document: &Document, status: &str) {
    if let Some(el) = document.document_element() {
        let _ = el.set_attribute("data-render-status", status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_errors() {
        assert_eq!(gl_error_name(Gl::NO_ERROR), "NO_ERROR");
        assert_eq!(gl_error_name(Gl::INVALID_OPERATION), "INVALID_OPERATION");
        assert_eq!(gl_error_name(0xdead), "UNKNOWN_ERROR");
    }
}
