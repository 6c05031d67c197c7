use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as Gl};

pub mod config;
pub mod context;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod scene;
pub mod shader;
pub mod vertex;

pub use config::SceneConfig;
pub use error::SceneError;

use context::{create_webgl_context, gl_check, set_status};
use draw::GlSession;
use logging::{LoggingConfig, init_logging};
use scene::build_scene;
use shader::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE, build_program};

/// Compiles the shaders, uploads every pass and draws the scene once.
///
/// GPU objects are released when this returns; the pixels already drawn
/// remain on the canvas.
pub fn render_scene(gl: &Gl, config: &SceneConfig) -> Result<(), SceneError> {
    let program = build_program(gl, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
    let session = GlSession::new(gl.clone(), program)?;

    let passes = build_scene(config);
    let buffers = passes
        .iter()
        .map(|pass| session.upload(&pass.shape))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(err) = gl_check(gl, "upload") {
        log::warn!("{}", err);
    }

    session.clear(config.clear_color);
    for (pass, buffer) in passes.iter().zip(&buffers) {
        session.draw_pass(buffer, pass);
        if let Some(err) = gl_check(gl, pass.shape.label) {
            log::warn!("{}", err);
        }
    }

    log::info!(
        "drew {} passes, {} vertices",
        passes.len(),
        buffers.iter().map(|b| b.vertex_count()).sum::<usize>()
    );
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let search = web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default();
    init_logging(LoggingConfig::from_query(&search));

    if let Err(err) = start_impl(&search) {
        log::error!("fatal: {}", err);
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            set_status(&doc, "error");
        }
    }
}

fn start_impl(search: &str) -> Result<(), SceneError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| SceneError::Context("missing document".to_string()))?;

    let mut config = SceneConfig::default();
    config.apply_query(search);

    let canvas = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| SceneError::MissingElement(config.canvas_id.clone()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SceneError::MissingElement(config.canvas_id.clone()))?;

    let gl = create_webgl_context(&canvas)?;
    gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);

    render_scene(&gl, &config)?;
    set_status(&document, "ready");
    Ok(())
}
