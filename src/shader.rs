use std::fmt;

use web_sys::{WebGlProgram, WebGlRenderingContext as Gl, WebGlShader};

use crate::error::SceneError;

pub const VERTEX_SHADER_SOURCE: &str = r#"
attribute vec4 a_position;
attribute vec4 a_color;
varying vec4 v_color;
uniform float u_pointSize;
void main() {
  gl_Position = a_position;
  gl_PointSize = u_pointSize;
  v_color = a_color;
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"
precision mediump float;
varying vec4 v_color;
void main() {
  gl_FragColor = v_color;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => Gl::VERTEX_SHADER,
            ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// A successfully compiled stage. The GL object is deleted on drop; GL keeps
/// it alive while it is attached to a program.
pub struct CompiledShader {
    gl: Gl,
    stage: ShaderStage,
    shader: WebGlShader,
}

impl CompiledShader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        self.gl.delete_shader(Some(&self.shader));
    }
}

/// A linked program. Deleted on drop.
pub struct ShaderProgram {
    gl: Gl,
    program: WebGlProgram,
}

impl ShaderProgram {
    pub fn handle(&self) -> &WebGlProgram {
        &self.program
    }

    pub fn activate(&self) {
        self.gl.use_program(Some(&self.program));
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.gl.delete_program(Some(&self.program));
    }
}

pub fn compile_shader(
    gl: &Gl,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledShader, SceneError> {
    let shader = gl
        .create_shader(stage.gl_type())
        .ok_or(SceneError::Allocation("shader"))?;
    // Guard first so the failure path below releases the stage object too.
    let shader = CompiledShader {
        gl: gl.clone(),
        stage,
        shader,
    };
    gl.shader_source(&shader.shader, source);
    gl.compile_shader(&shader.shader);

    if gl
        .get_shader_parameter(&shader.shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader.shader)
            .unwrap_or_else(|| "Unknown shader error".to_string());
        log::error!("error compiling {} shader: {}", stage, info);
        Err(SceneError::ShaderCompile { stage, log: info })
    }
}

/// Links both stages and makes the program current.
pub fn link_program(
    gl: &Gl,
    vertex: &CompiledShader,
    fragment: &CompiledShader,
) -> Result<ShaderProgram, SceneError> {
    for (shader, expected) in [
        (vertex, ShaderStage::Vertex),
        (fragment, ShaderStage::Fragment),
    ] {
        if shader.stage != expected {
            return Err(SceneError::StageMismatch {
                expected,
                found: shader.stage,
            });
        }
    }

    let program = gl
        .create_program()
        .ok_or(SceneError::Allocation("program"))?;
    let program = ShaderProgram {
        gl: gl.clone(),
        program,
    };

    gl.attach_shader(&program.program, &vertex.shader);
    gl.attach_shader(&program.program, &fragment.shader);
    gl.link_program(&program.program);

    if gl
        .get_program_parameter(&program.program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        program.activate();
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program.program)
            .unwrap_or_else(|| "Unknown program error".to_string());
        log::error!("error linking program: {}", info);
        Err(SceneError::ProgramLink { log: info })
    }
}

pub fn build_program(
    gl: &Gl,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<ShaderProgram, SceneError> {
    let vertex_shader = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment_shader = compile_shader(gl, ShaderStage::Fragment, fragment_source)?;
    link_program(gl, &vertex_shader, &fragment_shader)
}
