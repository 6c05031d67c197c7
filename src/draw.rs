use web_sys::{WebGlBuffer, WebGlRenderingContext as Gl, WebGlUniformLocation};

use crate::context::line_width_range;
use crate::error::SceneError;
use crate::scene::ScenePass;
use crate::shader::ShaderProgram;
use crate::vertex::{ShapeBuffer, VertexLayout};

/// An uploaded vertex buffer. Deleted on drop.
pub struct GpuBuffer {
    gl: Gl,
    buffer: WebGlBuffer,
    layout: VertexLayout,
    vertex_count: usize,
}

impl GpuBuffer {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for GpuBuffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
    }
}

/// The context plus the active program and its resolved locations. Every
/// upload and draw goes through here.
pub struct GlSession {
    gl: Gl,
    program: ShaderProgram,
    a_position: u32,
    a_color: u32,
    u_point_size: Option<WebGlUniformLocation>,
    line_width_range: Option<(f32, f32)>,
}

impl GlSession {
    pub fn new(gl: Gl, program: ShaderProgram) -> Result<Self, SceneError> {
        program.activate();

        let a_position = gl.get_attrib_location(program.handle(), "a_position");
        if a_position < 0 {
            return Err(SceneError::MissingAttribute("a_position"));
        }
        let a_color = gl.get_attrib_location(program.handle(), "a_color");
        if a_color < 0 {
            return Err(SceneError::MissingAttribute("a_color"));
        }
        let u_point_size = gl.get_uniform_location(program.handle(), "u_pointSize");
        if u_point_size.is_none() {
            log::warn!("u_pointSize uniform not found; point sizes will be ignored");
        }

        let a_position = a_position as u32;
        let a_color = a_color as u32;
        gl.enable_vertex_attrib_array(a_position);
        gl.enable_vertex_attrib_array(a_color);

        let line_width_range = line_width_range(&gl);
        log::debug!("line width range: {:?}", line_width_range);

        Ok(Self {
            gl,
            program,
            a_position,
            a_color,
            u_point_size,
            line_width_range,
        })
    }

    /// The program this session draws with; callers compare it against
    /// `CURRENT_PROGRAM`.
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    pub fn upload(&self, shape: &ShapeBuffer) -> Result<GpuBuffer, SceneError> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(SceneError::Allocation("vertex buffer"))?;
        let buffer = GpuBuffer {
            gl: self.gl.clone(),
            buffer,
            layout: shape.layout,
            vertex_count: shape.vertex_count(),
        };

        let data = js_sys::Float32Array::from(shape.floats());
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer.buffer));
        self.gl
            .buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &data, Gl::STATIC_DRAW);

        log::debug!(
            "uploaded {} ({} vertices, {:?})",
            shape.label,
            buffer.vertex_count,
            buffer.layout
        );
        Ok(buffer)
    }

    /// Points both attributes at `buffer` using its own layout.
    fn bind_attributes(&self, buffer: &GpuBuffer) {
        let layout = buffer.layout;
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer.buffer));
        self.gl.vertex_attrib_pointer_with_i32(
            self.a_position,
            VertexLayout::POSITION_COMPONENTS,
            Gl::FLOAT,
            false,
            layout.stride_bytes(),
            0,
        );
        self.gl.vertex_attrib_pointer_with_i32(
            self.a_color,
            layout.color_components(),
            Gl::FLOAT,
            false,
            layout.stride_bytes(),
            layout.color_offset_bytes(),
        );
    }

    fn set_line_width(&self, width: f32) {
        if let Some((min, max)) = self.line_width_range {
            if width < min || width > max {
                log::debug!(
                    "line width {} outside supported range {}..={}; it will be clamped",
                    width,
                    min,
                    max
                );
            }
        }
        self.gl.line_width(width);
    }

    pub fn draw_pass(&self, buffer: &GpuBuffer, pass: &ScenePass) {
        self.bind_attributes(buffer);

        for draw in &pass.draws {
            if let Some(size) = draw.point_size {
                self.gl.uniform1f(self.u_point_size.as_ref(), size);
            }
            if let Some(width) = draw.line_width {
                self.set_line_width(width);
            }
            self.gl.draw_arrays(
                pass.shape.mode.gl_mode(),
                draw.first as i32,
                draw.count as i32,
            );
        }
    }

    pub fn clear(&self, color: [f32; 4]) {
        self.gl.clear_color(color[0], color[1], color[2], color[3]);
        self.gl.clear(Gl::COLOR_BUFFER_BIT);
    }
}
