use bytemuck::{Pod, Zeroable};
use web_sys::WebGlRenderingContext as Gl;

const FLOAT_BYTES: i32 = std::mem::size_of::<f32>() as i32;

/// Position followed by an RGB color, 6 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RgbVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Position followed by an RGBA color, 7 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RgbaVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl RgbVertex {
    pub fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
        }
    }
}

impl RgbaVertex {
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
        }
    }
}

/// How position and color are interleaved in one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexLayout {
    Rgb,
    Rgba,
}

impl VertexLayout {
    pub const POSITION_COMPONENTS: i32 = 3;

    pub fn color_components(self) -> i32 {
        match self {
            VertexLayout::Rgb => 3,
            VertexLayout::Rgba => 4,
        }
    }

    pub fn stride_floats(self) -> usize {
        (Self::POSITION_COMPONENTS + self.color_components()) as usize
    }

    pub fn stride_bytes(self) -> i32 {
        self.stride_floats() as i32 * FLOAT_BYTES
    }

    pub fn color_offset_bytes(self) -> i32 {
        Self::POSITION_COMPONENTS * FLOAT_BYTES
    }
}

/// Ties a vertex struct to the attribute layout that reads it back.
pub trait Vertex: Pod {
    const LAYOUT: VertexLayout;
}

impl Vertex for RgbVertex {
    const LAYOUT: VertexLayout = VertexLayout::Rgb;
}

impl Vertex for RgbaVertex {
    const LAYOUT: VertexLayout = VertexLayout::Rgba;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    TriangleFan,
    Points,
    Lines,
}

impl DrawMode {
    pub fn gl_mode(self) -> u32 {
        match self {
            DrawMode::Triangles => Gl::TRIANGLES,
            DrawMode::TriangleFan => Gl::TRIANGLE_FAN,
            DrawMode::Points => Gl::POINTS,
            DrawMode::Lines => Gl::LINES,
        }
    }
}

/// CPU-side vertex data for one shape group, flattened to floats.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBuffer {
    pub label: &'static str,
    pub mode: DrawMode,
    pub layout: VertexLayout,
    data: Vec<f32>,
}

impl ShapeBuffer {
    pub fn from_vertices<V: Vertex>(label: &'static str, mode: DrawMode, vertices: &[V]) -> Self {
        Self {
            label,
            mode,
            layout: V::LAYOUT,
            data: bytemuck::cast_slice::<V, f32>(vertices).to_vec(),
        }
    }

    pub fn floats(&self) -> &[f32] {
        &self.data
    }

    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.layout.stride_floats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_vertex_sizes() {
        assert_eq!(
            VertexLayout::Rgb.stride_bytes() as usize,
            std::mem::size_of::<RgbVertex>()
        );
        assert_eq!(
            VertexLayout::Rgba.stride_bytes() as usize,
            std::mem::size_of::<RgbaVertex>()
        );
        assert_eq!(VertexLayout::Rgb.color_offset_bytes(), 12);
        assert_eq!(VertexLayout::Rgba.color_offset_bytes(), 12);
    }

    #[test]
    fn shape_buffer_flattens_interleaved() {
        let vertices = [
            RgbVertex::new(0.0, 0.5, [1.0, 0.65, 0.0]),
            RgbVertex::new(-0.5, -0.5, [1.0, 0.65, 0.0]),
        ];
        let shape = ShapeBuffer::from_vertices("triangle", DrawMode::Triangles, &vertices);

        assert_eq!(shape.layout, VertexLayout::Rgb);
        assert_eq!(shape.vertex_count(), 2);
        assert_eq!(
            shape.floats(),
            &[0.0, 0.5, 0.0, 1.0, 0.65, 0.0, -0.5, -0.5, 0.0, 1.0, 0.65, 0.0]
        );
    }

    #[test]
    fn rgba_buffer_uses_seven_float_stride() {
        let vertices = [RgbaVertex::new(0.8, 0.8, [1.0, 1.0, 0.0, 1.0]); 3];
        let shape = ShapeBuffer::from_vertices("sun", DrawMode::TriangleFan, &vertices);

        assert_eq!(shape.floats().len(), 21);
        assert_eq!(shape.vertex_count(), 3);
    }
}
