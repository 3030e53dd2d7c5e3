#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Corners of `rect` in clockwise order from the top-left, with texture
/// coordinates covering the whole image.
pub fn quad_vertices(rect: crate::view::Rect) -> [QuadVertex; 4] {
    let [x0, y0] = rect.min();
    let [x1, y1] = rect.max();
    [
        QuadVertex {
            position: [x0, y0],
            uv: [0.0, 0.0],
        },
        QuadVertex {
            position: [x1, y0],
            uv: [1.0, 0.0],
        },
        QuadVertex {
            position: [x1, y1],
            uv: [1.0, 1.0],
        },
        QuadVertex {
            position: [x0, y1],
            uv: [0.0, 1.0],
        },
    ]
}
