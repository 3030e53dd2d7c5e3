/// Logical size of the render target, used by the blit shader to map pixel
/// positions to clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniforms {
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2], // Padding to make it 16-byte aligned
}

impl ScreenUniforms {
    pub fn new(window_size: (f32, f32)) -> Self {
        Self {
            screen_size: [window_size.0, window_size.1],
            _padding: [0.0, 0.0],
        }
    }

    pub fn update(&mut self, window_size: (f32, f32)) {
        self.screen_size = [window_size.0, window_size.1];
    }
}
