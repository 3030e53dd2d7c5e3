use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::input::{PointerButton, ViewerEvent};
use crate::view::ScreenUniforms;

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub blit_pipeline: RenderPipeline,
}

pub struct ScreenBuffers {
    pub uniform: ScreenUniforms,
    pub buffer: Buffer,
    pub bind_group: BindGroup,
}

pub struct QuadBuffers {
    pub vertex: Buffer,
    pub index: Buffer,
    pub count: u32,
}

/// Host-side pointer tracking. Wheel and button events carry no position, so
/// the last cursor position is remembered here in logical pixels. It is `None`
/// until the first move and after the cursor leaves the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub mouse_pos: Option<[f32; 2]>,
    pub primary_down: bool,
}

impl InputState {
    /// Turns a window event into a viewer event. Presses and wheel movement
    /// are dropped while the cursor position is unknown.
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<ViewerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(scale_factor);
                let pos = [logical.x, logical.y];
                self.mouse_pos = Some(pos);

                self.primary_down.then_some(ViewerEvent::PointerDrag { pos })
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_pos = None;
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);
                match state {
                    ElementState::Pressed => {
                        let pos = self.mouse_pos?;
                        if button == PointerButton::Primary {
                            self.primary_down = true;
                        }
                        Some(ViewerEvent::PointerDown { pos, button })
                    }
                    ElementState::Released => {
                        if button == PointerButton::Primary {
                            self.primary_down = false;
                        }
                        Some(ViewerEvent::PointerUp { button })
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => Some(ViewerEvent::Scroll {
                cursor: self.mouse_pos?,
                delta_y: scroll_delta_y(delta),
            }),
            _ => None,
        }
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Vertical wheel movement with positive meaning "toward the user", which is
/// the direction that shrinks the image.
fn scroll_delta_y(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}
