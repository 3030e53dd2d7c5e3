use crate::app_state::State;
use crate::input::ViewerEvent;

use winit::event::*;

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            let surface = self.surface_rect();
            self.screen.uniform.update((surface.width, surface.height));
            self.gpu.queue.write_buffer(
                &self.screen.buffer,
                0,
                bytemuck::cast_slice(&[self.screen.uniform]),
            );

            self.dispatch(ViewerEvent::Resized {
                width: surface.width,
                height: surface.height,
            });
        }
    }

    /// Forwards a viewer event and schedules a redraw when it changed what is
    /// on screen. Returns whether the event was consumed.
    fn dispatch(&mut self, event: ViewerEvent) -> bool {
        let response = self.view.handle_event(&event);
        if response.redraw {
            self.window.request_redraw();
        }
        response.consumed
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match self.input.translate(event, self.window.scale_factor()) {
            Some(viewer_event) => self.dispatch(viewer_event),
            None => false,
        }
    }
}
