use crate::app_state::State;
use crate::vertex::quad_vertices;

impl State {
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let blit = self.view.compute_blit_rect(self.surface_rect());
        self.gpu.queue.write_buffer(
            &self.quad.vertex,
            0,
            bytemuck::cast_slice(&quad_vertices(blit)),
        );

        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blit Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.gpu.blit_pipeline);
            render_pass.set_bind_group(0, &self.screen.bind_group, &[]);
            render_pass.set_bind_group(1, &self.image.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.quad.vertex.slice(..));
            render_pass.set_index_buffer(self.quad.index.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.quad.count, 0, 0..1);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
