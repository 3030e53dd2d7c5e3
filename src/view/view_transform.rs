use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::image_source::{ImageSize, ImageSource};
use crate::input::{EventResponse, PointerButton, ViewerEvent};
use crate::view::{DragState, Rect};

/// Zoom and pan state of one open viewer.
///
/// `offset` is a translation in surface pixels applied after centering the
/// image; `zoom_factor` scales the fitted image. Drags are clamped so that the
/// image centre never leaves `±surface/2 * zoom` on either axis.
///
/// Zoom and offset are kept in `f64` so repeated zooms about a cursor far from
/// the centre do not drift; the public API speaks `f32` surface pixels.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    zoom_factor: f64,
    offset: [f64; 2],
    surface_size: [f64; 2],
    image_size: ImageSize,
    drag: DragState,

    min_zoom: f64,
    max_zoom: f64,
    positive_scroll_factor: f64,
    negative_scroll_factor: f64,
}

impl ViewTransform {
    pub fn new<I: ImageSource + ?Sized>(image: &I) -> Result<Self> {
        Self::with_config(image, &ViewerConfig::default())
    }

    /// Builds a transform whose surface is `config.target_height` tall and as
    /// wide as the image aspect ratio requires.
    pub fn with_config<I: ImageSource + ?Sized>(image: &I, config: &ViewerConfig) -> Result<Self> {
        let image_size = image.size();
        if image_size.height == 0 {
            return Err(ViewerError::InvalidImage {
                width: image_size.width,
                height: image_size.height,
            });
        }
        config.validate()?;

        let min_zoom = config.min_zoom as f64;
        let max_zoom = config.max_zoom as f64;
        let height = config.target_height as f64;
        let width = height * image_size.aspect();

        Ok(Self {
            zoom_factor: 1.0_f64.clamp(min_zoom, max_zoom),
            offset: [0.0, 0.0],
            surface_size: [width, height],
            image_size,
            drag: DragState::Idle,
            min_zoom,
            max_zoom,
            positive_scroll_factor: config.positive_scroll_factor as f64,
            negative_scroll_factor: config.negative_scroll_factor as f64,
        })
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor as f32
    }

    pub fn offset(&self) -> [f32; 2] {
        [self.offset[0] as f32, self.offset[1] as f32]
    }

    pub fn surface_size(&self) -> [f32; 2] {
        [self.surface_size[0] as f32, self.surface_size[1] as f32]
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom as f32, self.max_zoom as f32)
    }

    /// Largest `|offset|` a drag may leave on each axis at the current zoom.
    pub fn pan_bound(&self) -> [f32; 2] {
        [self.axis_bound(0) as f32, self.axis_bound(1) as f32]
    }

    fn axis_bound(&self, axis: usize) -> f64 {
        (self.surface_size[axis] / 2.0) * self.zoom_factor
    }

    /// Accepts a new surface size from the host. Zero or negative sizes
    /// (minimised windows) are ignored.
    pub fn set_surface_size(&mut self, width: f32, height: f32) -> bool {
        if width > 0.0 && height > 0.0 {
            self.surface_size = [width as f64, height as f64];
            true
        } else {
            false
        }
    }

    /// Position of `cursor` relative to the surface centre plus offset,
    /// divided by the zoom factor.
    pub fn texture_space_point(&self, cursor: [f32; 2]) -> [f64; 2] {
        [
            (cursor[0] as f64 - (self.surface_size[0] / 2.0 + self.offset[0])) / self.zoom_factor,
            (cursor[1] as f64 - (self.surface_size[1] / 2.0 + self.offset[1])) / self.zoom_factor,
        ]
    }

    /// Zooms about `cursor` so the point under it stays put. Returns whether
    /// the zoom factor changed; a zero delta or a zoom already at its bound
    /// leaves everything as it was.
    pub fn on_scroll(&mut self, cursor: [f32; 2], delta_y: f32) -> bool {
        if delta_y == 0.0 {
            return false;
        }

        let before = self.texture_space_point(cursor);
        let previous = self.zoom_factor;

        let step = if delta_y > 0.0 {
            self.positive_scroll_factor
        } else {
            self.negative_scroll_factor
        };
        self.zoom_factor = (self.zoom_factor * step).clamp(self.min_zoom, self.max_zoom);

        if self.zoom_factor == previous {
            return false;
        }

        let after = self.texture_space_point(cursor);

        self.offset[0] += (after[0] - before[0]) * self.zoom_factor;
        self.offset[1] += (after[1] - before[1]) * self.zoom_factor;

        log::debug!(
            "zoom {:.3} at {:?}, offset {:?}",
            self.zoom_factor,
            cursor,
            self.offset
        );
        true
    }

    /// Starts a drag at `pos` unless one is already running. The event is
    /// always reported as consumed.
    pub fn on_pointer_down(&mut self, pos: [f32; 2]) -> EventResponse {
        if self.drag.begin(pos) {
            log::debug!("drag started at {:?}", pos);
        }
        EventResponse::consumed()
    }

    /// Pans by the pointer movement since the previous update, then clamps.
    /// Returns false while idle.
    pub fn on_pointer_drag(&mut self, pos: [f32; 2]) -> bool {
        let Some(delta) = self.drag.advance(pos) else {
            return false;
        };

        self.offset[0] += delta[0] as f64;
        self.offset[1] += delta[1] as f64;
        self.clamp_offset();
        true
    }

    pub fn on_pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("drag ended, offset {:?}", self.offset);
        }
        self.drag.end();
    }

    fn clamp_offset(&mut self) {
        for axis in 0..2 {
            let bound = self.axis_bound(axis);
            self.offset[axis] = self.offset[axis].clamp(-bound, bound);
        }
    }

    /// Destination rectangle for drawing the whole image into `surface`.
    ///
    /// The image is fitted inside the surface, scaled by the zoom factor,
    /// centred and then shifted by the pan offset. Coordinates are relative to
    /// the surface origin; `surface.x` and `surface.y` are not added.
    pub fn compute_blit_rect(&self, surface: Rect) -> Rect {
        let image_aspect = self.image_size.aspect();
        let (surface_width, surface_height) = (surface.width as f64, surface.height as f64);
        let surface_aspect = surface_width / surface_height;

        let (scaled_width, scaled_height) = if surface_aspect > image_aspect {
            let h = surface_height * self.zoom_factor;
            (h * image_aspect, h)
        } else {
            let w = surface_width * self.zoom_factor;
            (w, w / image_aspect)
        };

        Rect {
            x: ((surface_width - scaled_width) / 2.0 + self.offset[0]) as f32,
            y: ((surface_height - scaled_height) / 2.0 + self.offset[1]) as f32,
            width: scaled_width as f32,
            height: scaled_height as f32,
        }
    }

    /// Single entry point for hosts that forward events as values.
    pub fn handle_event(&mut self, event: &ViewerEvent) -> EventResponse {
        match *event {
            ViewerEvent::Scroll { cursor, delta_y } => {
                if self.on_scroll(cursor, delta_y) {
                    EventResponse::redraw()
                } else {
                    EventResponse::IGNORED
                }
            }
            ViewerEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => self.on_pointer_down(pos),
            ViewerEvent::PointerDown { .. } => EventResponse::IGNORED,
            ViewerEvent::PointerDrag { pos } => {
                if self.on_pointer_drag(pos) {
                    EventResponse::redraw()
                } else {
                    EventResponse::IGNORED
                }
            }
            ViewerEvent::PointerUp {
                button: PointerButton::Primary,
            } => {
                let was_dragging = self.is_dragging();
                self.on_pointer_up();
                if was_dragging {
                    EventResponse::consumed()
                } else {
                    EventResponse::IGNORED
                }
            }
            ViewerEvent::PointerUp { .. } => EventResponse::IGNORED,
            ViewerEvent::Resized { width, height } => {
                if self.set_surface_size(width, height) {
                    log::info!("surface resized to {}x{}", width, height);
                    EventResponse::redraw()
                } else {
                    EventResponse::IGNORED
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn wide() -> ViewTransform {
        ViewTransform::new(&ImageSize::new(800, 400)).unwrap()
    }

    fn drag_by(view: &mut ViewTransform, delta: [f32; 2]) {
        view.on_pointer_down([100.0, 100.0]);
        view.on_pointer_drag([100.0 + delta[0], 100.0 + delta[1]]);
        view.on_pointer_up();
    }

    fn assert_close(a: [f32; 2], b: [f32; 2], tol: f32) {
        assert!(
            (a[0] - b[0]).abs() <= tol && (a[1] - b[1]).abs() <= tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_construct_sizes_surface_from_aspect() {
        let view = wide();
        assert_eq!(view.surface_size(), [800.0, 400.0]);
        assert_eq!(view.zoom_factor(), 1.0);
        assert_eq!(view.offset(), [0.0, 0.0]);
        assert_eq!(view.drag_state(), DragState::Idle);

        let tall = ViewTransform::new(&ImageSize::new(200, 400)).unwrap();
        assert_eq!(tall.surface_size(), [200.0, 400.0]);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = ViewTransform::new(&ImageSize::new(64, 0)).unwrap_err();
        assert!(matches!(
            err,
            ViewerError::InvalidImage {
                width: 64,
                height: 0
            }
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ViewerConfig {
            min_zoom: 0.0,
            ..Default::default()
        };
        assert!(ViewTransform::with_config(&ImageSize::new(4, 4), &config).is_err());
    }

    #[test]
    fn test_scenario_center_zoom_then_clamped_drag() {
        let mut view = wide();

        view.on_scroll([400.0, 200.0], 5.0);
        assert_eq!(view.zoom_factor(), 0.9);
        assert_eq!(view.offset(), [0.0, 0.0]);

        drag_by(&mut view, [50.0, 0.0]);
        assert_close(view.offset(), [50.0, 0.0], 1e-4);

        drag_by(&mut view, [400.0, 0.0]);
        assert_close(view.offset(), [360.0, 0.0], 1e-4);
    }

    #[test]
    fn test_negative_scroll_zooms_by_larger_factor() {
        let mut view = wide();
        view.on_scroll([400.0, 200.0], -1.0);
        assert!((view.zoom_factor() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_zero_scroll_is_noop() {
        let mut view = wide();
        drag_by(&mut view, [30.0, -20.0]);
        let (zoom, offset) = (view.zoom_factor(), view.offset());

        assert!(!view.on_scroll([10.0, 10.0], 0.0));
        assert_eq!(view.zoom_factor(), zoom);
        assert_eq!(view.offset(), offset);
    }

    fn assert_same_point(before: [f64; 2], after: [f64; 2]) {
        assert!(
            (before[0] - after[0]).abs() <= 1e-4 && (before[1] - after[1]).abs() <= 1e-4,
            "{:?} moved to {:?}",
            before,
            after
        );
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut view = wide();
        let cursor = [520.0, 260.0];

        for delta in [1.0, 1.0, -1.0, -1.0, -1.0, 1.0] {
            let before = view.texture_space_point(cursor);
            view.on_scroll(cursor, delta);
            assert_same_point(before, view.texture_space_point(cursor));
        }
    }

    #[test]
    fn test_zoom_at_edges_after_wide_pan() {
        let mut view = wide();
        drag_by(&mut view, [-400.0, 200.0]);
        for _ in 0..3 {
            view.on_scroll([0.0, 0.0], 1.0);
        }

        for cursor in [[0.0, 0.0], [800.0, 400.0], [0.0, 400.0], [799.5, 0.5]] {
            for delta in [-1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0] {
                let before = view.texture_space_point(cursor);
                view.on_scroll(cursor, delta);
                assert_same_point(before, view.texture_space_point(cursor));
            }
        }
    }

    #[test]
    fn test_zoom_stays_in_bounds() {
        let mut view = wide();
        for _ in 0..100 {
            view.on_scroll([0.0, 0.0], -3.0);
        }
        assert_eq!(view.zoom_factor(), 7.0);

        for _ in 0..100 {
            view.on_scroll([0.0, 0.0], 3.0);
        }
        assert_eq!(view.zoom_factor(), 0.7);
    }

    #[test]
    fn test_random_sequences_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x7e57);
        let mut view = wide();
        let mut pointer = [400.0_f32, 200.0_f32];

        for _ in 0..5_000 {
            match rng.random_range(0..4) {
                0 => {
                    let cursor = [rng.random_range(0.0..800.0), rng.random_range(0.0..400.0)];
                    let delta = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                    let before = view.texture_space_point(cursor);
                    view.on_scroll(cursor, delta);
                    assert_same_point(before, view.texture_space_point(cursor));
                }
                1 => {
                    view.on_pointer_down(pointer);
                }
                2 => {
                    pointer[0] += rng.random_range(-300.0..300.0);
                    pointer[1] += rng.random_range(-300.0..300.0);
                    if view.on_pointer_drag(pointer) {
                        let bound = view.pan_bound();
                        assert!(view.offset()[0].abs() <= bound[0]);
                        assert!(view.offset()[1].abs() <= bound[1]);
                    }
                }
                _ => view.on_pointer_up(),
            }

            let (min, max) = view.zoom_range();
            assert!(view.zoom_factor() >= min && view.zoom_factor() <= max);
        }
    }

    #[test]
    fn test_scroll_at_bound_changes_nothing() {
        let mut view = wide();
        for _ in 0..4 {
            view.on_scroll([400.0, 200.0], 1.0);
        }
        assert_eq!(view.zoom_factor(), 0.7);

        let offset = view.offset();
        assert!(!view.on_scroll([10.0, 390.0], 1.0));
        assert_eq!(view.offset(), offset);

        let r = view.handle_event(&ViewerEvent::Scroll {
            cursor: [10.0, 390.0],
            delta_y: 2.0,
        });
        assert_eq!(r, EventResponse::IGNORED);

        assert!(view.on_scroll([10.0, 390.0], -1.0));
    }

    #[test]
    fn test_drags_compose() {
        let mut split = wide();
        drag_by(&mut split, [10.0, 5.0]);
        drag_by(&mut split, [-3.0, 7.0]);

        let mut single = wide();
        drag_by(&mut single, [7.0, 12.0]);

        assert_eq!(split.offset(), single.offset());
    }

    #[test]
    fn test_continuous_drag_tracks_last_position() {
        let mut view = wide();
        view.on_pointer_down([0.0, 0.0]);
        view.on_pointer_drag([10.0, 0.0]);
        view.on_pointer_drag([25.0, -5.0]);
        assert_eq!(view.offset(), [25.0, -5.0]);
        assert_eq!(
            view.drag_state(),
            DragState::Dragging {
                last_pointer_pos: [25.0, -5.0]
            }
        );
    }

    #[test]
    fn test_drag_clamps_each_axis() {
        let mut view = wide();
        drag_by(&mut view, [-5000.0, 5000.0]);
        assert_eq!(view.offset(), [-400.0, 200.0]);
    }

    #[test]
    fn test_drag_while_idle_is_noop() {
        let mut view = wide();
        assert!(!view.on_pointer_drag([50.0, 50.0]));
        assert_eq!(view.offset(), [0.0, 0.0]);
    }

    #[test]
    fn test_second_pointer_down_keeps_anchor() {
        let mut view = wide();
        view.on_pointer_down([0.0, 0.0]);
        view.on_pointer_down([100.0, 100.0]);
        view.on_pointer_drag([10.0, 10.0]);
        assert_eq!(view.offset(), [10.0, 10.0]);
    }

    #[test]
    fn test_pointer_up_is_idempotent() {
        let mut view = wide();
        view.on_pointer_down([3.0, 4.0]);
        view.on_pointer_drag([8.0, 9.0]);

        view.on_pointer_up();
        let once = (view.drag_state(), view.offset(), view.zoom_factor());
        view.on_pointer_up();
        assert_eq!((view.drag_state(), view.offset(), view.zoom_factor()), once);
    }

    #[test]
    fn test_blit_rect_fits_matching_aspect() {
        let view = wide();
        let rect = view.compute_blit_rect(Rect::from_size(800.0, 400.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 800.0, 400.0));
    }

    #[test]
    fn test_blit_rect_height_constrained_on_wide_surface() {
        let view = wide();
        let rect = view.compute_blit_rect(Rect::from_size(1000.0, 400.0));
        assert_eq!(rect, Rect::new(100.0, 0.0, 800.0, 400.0));
    }

    #[test]
    fn test_blit_rect_width_constrained_on_tall_surface() {
        let view = wide();
        let rect = view.compute_blit_rect(Rect::from_size(400.0, 400.0));
        assert_eq!(rect, Rect::new(0.0, 100.0, 400.0, 200.0));
    }

    #[test]
    fn test_blit_rect_applies_zoom_and_offset() {
        let mut view = ViewTransform::new(&ImageSize::new(400, 400)).unwrap();
        view.on_scroll([200.0, 200.0], -1.0);
        drag_by(&mut view, [20.0, -10.0]);

        let z = view.zoom_factor();
        let rect = view.compute_blit_rect(Rect::new(50.0, 50.0, 400.0, 400.0));
        let size = 400.0 * z;
        assert!((rect.width - size).abs() < 1e-3);
        assert!((rect.height - size).abs() < 1e-3);
        assert!((rect.x - ((400.0 - size) / 2.0 + 20.0)).abs() < 1e-3);
        assert!((rect.y - ((400.0 - size) / 2.0 - 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_resize_changes_clamp_extent() {
        let mut view = wide();
        assert!(view.set_surface_size(200.0, 100.0));
        drag_by(&mut view, [1000.0, 1000.0]);
        assert_eq!(view.offset(), [100.0, 50.0]);

        assert!(!view.set_surface_size(0.0, 100.0));
        assert_eq!(view.surface_size(), [200.0, 100.0]);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut view = wide();

        let r = view.handle_event(&ViewerEvent::PointerDown {
            pos: [0.0, 0.0],
            button: PointerButton::Secondary,
        });
        assert_eq!(r, EventResponse::IGNORED);
        assert!(!view.is_dragging());

        let r = view.handle_event(&ViewerEvent::PointerDown {
            pos: [0.0, 0.0],
            button: PointerButton::Primary,
        });
        assert!(r.consumed && !r.redraw);
        assert!(view.is_dragging());

        let r = view.handle_event(&ViewerEvent::PointerDrag { pos: [5.0, 5.0] });
        assert_eq!(r, EventResponse::redraw());

        let r = view.handle_event(&ViewerEvent::PointerUp {
            button: PointerButton::Primary,
        });
        assert!(r.consumed);
        assert!(!view.is_dragging());

        let r = view.handle_event(&ViewerEvent::Scroll {
            cursor: [400.0, 200.0],
            delta_y: 0.0,
        });
        assert_eq!(r, EventResponse::IGNORED);

        let r = view.handle_event(&ViewerEvent::Resized {
            width: 640.0,
            height: 320.0,
        });
        assert!(r.redraw);
        assert_eq!(view.surface_size(), [640.0, 320.0]);
    }
}
