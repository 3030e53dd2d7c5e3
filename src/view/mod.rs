mod drag;
mod rect;
mod uniform;
mod view_transform;

pub use drag::DragState;
pub use rect::Rect;
pub use uniform::ScreenUniforms;
pub use view_transform::ViewTransform;
