mod app;
mod app_state;
mod cli;
mod event_handler;
mod renderer;
mod state;
mod texture;
mod vertex;

pub mod config;
pub mod error;
pub mod image_source;
pub mod input;
pub mod view;

// Re-export the main public interface
pub use app::{WINDOW_TITLE, run};
pub use cli::CliArgs;
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use image_source::{ImageSize, ImageSource};
pub use input::{EventResponse, PointerButton, ViewerEvent};
pub use view::{DragState, Rect, ViewTransform};
