pub mod progress_display;
pub mod toc_preview;

pub use progress_display::*;
pub use toc_preview::*;
