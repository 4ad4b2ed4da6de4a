pub mod use_painter_status;

pub use use_painter_status::*;
