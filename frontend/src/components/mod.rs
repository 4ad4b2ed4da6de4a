pub mod painter_badge;
pub mod reel;
pub mod result_panel;
pub mod splicer;

pub use painter_badge::PainterBadge;
pub use reel::Reel;
pub use result_panel::ResultPanel;
pub use splicer::Splicer;
