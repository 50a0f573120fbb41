pub mod controls;
pub mod page;
pub mod scene;

pub use controls::wire_controls;
pub use page::{wire_error_logging, wire_page_signals, wire_sample_events};
pub use scene::wire_scene_lifecycle;
