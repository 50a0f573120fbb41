pub mod audio;
pub mod catalog;
pub mod constants;
pub mod controller;
pub mod error;
pub mod readiness;
pub mod scene;
pub mod state;

pub use audio::*;
pub use catalog::*;
pub use controller::*;
pub use error::*;
pub use readiness::*;
pub use scene::*;
pub use state::*;
