/// All things related to the windowing system
pub mod events;
pub mod window_manager;

mod window;
pub use window::*;
