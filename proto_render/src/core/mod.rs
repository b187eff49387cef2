pub mod layer;
pub mod locking;
pub mod math;
pub mod platform;
pub mod rendering;
pub mod time;
pub mod utils;
pub mod windowing;
