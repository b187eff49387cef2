/// Locking primitives used across the engine.
///
/// We re-export them from a single place so that changing the lock
/// implementation doesn't require touching every module.
pub use parking_lot::{Mutex, RwLock};
