//! Point particles and the allocator handing out their ids.
pub mod new;
pub mod properties;

pub use new::{IdAllocator, Particle, DEFAULT_CATEGORY};
