//! Timeline of board steps and the store that owns it.
//!
//! ## Key Types
//!
//! - `Timeline`: Ordered, persistent sequence of steps
//! - `GameStateStore`: Timeline plus id allocator; add / remove / reset / replace

pub mod sequence;
pub mod store;

pub use sequence::Timeline;
pub use store::GameStateStore;
