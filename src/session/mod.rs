//! Event-facing board session.

mod board;

pub use board::{BoardSession, ImageBatch};
