pub mod element;
pub mod error;
pub mod log;
pub mod queue;
pub mod shared;
