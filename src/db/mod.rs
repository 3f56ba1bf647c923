pub mod engine;
pub mod initialize;
pub mod legacy;
pub mod log;
pub mod migrate;
pub mod queries;
pub mod reports;
pub mod stats;

pub use engine::Engine;
