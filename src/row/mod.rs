mod engine;

pub use engine::RowEngine;
