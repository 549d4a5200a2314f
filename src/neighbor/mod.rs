mod engine;

pub use engine::NeighborEngine;
