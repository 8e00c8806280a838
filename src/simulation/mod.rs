pub mod engine;

pub use engine::{DestructionEvent, SimulationEngine};
