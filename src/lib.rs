//! # Alien Invasion
//!
//! A simulation of aliens wandering a directed graph of cities until they
//! collide and burn the world down.
//!
//! This library provides the core functionality for loading a city map,
//! placing aliens, moving them along random roads, and destroying any city
//! where two or more of them meet.

pub mod cli;
pub mod direction;
pub mod error;
pub mod invasion;
pub mod simulation;
pub mod utils;
pub mod world;

pub use cli::Args;
pub use direction::Direction;
pub use error::{ParseError, Result};
pub use invasion::CityAliens;
pub use simulation::{DestructionEvent, SimulationEngine};
pub use world::World;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Args, CityAliens, Direction, ParseError, Result, SimulationEngine, World};
}
