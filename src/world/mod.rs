pub mod node;
pub mod parser;
pub mod world;

pub use node::Node;
pub use parser::{parse_world, parse_world_from_str};
pub use world::World;
