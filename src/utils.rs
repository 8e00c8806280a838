/// Sentinel for "no road in this direction" in a node's neighbor slots.
pub const INVALID_NODE: u32 = u32::MAX;
