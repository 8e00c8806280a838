use crate::utils::INVALID_NODE;

/// Graph node: compact and cache-friendly
#[derive(Clone, Debug)]
pub struct Node {
    pub name_idx: u32,       // index into `names`
    pub neighbors: [u32; 4], // destination node per direction; INVALID_NODE if no road
    pub alive: bool,         // city still standing
}

impl Node {
    /// Create a new node with the given name index
    #[inline]
    pub fn new(name_idx: u32) -> Self {
        Self {
            name_idx,
            neighbors: [INVALID_NODE; 4],
            alive: true,
        }
    }

    /// Set the road in a specific direction
    #[inline]
    pub fn set_neighbor(&mut self, direction_idx: usize, neighbor_id: u32) {
        self.neighbors[direction_idx] = neighbor_id;
    }

    /// Get the road destination in a specific direction
    #[inline]
    pub fn get_neighbor(&self, direction_idx: usize) -> Option<u32> {
        let neighbor = self.neighbors[direction_idx];
        if neighbor == INVALID_NODE {
            None
        } else {
            Some(neighbor)
        }
    }

    /// Remove the road in a specific direction
    #[inline]
    pub fn clear_neighbor(&mut self, direction_idx: usize) {
        self.neighbors[direction_idx] = INVALID_NODE;
    }

    /// Remove every outbound road
    #[inline]
    pub fn clear_roads(&mut self) {
        self.neighbors = [INVALID_NODE; 4];
    }

    /// Destroy this city
    #[inline]
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Check if the city still stands
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(42);

        assert_eq!(node.name_idx, 42);
        assert!(node.is_alive());
        assert_eq!(node.neighbors, [INVALID_NODE; 4]);
    }

    #[test]
    fn test_node_neighbors() {
        let mut node = Node::new(0);

        // Initially no roads
        for i in 0..4 {
            assert_eq!(node.get_neighbor(i), None);
        }

        // Set some roads
        node.set_neighbor(0, 10); // North
        node.set_neighbor(2, 20); // East

        assert_eq!(node.get_neighbor(0), Some(10));
        assert_eq!(node.get_neighbor(1), None); // South
        assert_eq!(node.get_neighbor(2), Some(20));
        assert_eq!(node.get_neighbor(3), None); // West
    }

    #[test]
    fn test_node_clear_roads() {
        let mut node = Node::new(0);
        node.set_neighbor(0, 10);
        node.set_neighbor(3, 30);

        node.clear_neighbor(0);
        assert_eq!(node.get_neighbor(0), None);
        assert_eq!(node.get_neighbor(3), Some(30));

        node.clear_roads();
        assert_eq!(node.neighbors, [INVALID_NODE; 4]);
    }

    #[test]
    fn test_node_destruction() {
        let mut node = Node::new(0);

        assert!(node.is_alive());

        node.destroy();
        assert!(!node.is_alive());
    }
}
