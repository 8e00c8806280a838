use crate::direction::Direction;
use crate::world::node::Node;

/// Final world: names + nodes (no hashmaps kept at runtime)
#[derive(Clone, Debug)]
pub struct World {
    pub names: Vec<String>,
    pub nodes: Vec<Node>,
}

impl World {
    /// Create a new world from names and nodes
    pub fn new(names: Vec<String>, nodes: Vec<Node>) -> Self {
        Self { names, nodes }
    }

    /// Get a node by id
    #[inline]
    pub fn node(&self, idx: u32) -> Option<&Node> {
        self.nodes.get(idx as usize)
    }

    /// Get a mutable node by id
    #[inline]
    pub fn node_mut(&mut self, idx: u32) -> Option<&mut Node> {
        self.nodes.get_mut(idx as usize)
    }

    /// Get the name of a city by node id
    pub fn city_name(&self, node_id: u32) -> &str {
        &self.names[self.nodes[node_id as usize].name_idx as usize]
    }

    /// Ids of the cities still standing, in node order
    pub fn surviving_cities(&self) -> Vec<u32> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, nd)| nd.is_alive().then_some(i as u32))
            .collect()
    }

    /// Count surviving cities
    pub fn count_survivors(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_alive()).count()
    }

    /// Destinations of a city's outbound roads, one entry per road.
    ///
    /// A destination reachable via two directions appears twice, so a uniform
    /// pick over this list weights destinations by road count.
    pub fn destinations(&self, city: u32) -> Vec<u32> {
        match self.node(city) {
            Some(node) => Direction::ALL
                .iter()
                .filter_map(|d| node.get_neighbor(d.index()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Destroy a city: sever inbound roads from its own destinations, then
    /// drop the city and all its roads.
    ///
    /// Only cities the destroyed city points at get their inbound links
    /// pruned. Other cities pointing at it keep a dangling road, matching the
    /// reference behavior for asymmetric maps.
    pub fn destroy_city(&mut self, city: u32) {
        for dest in self.destinations(city) {
            if let Some(node) = self.node_mut(dest) {
                for direction in Direction::ALL {
                    if node.get_neighbor(direction.index()) == Some(city) {
                        node.clear_neighbor(direction.index());
                    }
                }
            }
        }
        if let Some(node) = self.node_mut(city) {
            node.clear_roads();
            node.destroy();
        }
    }

    /// Render the remaining world in the input format, one line per
    /// surviving city, preceded by the dump header
    pub fn render_world(&self) -> String {
        let mut out = String::with_capacity(128);
        out.push_str("\n----- THE REMAINING WORLD ----------\n");
        if self.count_survivors() == 0 {
            out.push_str("All cities are destroyed.\n");
        }
        for node in &self.nodes {
            if !node.is_alive() {
                continue;
            }
            out.push_str(&self.names[node.name_idx as usize]);

            for &direction in &Direction::ALL {
                if let Some(neighbor_id) = node.get_neighbor(direction.index()) {
                    out.push(' ');
                    out.push_str(direction.as_str());
                    out.push('=');
                    out.push_str(&self.names[self.nodes[neighbor_id as usize].name_idx as usize]);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Print the remaining world
    pub fn print_world(&self) {
        print!("{}", self.render_world());
    }
}
