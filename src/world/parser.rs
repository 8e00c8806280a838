use crate::direction::Direction;
use crate::error::{ParseError, Result};
use crate::world::node::Node;
use crate::world::world::World;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parse a world map from a file path.
///
/// Each non-blank line is `CityName dir1=Dest1 dir2=Dest2 ...`. Destinations
/// that never lead a line of their own still become (roadless) cities, so
/// every road target is a node. A repeated city line replaces that city's
/// earlier roads entirely.
pub fn parse_world(path: &str) -> Result<World> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    let mut names: Vec<String> = Vec::with_capacity(1024);
    let mut name_to_id: HashMap<String, u32> = HashMap::with_capacity(1024);
    let mut edges: Vec<(u32, Direction, String)> = Vec::with_capacity(4096);
    let mut sources: Vec<u32> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let city = parts
            .next()
            .ok_or_else(|| ParseError::InvalidLine("missing city name".to_string()))?;

        let src_id = *name_to_id.entry(city.to_string()).or_insert_with(|| {
            let id = names.len() as u32;
            names.push(city.to_string());
            id
        });

        // Last occurrence of a city line wins
        if sources.contains(&src_id) {
            edges.retain(|(src, _, _)| *src != src_id);
        } else {
            sources.push(src_id);
        }

        for kv in parts {
            if let Some(eq) = kv.find('=') {
                let dir_s = &kv[..eq];
                let dst_s = &kv[eq + 1..];
                let dir: Direction = dir_s.parse()?;
                edges.push((src_id, dir, dst_s.to_string()));
            }
        }
    }

    // Ensure ids exist for destinations not seen as sources
    for (_, _, dst) in &edges {
        name_to_id.entry(dst.clone()).or_insert_with(|| {
            let id = names.len() as u32;
            names.push(dst.clone());
            id
        });
    }

    let mut nodes: Vec<Node> = (0..names.len()).map(|i| Node::new(i as u32)).collect();

    for (src, dir, dst_name) in &edges {
        if let Some(&dst) = name_to_id.get(dst_name) {
            nodes[*src as usize].set_neighbor(dir.index(), dst);
        }
    }

    Ok(World::new(names, nodes))
}

/// Parse a world map directly from an in-memory string for testing
pub fn parse_world_from_str(src: &str) -> World {
    let mut names: Vec<String> = Vec::new();
    let mut name_to_id: HashMap<String, u32> = HashMap::new();
    let mut edges: Vec<(u32, Direction, String)> = Vec::new();
    let mut sources: Vec<u32> = Vec::new();

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let city = parts.next().expect("missing city name");

        let src_id = *name_to_id.entry(city.to_string()).or_insert_with(|| {
            let id = names.len() as u32;
            names.push(city.to_string());
            id
        });

        if sources.contains(&src_id) {
            edges.retain(|(src, _, _)| *src != src_id);
        } else {
            sources.push(src_id);
        }

        for kv in parts {
            if let Some(eq) = kv.find('=') {
                let dir_s = &kv[..eq];
                let dst_s = &kv[eq + 1..];
                let dir = dir_s.parse().expect("invalid direction");
                edges.push((src_id, dir, dst_s.to_string()));
            }
        }
    }

    for (_, _, dst) in &edges {
        name_to_id.entry(dst.clone()).or_insert_with(|| {
            let id = names.len() as u32;
            names.push(dst.clone());
            id
        });
    }

    let mut nodes: Vec<Node> = (0..names.len()).map(|i| Node::new(i as u32)).collect();
    for (src, dir, dst_name) in &edges {
        let dst = *name_to_id.get(dst_name).unwrap();
        nodes[*src as usize].set_neighbor(dir.index(), dst);
    }

    World::new(names, nodes)
}
