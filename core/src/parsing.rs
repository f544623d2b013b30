//! Binary graph file codec.
//!
//! Layout, all integers and floats little-endian:
//!
//! ```text
//! u32 node_count
//! node_count x [16-byte UUID]
//! u32 edge_count
//! edge_count x [16-byte UUID a][16-byte UUID b][f64 weight]
//! ```
//!
//! Listing nodes separately keeps isolated nodes across a round trip.

use crate::error::GraphFileError;
use crate::graph::WeightedGraph;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memmap2::Mmap;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};
use tracing::debug;
use uuid::Uuid;

const UUID_LEN: usize = 16;
const COUNT_LEN: usize = 4;
const EDGE_LEN: usize = 2 * UUID_LEN + 8;

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Mmap, std::io::Error> {
    let file = File::open(file_path)?;
    unsafe { Mmap::map(&file) }
}

pub fn read_graph_file(graph_path: &Path) -> Result<WeightedGraph<Uuid>, GraphFileError> {
    let graph_data = open_memory_mapped_file(graph_path)?;
    let graph = parse_graph_bytes(&graph_data)?;

    debug!(
        path = %graph_path.display(),
        nodes = graph.nodes().count(),
        edges = graph.edge_count(),
        "graph file loaded"
    );
    Ok(graph)
}

pub fn parse_graph_bytes(data: &[u8]) -> Result<WeightedGraph<Uuid>, GraphFileError> {
    let mut cursor = Cursor::new(data);
    let mut graph = WeightedGraph::new();

    let node_count = read_count(&mut cursor)?;
    ensure_remaining(&cursor, node_count * UUID_LEN)?;
    for _ in 0..node_count {
        graph.add_node(read_uuid(&mut cursor)?);
    }

    let edge_count = read_count(&mut cursor)?;
    ensure_remaining(&cursor, edge_count * EDGE_LEN)?;
    for index in 0..edge_count {
        let a = read_uuid(&mut cursor)?;
        let b = read_uuid(&mut cursor)?;
        let weight = cursor.read_f64::<LittleEndian>()?;

        if !weight.is_finite() {
            return Err(GraphFileError::NonFiniteWeight { index });
        }
        if weight < 0.0 {
            return Err(GraphFileError::NegativeWeight { index });
        }
        graph.add_edge(a, b, weight);
    }

    Ok(graph)
}

pub fn encode_graph(graph: &WeightedGraph<Uuid>) -> Vec<u8> {
    let nodes: Vec<&Uuid> = graph.nodes().collect();
    let edges = graph.weights().edges();
    let mut buffer = Vec::with_capacity(
        2 * COUNT_LEN + nodes.len() * UUID_LEN + edges.len() * EDGE_LEN,
    );

    // Writes into a Vec cannot fail.
    let _ = buffer.write_u32::<LittleEndian>(nodes.len() as u32);
    for node in nodes {
        buffer.extend_from_slice(node.as_bytes());
    }

    let _ = buffer.write_u32::<LittleEndian>(edges.len() as u32);
    for (a, b, weight) in edges {
        buffer.extend_from_slice(a.as_bytes());
        buffer.extend_from_slice(b.as_bytes());
        let _ = buffer.write_f64::<LittleEndian>(*weight);
    }

    buffer
}

pub fn write_graph_file(graph_path: &Path, graph: &WeightedGraph<Uuid>) -> Result<(), GraphFileError> {
    std::fs::write(graph_path, encode_graph(graph))?;
    debug!(
        path = %graph_path.display(),
        edges = graph.edge_count(),
        "graph file written"
    );
    Ok(())
}

fn read_count(cursor: &mut Cursor<&[u8]>) -> Result<usize, GraphFileError> {
    ensure_remaining(cursor, COUNT_LEN)?;
    Ok(cursor.read_u32::<LittleEndian>()? as usize)
}

fn read_uuid(cursor: &mut Cursor<&[u8]>) -> Result<Uuid, GraphFileError> {
    let mut uuid_bytes = [0u8; UUID_LEN];
    cursor.read_exact(&mut uuid_bytes)?;
    Ok(Uuid::from_bytes(uuid_bytes))
}

fn ensure_remaining(cursor: &Cursor<&[u8]>, expected: usize) -> Result<(), GraphFileError> {
    let actual = cursor
        .get_ref()
        .len()
        .saturating_sub(cursor.position() as usize);
    if actual < expected {
        return Err(GraphFileError::Truncated { expected, actual });
    }
    Ok(())
}
