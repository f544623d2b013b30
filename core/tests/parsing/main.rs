use bidipath_core::parsing::{encode_graph, parse_graph_bytes};
use bidipath_core::{
    Graph, GraphFileError, WeightedGraph, read_graph_file, shortest_distance, write_graph_file,
};
use byteorder::{LittleEndian, WriteBytesExt};
use tempfile::NamedTempFile;
use uuid::Uuid;

fn sample_graph() -> (WeightedGraph<Uuid>, [Uuid; 4]) {
    let ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    let mut graph = WeightedGraph::new();
    graph.add_edge(ids[0], ids[1], 1.5);
    graph.add_edge(ids[1], ids[2], 2.25);
    graph.add_node(ids[3]);
    (graph, ids)
}

fn encode_edge(buffer: &mut Vec<u8>, a: Uuid, b: Uuid, weight: f64) {
    buffer.extend_from_slice(a.as_bytes());
    buffer.extend_from_slice(b.as_bytes());
    buffer.write_f64::<LittleEndian>(weight).unwrap();
}

#[test]
fn test_graph_file_roundtrip() {
    let (graph, ids) = sample_graph();
    let file = NamedTempFile::new().unwrap();

    write_graph_file(file.path(), &graph).unwrap();
    let loaded = read_graph_file(file.path()).unwrap();

    assert_eq!(loaded.node_count(), 4);
    assert_eq!(loaded.edge_count(), 2);
    assert_eq!(loaded.weights().get(&ids[2], &ids[1]), Some(2.25));
    assert!(loaded.contains_node(&ids[3]));
    assert_eq!(loaded.neighbors(&ids[3]).count(), 0);

    let distance = shortest_distance(&loaded, &ids[0], &ids[2], loaded.weight_fn()).unwrap();
    assert_eq!(distance, 3.75);
}

#[test]
fn test_encoded_layout() {
    let (graph, _) = sample_graph();

    let bytes = encode_graph(&graph);

    // 4 + 4 * 16 node ids, 4 + 2 * (16 + 16 + 8) edges
    assert_eq!(bytes.len(), 4 + 64 + 4 + 80);
    assert_eq!(&bytes[..4], &4u32.to_le_bytes());
}

#[test]
fn test_empty_input_is_truncated() {
    let result = parse_graph_bytes(&[]);

    assert!(matches!(
        result,
        Err(GraphFileError::Truncated {
            expected: 4,
            actual: 0
        })
    ));
}

#[test]
fn test_truncated_edge_section() {
    let mut bytes = Vec::new();
    bytes.write_u32::<LittleEndian>(0).unwrap();
    bytes.write_u32::<LittleEndian>(2).unwrap();
    encode_edge(&mut bytes, Uuid::new_v4(), Uuid::new_v4(), 1.0);

    let result = parse_graph_bytes(&bytes);

    assert!(matches!(
        result,
        Err(GraphFileError::Truncated {
            expected: 80,
            actual: 40
        })
    ));
}

#[test]
fn test_negative_weight_rejected() {
    let mut bytes = Vec::new();
    bytes.write_u32::<LittleEndian>(0).unwrap();
    bytes.write_u32::<LittleEndian>(2).unwrap();
    encode_edge(&mut bytes, Uuid::new_v4(), Uuid::new_v4(), 1.0);
    encode_edge(&mut bytes, Uuid::new_v4(), Uuid::new_v4(), -3.0);

    let result = parse_graph_bytes(&bytes);

    assert!(matches!(result, Err(GraphFileError::NegativeWeight { index: 1 })));
}

#[test]
fn test_non_finite_weight_rejected() {
    let mut bytes = Vec::new();
    bytes.write_u32::<LittleEndian>(0).unwrap();
    bytes.write_u32::<LittleEndian>(1).unwrap();
    encode_edge(&mut bytes, Uuid::new_v4(), Uuid::new_v4(), f64::NAN);

    let result = parse_graph_bytes(&bytes);

    assert!(matches!(result, Err(GraphFileError::NonFiniteWeight { index: 0 })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = read_graph_file(&dir.path().join("absent.bin"));

    assert!(matches!(result, Err(GraphFileError::Io(_))));
}
