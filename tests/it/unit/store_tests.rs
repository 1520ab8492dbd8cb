//! Store invariants under arbitrary operation sequences.

use archboard::geometry::point2;
use archboard::store::{DiagramStore, StoreEvent};
use archboard::types::{Edge, EdgeId, Node, NodeData, NodeId};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
enum Op {
    AddNode(usize),
    AddEdge(usize, usize),
    DeleteNode(usize),
    DeleteNodes(usize, usize),
    SelectNode(usize, bool),
    SelectEdge(usize),
    Move(usize, f64, f64),
    DeselectAll,
}

const NODE_SLOTS: usize = 8;

fn id(slot: usize) -> NodeId {
    NodeId::from(format!("n{slot}"))
}

fn node(i: usize) -> Node {
    Node::new(id(i), "server", point2(i as f64 * 200.0, 0.0), NodeData::default())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let slot = 0..NODE_SLOTS;
    prop_oneof![
        3 => slot.clone().prop_map(Op::AddNode),
        3 => (slot.clone(), slot.clone()).prop_map(|(a, b)| Op::AddEdge(a, b)),
        1 => slot.clone().prop_map(Op::DeleteNode),
        1 => (slot.clone(), slot.clone()).prop_map(|(a, b)| Op::DeleteNodes(a, b)),
        1 => (slot.clone(), any::<bool>()).prop_map(|(a, additive)| Op::SelectNode(a, additive)),
        1 => (0..16usize).prop_map(Op::SelectEdge),
        1 => (slot, -2000.0..2000.0f64, -2000.0..2000.0f64).prop_map(|(a, x, y)| Op::Move(a, x, y)),
        1 => Just(Op::DeselectAll),
    ]
}

fn apply(store: &mut DiagramStore, step: usize, op: Op) {
    match op {
        Op::AddNode(a) => {
            store.add_node(node(a));
        }
        Op::AddEdge(a, b) => {
            store.add_edge(Edge::new(EdgeId::from(format!("e{step}")), id(a), id(b)));
        }
        Op::DeleteNode(a) => {
            store.delete_node(&id(a));
        }
        Op::DeleteNodes(a, b) => {
            store.delete_nodes(&[id(a), id(b)]);
        }
        Op::SelectNode(a, additive) => {
            store.select_node(&id(a), additive);
        }
        Op::SelectEdge(i) => {
            if let Some(edge_id) = store.edges().get(i).map(|e| e.id.clone()) {
                store.select_edge(&edge_id);
            }
        }
        Op::Move(a, x, y) => {
            store.update_node_position(&id(a), point2(x, y));
        }
        Op::DeselectAll => {
            store.deselect_all();
        }
    }
}

fn check_invariants(store: &DiagramStore) -> Result<(), TestCaseError> {
    for edge in store.edges() {
        prop_assert!(store.contains_node(&edge.source), "dangling source in {:?}", edge);
        prop_assert!(store.contains_node(&edge.target), "dangling target in {:?}", edge);
    }
    let pairs: HashSet<_> = store.edges().iter().map(|e| (&e.source, &e.target)).collect();
    prop_assert_eq!(pairs.len(), store.edges().len());
    let selection = store.selection();
    prop_assert!(selection.nodes().is_empty() || selection.edge().is_none());
    for id in selection.nodes() {
        prop_assert!(store.contains_node(id));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..120)) {
        let mut store = DiagramStore::new();
        for (step, op) in ops.into_iter().enumerate() {
            apply(&mut store, step, op);
            check_invariants(&store)?;
        }
    }

    #[test]
    fn repeated_add_edge_keeps_one_per_pair(a in 0..NODE_SLOTS, b in 0..NODE_SLOTS, repeats in 1..6usize) {
        let mut store = DiagramStore::new();
        store.add_node(node(a));
        store.add_node(node(b));
        for i in 0..repeats {
            store.add_edge(Edge::new(EdgeId::from(format!("e{i}")), id(a), id(b)));
        }
        prop_assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn repeated_dimensions_change_once(w in 1.0..1000.0f64, h in 1.0..1000.0f64) {
        let mut store = DiagramStore::new();
        store.add_node(node(0));
        store.drain_events();
        prop_assert!(store.update_node_dimensions(&id(0), w, h));
        prop_assert!(!store.update_node_dimensions(&id(0), w, h));
        prop_assert_eq!(store.drain_events().len(), 1);
    }
}

#[test]
fn test_repeated_add_edge_keeps_one() {
    let mut store = DiagramStore::new();
    store.add_node(node(0));
    store.add_node(node(1));
    assert!(store.add_edge(Edge::connect("n0".into(), "n1".into())));
    assert!(!store.add_edge(Edge::connect("n0".into(), "n1".into())));
    assert_eq!(store.edges().len(), 1);

    // The reverse direction is a different pair
    assert!(store.add_edge(Edge::connect("n1".into(), "n0".into())));
    assert_eq!(store.edges().len(), 2);
}

#[test]
fn test_dimension_update_emits_once() {
    let mut store = DiagramStore::new();
    store.add_node(node(0));
    store.drain_events();

    assert!(store.update_node_dimensions(&"n0".into(), 180.0, 72.0));
    assert!(!store.update_node_dimensions(&"n0".into(), 180.0, 72.0));
    assert_eq!(store.drain_events(), vec![StoreEvent::NodeResized("n0".into())]);
}

#[test]
fn test_cascade_is_one_event() {
    let mut store = DiagramStore::new();
    for i in 0..3 {
        store.add_node(node(i));
    }
    store.add_edge(Edge::new("e01".into(), "n0".into(), "n1".into()));
    store.add_edge(Edge::new("e12".into(), "n1".into(), "n2".into()));
    store.add_edge(Edge::new("e02".into(), "n0".into(), "n2".into()));
    store.select_node(&"n1".into(), false);
    store.drain_events();

    assert!(store.delete_node(&"n1".into()));
    assert_eq!(
        store.drain_events(),
        vec![StoreEvent::NodesDeleted {
            nodes: vec!["n1".into()],
            edges: vec!["e01".into(), "e12".into()],
        }]
    );
    assert_eq!(store.edges().len(), 1);
    assert!(store.selection().is_empty());
}

#[test]
fn test_moved_node_is_found_at_new_position() {
    let mut store = DiagramStore::new();
    store.add_node(node(0));
    store.update_node_position(&"n0".into(), point2(1000.0, 1000.0));
    assert!(store.nodes_at_point(point2(10.0, 10.0)).is_empty());
    assert_eq!(store.nodes_at_point(point2(1010.0, 1010.0)), vec![NodeId::from("n0")]);
}
