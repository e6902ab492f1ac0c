use kraken_core::error::KrakenError;
use kraken_core::graph::Graph;
use kraken_core::node::Node;

#[test]
fn test_new_graph_is_empty() {
    let graph = Graph::new("alpha");
    assert_eq!(graph.name, "alpha");
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.created, graph.modified);
    assert_eq!(graph.created, graph.saved);
}

#[test]
fn test_add_node() {
    let mut graph = Graph::new("alpha");
    graph.add_node(Node::new("first"));

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.nodes()[0].name, "first");
}

#[test]
fn test_add_node_same_identity_counts_once() {
    let mut graph = Graph::new("alpha");
    let node = Node::new("first");
    graph.add_node(node.clone());
    graph.add_node(node);

    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_add_node_equal_payload_distinct_identity_both_retained() {
    let mut graph = Graph::new("alpha");
    graph.add_node(Node::new("same"));
    graph.add_node(Node::new("same"));

    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_add_node_updates_modified() {
    let mut graph = Graph::new("alpha");
    let before = graph.modified;
    graph.add_node(Node::new("first"));

    assert!(graph.modified >= before);
    assert!(graph.modified >= graph.created);
}

#[test]
fn test_remove_node_preserves_order() {
    let mut graph = Graph::new("alpha");
    let a = Node::new("a");
    let b = Node::new("b");
    let c = Node::new("c");
    let b_id = b.id();
    graph.add_node(a);
    graph.add_node(b);
    graph.add_node(c);

    let removed = graph.remove_node(b_id);
    assert_eq!(removed.unwrap().name, "b");
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.nodes()[0].name, "a");
    assert_eq!(graph.nodes()[1].name, "c");
}

#[test]
fn test_remove_node_then_find_misses() {
    let mut graph = Graph::new("alpha");
    let node = Node::new("only");
    let id = node.id();
    graph.add_node(node);

    graph.remove_node(id);
    assert_eq!(graph.node_count(), 0);
    assert!(matches!(
        graph.find_node(&id.to_string()),
        Err(KrakenError::NodeNotFound(_))
    ));
}

#[test]
fn test_remove_nonexistent_node_is_noop() {
    let mut graph = Graph::new("alpha");
    graph.add_node(Node::new("only"));
    let before = graph.modified;

    let removed = graph.remove_node(uuid::Uuid::new_v4());
    assert!(removed.is_none());
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.modified, before);
}

#[test]
fn test_find_node_by_id() {
    let mut graph = Graph::new("alpha");
    let node = Node::new("target");
    let id = node.id();
    graph.add_node(node);

    let found = graph.find_node(&id.to_string()).unwrap();
    assert_eq!(found.name, "target");
    assert_eq!(found.id(), id);
}

#[test]
fn test_find_node_malformed_id_is_invalid_not_notfound() {
    let graph = Graph::new("alpha");
    assert!(matches!(
        graph.find_node("not-an-id"),
        Err(KrakenError::InvalidId(_))
    ));
}

#[test]
fn test_node_identities_are_unique() {
    let a = Node::new("same");
    let b = Node::new("same");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_node_size_estimate_deterministic() {
    let node = Node::new("abcd");
    assert_eq!(node.size_estimate(), 16 + 4);
    assert_eq!(node.size_estimate(), node.size_estimate());
}

#[test]
fn test_graph_size_estimate_sums_nodes() {
    let mut graph = Graph::new("ab");
    assert_eq!(graph.size_estimate(), 16 + 2);

    graph.add_node(Node::new("xyz"));
    assert_eq!(graph.size_estimate(), 16 + 2 + 16 + 3);
}
