//! Integration tests for pt-graph.

use std::collections::HashSet;

use pt_graph::{
    build_node, Domain, ElementCategory, FlowDirection, NetworkBuilder, NodeArena, PortSource,
    PortSpec, SystemType,
};

fn supply(direction: FlowDirection, flow: f64) -> PortSpec {
    PortSpec::piping(direction, SystemType::Supply, flow)
}

#[test]
fn self_joints_never_become_neighbors() {
    // A fitting whose two ports are joined to each other
    let mut builder = NetworkBuilder::new();
    let tee = builder.add_element("Tee", ElementCategory::Fitting);
    let a = builder.add_port(tee, supply(FlowDirection::Out, 1.0));
    let b = builder.add_port(tee, supply(FlowDirection::Bidirectional, 1.0));
    builder.link(a, b);
    let network = builder.build().unwrap();

    let node = build_node(&network, tee);
    assert!(!node.neighbors.contains(&tee));
    assert!(node.connections.is_empty());
}

#[test]
fn containers_never_become_neighbors() {
    let mut builder = NetworkBuilder::new();
    let pipe = builder.add_element("Pipe", ElementCategory::Pipe);
    let system = builder.add_element("Supply system", ElementCategory::System);
    let p = builder.add_port(pipe, supply(FlowDirection::In, 1.0));
    let s = builder.add_port(system, supply(FlowDirection::Out, 1.0));
    builder.link(p, s);
    let network = builder.build().unwrap();

    assert!(network.is_container(system));
    let node = build_node(&network, pipe);
    assert!(!node.neighbors.contains(&system));
    assert!(!node.connections.contains_key(&system));
}

#[test]
fn star_fitting_resolves_all_outward_neighbors() {
    // Three pipes feeding one cross fitting
    let mut builder = NetworkBuilder::new();
    let cross = builder.add_element("Cross", ElementCategory::Fitting);
    let mut feeders = Vec::new();
    for i in 0..3 {
        let pipe = builder.add_element(format!("P{i}"), ElementCategory::Pipe);
        let c = builder.add_port(cross, supply(FlowDirection::In, 1.0));
        let p = builder.add_port(pipe, supply(FlowDirection::Out, 1.0));
        builder.link(c, p);
        feeders.push(pipe);
    }
    let network = builder.build().unwrap();

    let node = build_node(&network, cross);
    assert_eq!(node.neighbors, feeders);
}

#[test]
fn hvac_ports_participate_in_adjacency() {
    let mut builder = NetworkBuilder::new();
    let duct = builder.add_element("Duct", ElementCategory::Pipe);
    let fan = builder.add_element("Fan", ElementCategory::Equipment);
    let d = builder.add_port(duct, supply(FlowDirection::In, 1.0).in_domain(Domain::Hvac));
    let f = builder.add_port(fan, supply(FlowDirection::Out, 1.0).in_domain(Domain::Hvac));
    builder.link(d, f);
    let network = builder.build().unwrap();

    assert_eq!(build_node(&network, duct).neighbors, vec![fan]);
}

#[test]
fn node_building_is_idempotent() {
    let mut builder = NetworkBuilder::new();
    let hub = builder.add_element("Hub", ElementCategory::Equipment);
    for i in 0..4 {
        let pipe = builder.add_element(format!("P{i}"), ElementCategory::Pipe);
        let direction = if i % 2 == 0 {
            FlowDirection::Out
        } else {
            FlowDirection::In
        };
        let h = builder.add_port(hub, supply(FlowDirection::Bidirectional, 1.0));
        let p = builder.add_port(pipe, supply(direction, 1.0));
        builder.link(h, p);
    }
    let network = builder.build().unwrap();

    let first = build_node(&network, hub);
    let second = build_node(&network, hub);
    assert_eq!(first.neighbor_set(), second.neighbor_set());
    let keys = |n: &pt_graph::Node| n.connections.keys().copied().collect::<HashSet<_>>();
    assert_eq!(keys(&first), keys(&second));
    assert_eq!(first.neighbors.len(), 2);
    assert_eq!(first.connections.len(), 4);
}

#[test]
fn arena_matches_direct_build() {
    let mut builder = NetworkBuilder::new();
    let a = builder.add_element("A", ElementCategory::Pipe);
    let b = builder.add_element("B", ElementCategory::Pipe);
    let pa = builder.add_port(a, supply(FlowDirection::In, 1.0));
    let pb = builder.add_port(b, supply(FlowDirection::Out, 1.0));
    builder.link(pa, pb);
    let network = builder.build().unwrap();

    let mut arena = NodeArena::new(&network);
    let direct = build_node(&network, a);
    assert_eq!(arena.node(a), Some(&direct));
    assert_eq!(arena.neighbors(b), Vec::new());
}
