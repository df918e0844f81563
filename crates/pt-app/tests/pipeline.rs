//! End-to-end export pipeline over a network file.

use pt_app::{
    build_network, load_network, order_system, run_export, AppError, ExportMode, ExportRequest,
    SeedStrategy,
};
use pt_core::ElementId;
use pt_graph::{ElementCategory, FlowDirection, NetworkBuilder, PortSpec, SystemType};
use pt_project::{from_yaml_str, ExportSettings};

// Connector 1 -> pipe 2 (flow 5 l/s) -> pipe 3 (flow 7 l/s), plus the system container.
const NETWORK: &str = r#"
version: 1
name: Boiler room
elements:
  - id: 100
    name: H1 supply
    category: system
  - id: 1
    name: Connector
    category: connector
    ports: [10]
  - id: 2
    name: Pipe 2
    category: pipe
    ports: [20, 21]
    attributes:
      system_name: H1 supply
      system_abbreviation: H1
      flow: 0.005
      length: 2.0
      diameter: 0.032
      level: L1
  - id: 3
    name: Pipe 3
    category: pipe
    ports: [30, 31]
    attributes:
      system_name: H1 supply
      system_abbreviation: H1
      flow: 0.007
      length: 1.25
      diameter: 0.025
      level: L1
      calc_start: true
ports:
  - id: 10
    owner: 1
    direction: in
    system_type: supply
    flow: 0.005
    links: [20]
  - id: 20
    owner: 2
    direction: out
    system_type: supply
    flow: 0.005
  - id: 21
    owner: 2
    direction: in
    system_type: supply
    flow: 0.005
    links: [30]
  - id: 30
    owner: 3
    direction: out
    system_type: supply
    flow: 0.007
  - id: 31
    owner: 3
    direction: in
    system_type: supply
    flow: 0.007
"#;

fn id(raw: u32) -> ElementId {
    ElementId::from_index(raw)
}

fn network() -> pt_graph::Network {
    build_network(&from_yaml_str(NETWORK).unwrap()).unwrap()
}

#[test]
fn traced_export_numbers_one_primary_branch() {
    let network = network();
    let request = ExportRequest {
        system: "H1".to_string(),
        mode: ExportMode::Trace(SystemType::Supply),
        seeds: SeedStrategy::Explicit(vec![id(1)]),
    };
    let outcome = run_export(&network, &ExportSettings::default(), &request).unwrap();

    assert_eq!(outcome.assembly.branches.len(), 1);
    assert!(outcome.assembly.abandoned.is_empty());

    let records = &outcome.records;
    let ids: Vec<ElementId> = records.iter().map(|r| r.element_id).collect();
    assert_eq!(ids, vec![id(1), id(2), id(3)]);
    assert!(records.iter().all(|r| r.branch == 0));
    assert!(records.iter().all(|r| r.classification == "primary"));
    assert_eq!(records[0].key, "----0-0");
    assert_eq!(records[2].key, "H1-L1-0-2");
    assert_eq!(records[2].volume, "7.000");
    assert!((records[2].diameter_mm - 25.0).abs() < 1e-9);
    assert!((records[2].length_m - 1.25).abs() < 1e-9);
}

#[test]
fn export_id_is_stable_across_runs() {
    let network = network();
    let request = ExportRequest {
        system: "H1".to_string(),
        mode: ExportMode::Trace(SystemType::Supply),
        seeds: SeedStrategy::Explicit(vec![id(1)]),
    };
    let settings = ExportSettings::default();
    let a = run_export(&network, &settings, &request).unwrap();
    let b = run_export(&network, &settings, &request).unwrap();
    assert_eq!(a.export_id, b.export_id);
}

#[test]
fn start_pipe_seed_is_the_highest_flow_pipe() {
    let network = network();
    let request = ExportRequest {
        system: "H1".to_string(),
        mode: ExportMode::Trace(SystemType::Supply),
        seeds: SeedStrategy::StartPipes,
    };
    let outcome = run_export(&network, &ExportSettings::default(), &request).unwrap();
    assert_eq!(outcome.seeds, vec![id(3)]);
    assert_eq!(outcome.records.len(), 1);
}

#[test]
fn walk_export_stays_inside_the_tag() {
    let network = network();
    let request = ExportRequest {
        system: "H1".to_string(),
        mode: ExportMode::Walk,
        seeds: SeedStrategy::Explicit(vec![id(2), id(3)]),
    };
    let outcome = run_export(&network, &ExportSettings::default(), &request).unwrap();

    // The second seed was reached by the first walk and adds nothing
    assert_eq!(outcome.assembly.branches.len(), 1);
    let ids: Vec<ElementId> = outcome.records.iter().map(|r| r.element_id).collect();
    assert_eq!(ids, vec![id(2), id(3)]);
}

#[test]
fn missing_seeds_are_reported() {
    let network = network();
    let settings = ExportSettings::default();

    let unknown = ExportRequest {
        system: "H1".to_string(),
        mode: ExportMode::Walk,
        seeds: SeedStrategy::Explicit(vec![id(42)]),
    };
    assert!(matches!(
        run_export(&network, &settings, &unknown),
        Err(AppError::UnknownSeed(42))
    ));

    let empty = ExportRequest {
        system: "H9".to_string(),
        mode: ExportMode::Walk,
        seeds: SeedStrategy::Equipment,
    };
    assert!(matches!(
        run_export(&network, &settings, &empty),
        Err(AppError::NoSeeds(_))
    ));
}

#[test]
fn system_order_follows_outward_neighbors() {
    let network = network();
    let order = order_system(&network, "system_name", "H1 supply").unwrap();
    assert_eq!(order, vec![id(2), id(3)]);
}

#[test]
fn cyclic_system_fails_to_order() {
    let mut b = NetworkBuilder::new();
    let a = b.add_element("A", ElementCategory::Pipe);
    let c = b.add_element("C", ElementCategory::Pipe);
    b.set_attribute(a, "system_name", "loop");
    b.set_attribute(c, "system_name", "loop");
    let pa = b.add_port(a, PortSpec::piping(FlowDirection::Out, SystemType::Supply, 1.0));
    let pc = b.add_port(c, PortSpec::piping(FlowDirection::Out, SystemType::Supply, 1.0));
    b.link(pa, pc);
    let network = b.build().unwrap();

    match order_system(&network, "system_name", "loop") {
        Err(AppError::Cycle { unordered }) => assert_eq!(unordered, vec![a, c]),
        other => panic!("expected cycle, got {other:?}"),
    }
}

#[test]
fn network_file_loads_from_disk() {
    let dir = std::env::temp_dir().join(format!("pt-app-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("network.yaml");
    std::fs::write(&path, NETWORK).unwrap();

    let loaded = load_network(&path).unwrap();
    assert_eq!(loaded.name, "Boiler room");
    assert_eq!(loaded.network.elements().len(), 4);
    assert_eq!(loaded.settings.tag_key, "system_name");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn owner_without_port_list_is_rejected_by_the_builder() {
    let mut file = from_yaml_str(NETWORK).unwrap();
    let pipe = file.elements.iter_mut().find(|e| e.id == 2).unwrap();
    pipe.ports = None;

    match build_network(&file) {
        Err(AppError::Network(msg)) => assert!(msg.contains("not in its port list"), "{msg}"),
        other => panic!("expected network error, got {other:?}"),
    }
}
