//! Tests for PlantGraph structure analyses

use plantflow::domain::factory;
use plantflow::domain::{MachineKind, PlantGraph};

// ============================================================
// Tree Detection Tests
// ============================================================

#[test]
fn given_composite_cycle_when_checking_tree_then_false() {
    let (graph, root) = factory::cycle();
    assert!(!graph.is_tree(root));
}

#[test]
fn given_shared_machine_when_checking_tree_then_false() {
    // Acyclic, but the fuser has two parents (a diamond)
    let (graph, root) = factory::diamond();
    assert!(!graph.is_tree(root));
}

#[test]
fn given_single_machine_when_checking_tree_then_true() {
    let mut graph = PlantGraph::new();
    let fuser = graph.add_machine(1, MachineKind::Fuser);
    assert!(graph.is_tree(fuser));
}

#[test]
fn given_strict_tree_when_checking_tree_then_true() {
    let (graph, root) = factory::tree();
    assert!(graph.is_tree(root));
}

#[test]
fn given_plant_layout_when_checking_tree_then_false() {
    // The demo plant shares a star press between two bays
    let (graph, root) = factory::plant();
    assert!(!graph.is_tree(root));
}

#[test]
fn given_dublin_line_when_checking_tree_then_true() {
    let (graph, root) = factory::dublin();
    assert!(graph.is_tree(root));
}

// ============================================================
// Distinct Machine Count Tests
// ============================================================

#[test]
fn given_shared_machine_when_counting_then_counted_once() {
    let (graph, root) = factory::diamond();
    assert_eq!(graph.distinct_machine_count(root), 1);
}

#[test]
fn given_composite_cycle_when_counting_then_zero_and_terminates() {
    let (graph, root) = factory::cycle();
    assert_eq!(graph.distinct_machine_count(root), 0);
}

#[test]
fn given_strict_tree_when_counting_then_all_machines() {
    let (graph, root) = factory::tree();
    assert_eq!(graph.distinct_machine_count(root), 3);
}

#[test]
fn given_single_machine_when_counting_then_one() {
    let mut graph = PlantGraph::new();
    let mixer = graph.add_machine(7, MachineKind::Mixer);
    assert_eq!(graph.distinct_machine_count(mixer), 1);
}

#[test]
fn given_machine_inside_cycle_when_counting_then_counted_once() {
    // 1 -> 2 -> 1 with a fuser hanging off each composite
    let mut graph = PlantGraph::new();
    let c1 = graph.add_composite(1);
    let c2 = graph.add_composite(2);
    let f1 = graph.add_machine(11, MachineKind::Fuser);
    let f2 = graph.add_machine(22, MachineKind::Fuser);
    graph.add_child(c1, c2).unwrap();
    graph.add_child(c1, f1).unwrap();
    graph.add_child(c2, c1).unwrap();
    graph.add_child(c2, f2).unwrap();

    assert!(!graph.is_tree(c1));
    assert_eq!(graph.distinct_machine_count(c1), 2);
}
