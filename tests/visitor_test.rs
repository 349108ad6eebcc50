//! Tests for visitor dispatch and the leaf rake

use plantflow::domain::factory;
use plantflow::domain::{
    Component, ComponentId, ComponentVisitor, Composite, LeafRake, Machine, MachineKind,
    PlantGraph,
};

// ============================================================
// LeafRake Tests
// ============================================================

#[test]
fn given_strict_tree_when_raking_then_machines_in_stored_order() {
    let (graph, root) = factory::tree();
    let labels = LeafRake::collect_labels(&graph, root);
    assert_eq!(labels, vec![1, 2, 3]);
}

#[test]
fn given_shared_machine_when_raking_then_collected_once() {
    let (graph, root) = factory::diamond();
    let labels = LeafRake::collect_labels(&graph, root);
    assert_eq!(labels, vec![2]);
}

#[test]
fn given_composite_cycle_when_raking_then_empty_and_terminates() {
    let (graph, root) = factory::cycle();
    assert!(LeafRake::collect(&graph, root).is_empty());
}

#[test]
fn given_machine_root_when_raking_then_single_leaf() {
    let mut graph = PlantGraph::new();
    let press = graph.add_machine(2402, MachineKind::StarPress);
    let leaves = LeafRake::collect(&graph, press);
    assert_eq!(leaves, vec![press]);
}

#[test]
fn given_two_rakes_when_run_back_to_back_then_results_independent() {
    // The visited set is scoped to one collect call, not the process
    let (graph, root) = factory::diamond();
    let first = LeafRake::collect_labels(&graph, root);
    let second = LeafRake::collect_labels(&graph, root);
    assert_eq!(first, second);
}

// ============================================================
// Custom Visitor Tests
// ============================================================

/// Counts handler invocations per variant without descending past
/// already-seen nodes.
#[derive(Default)]
struct VariantTally {
    visited: std::collections::HashSet<ComponentId>,
    machines: usize,
    composites: usize,
}

impl ComponentVisitor for VariantTally {
    fn visit_machine(&mut self, _graph: &PlantGraph, _id: ComponentId, _machine: &Machine) {
        self.machines += 1;
    }

    fn visit_composite(&mut self, graph: &PlantGraph, _id: ComponentId, composite: &Composite) {
        self.composites += 1;
        for &child in &composite.children {
            if self.visited.insert(child) {
                graph.accept(child, self);
            }
        }
    }
}

#[test]
fn given_plant_layout_when_tallying_then_each_component_dispatched_once() {
    let (graph, root) = factory::plant();
    let mut tally = VariantTally::default();
    tally.visited.insert(root);
    graph.accept(root, &mut tally);

    // plant: root + two bays, four machines (the star press is shared)
    assert_eq!(tally.composites, 3);
    assert_eq!(tally.machines, 4);
}

#[test]
fn given_composite_cycle_when_tallying_then_terminates() {
    let (graph, root) = factory::cycle();
    let mut tally = VariantTally::default();
    tally.visited.insert(root);
    graph.accept(root, &mut tally);

    assert_eq!(tally.composites, 3);
    assert_eq!(tally.machines, 0);
}

#[test]
fn given_dublin_line_when_raking_then_kinds_resolve() {
    let (graph, root) = factory::dublin();
    let kinds: Vec<MachineKind> = LeafRake::collect(&graph, root)
        .into_iter()
        .filter_map(|id| match graph.get(id) {
            Some(Component::Machine(m)) => Some(m.kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            MachineKind::Mixer,
            MachineKind::StarPress,
            MachineKind::ShellAssembler,
            MachineKind::Fuser,
        ]
    );
}
