//! Canned plant layouts for demos and tests.
//!
//! Each builder returns the graph together with the handle of its root, so
//! callers can feed the pair straight into the analyses.

use crate::domain::graph::{ComponentId, MachineKind, PlantGraph};

/// Three composites chained into a cycle: 1 → 2 → 3 → 1. Not a tree, and no
/// machine is ever reachable.
pub fn cycle() -> (PlantGraph, ComponentId) {
    let mut graph = PlantGraph::new();
    let c1 = graph.add_composite(1);
    let c2 = graph.add_composite(2);
    let c3 = graph.add_composite(3);
    graph.add_child(c1, c2).expect("composite");
    graph.add_child(c2, c3).expect("composite");
    graph.add_child(c3, c1).expect("composite");
    (graph, c1)
}

/// Acyclic but not a tree: composite 1 holds fuser 2 and composite 3, and
/// composite 3 holds fuser 2 again, so the fuser has two parents.
///
/// ```text
/// 1
/// |\
/// | 3
/// |/
/// 2
/// ```
pub fn diamond() -> (PlantGraph, ComponentId) {
    let mut graph = PlantGraph::new();
    let c1 = graph.add_composite(1);
    let m2 = graph.add_machine(2, MachineKind::Fuser);
    let c3 = graph.add_composite(3);
    graph.add_child(c1, m2).expect("composite");
    graph.add_child(c1, c3).expect("composite");
    graph.add_child(c3, m2).expect("composite");
    (graph, c1)
}

/// A strict little tree:
///
/// ```text
///   123
///  /   \
/// 1     23
///      /  \
///     2    3
/// ```
pub fn tree() -> (PlantGraph, ComponentId) {
    let mut graph = PlantGraph::new();
    let m1 = graph.add_machine(1, MachineKind::Fuser);
    let m2 = graph.add_machine(2, MachineKind::Fuser);
    let m3 = graph.add_machine(3, MachineKind::Fuser);
    let c23 = graph.add_composite(23);
    graph.add_child(c23, m2).expect("composite");
    graph.add_child(c23, m3).expect("composite");
    let c123 = graph.add_composite(123);
    graph.add_child(c123, m1).expect("composite");
    graph.add_child(c123, c23).expect("composite");
    (graph, c123)
}

/// The whole plant: two bays that share a star press, so the layout is a
/// diamond and deliberately not a tree.
pub fn plant() -> (PlantGraph, ComponentId) {
    let mut graph = PlantGraph::new();
    let plant = graph.add_composite(1000);

    let bay1 = graph.add_composite(1100);
    let mixer = graph.add_machine(1101, MachineKind::Mixer);
    let press = graph.add_machine(1102, MachineKind::StarPress);
    graph.add_child(bay1, mixer).expect("composite");
    graph.add_child(bay1, press).expect("composite");

    let bay2 = graph.add_composite(1200);
    let assembler = graph.add_machine(1201, MachineKind::ShellAssembler);
    let fuser = graph.add_machine(1202, MachineKind::Fuser);
    graph.add_child(bay2, assembler).expect("composite");
    // the second bay borrows the first bay's star press
    graph.add_child(bay2, press).expect("composite");
    graph.add_child(bay2, fuser).expect("composite");

    graph.add_child(plant, bay1).expect("composite");
    graph.add_child(plant, bay2).expect("composite");
    (graph, plant)
}

/// The Dublin line: a clean tree with one machine per station, used by the
/// leaf-rake demo.
pub fn dublin() -> (PlantGraph, ComponentId) {
    let mut graph = PlantGraph::new();
    let line = graph.add_composite(2000);

    let prep = graph.add_composite(2100);
    let mixer = graph.add_machine(2101, MachineKind::Mixer);
    let press = graph.add_machine(2102, MachineKind::StarPress);
    graph.add_child(prep, mixer).expect("composite");
    graph.add_child(prep, press).expect("composite");

    let finishing = graph.add_composite(2200);
    let assembler = graph.add_machine(2201, MachineKind::ShellAssembler);
    let fuser = graph.add_machine(2202, MachineKind::Fuser);
    graph.add_child(finishing, assembler).expect("composite");
    graph.add_child(finishing, fuser).expect("composite");

    graph.add_child(line, prep).expect("composite");
    graph.add_child(line, finishing).expect("composite");
    (graph, line)
}
