//! Visitor protocol over the component variants.
//!
//! Dispatch happens in [`PlantGraph::accept`]: an exhaustive match on the
//! variant calls the matching handler. There are no default method bodies,
//! so a visitor that misses a variant does not compile.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::graph::{Component, ComponentId, Composite, Machine, PlantGraph};

/// One handler per component variant, invoked via double dispatch.
///
/// Handlers for composites decide whether and how to descend; the graph only
/// promises that children appear in stored order when a visitor walks them.
pub trait ComponentVisitor {
    fn visit_machine(&mut self, graph: &PlantGraph, id: ComponentId, machine: &Machine);
    fn visit_composite(&mut self, graph: &PlantGraph, id: ComponentId, composite: &Composite);
}

/// Rakes the machines (leaves) out of a component graph in traversal order.
///
/// Carries a visited set scoped to a single [`LeafRake::collect`] call, so
/// traversal terminates on cyclic graphs and a machine shared by several
/// composites is collected once.
#[derive(Debug, Default)]
pub struct LeafRake {
    visited: HashSet<ComponentId>,
    leaves: Vec<ComponentId>,
}

impl LeafRake {
    /// Collect the distinct machines reachable from `root`, depth-first in
    /// stored child order.
    #[instrument(level = "debug", skip(graph))]
    pub fn collect(graph: &PlantGraph, root: ComponentId) -> Vec<ComponentId> {
        let mut rake = LeafRake::default();
        rake.visited.insert(root);
        graph.accept(root, &mut rake);
        rake.leaves
    }

    /// Like [`collect`](Self::collect), but resolves handles to labels.
    pub fn collect_labels(graph: &PlantGraph, root: ComponentId) -> Vec<u32> {
        Self::collect(graph, root)
            .into_iter()
            .filter_map(|id| graph.get(id).map(Component::label))
            .collect()
    }
}

impl ComponentVisitor for LeafRake {
    fn visit_machine(&mut self, _graph: &PlantGraph, id: ComponentId, _machine: &Machine) {
        self.leaves.push(id);
    }

    fn visit_composite(&mut self, graph: &PlantGraph, _id: ComponentId, composite: &Composite) {
        for &child in &composite.children {
            if self.visited.insert(child) {
                graph.accept(child, self);
            }
        }
    }
}
