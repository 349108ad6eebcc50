//! Arena-based component graph for plant process flows.
//!
//! Machines (leaves) and composites live in a single arena and are addressed
//! by stable `ComponentId` handles. Child references are plain handles, so a
//! node may be shared by several parents or (through repeated `add_child`)
//! become its own descendant. The structure is a general directed graph;
//! tree-ness is a computed property, never an assumption.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{GraphError, GraphResult};
use crate::domain::visitor::ComponentVisitor;

/// Stable handle to a node in a [`PlantGraph`].
///
/// Nodes are never removed, so a handle obtained from a graph stays valid
/// for that graph's lifetime.
pub type ComponentId = Index;

/// Concrete machine types found on the plant floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Fuser,
    Mixer,
    StarPress,
    ShellAssembler,
}

impl MachineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineKind::Fuser => "fuser",
            MachineKind::Mixer => "mixer",
            MachineKind::StarPress => "star-press",
            MachineKind::ShellAssembler => "shell-assembler",
        }
    }
}

/// Leaf node: a concrete machine.
///
/// Labels are opaque identity for display and mediation; the graph does not
/// require them to be unique.
#[derive(Debug, Clone)]
pub struct Machine {
    pub label: u32,
    pub kind: MachineKind,
}

/// Interior node: holds an ordered sequence of child handles.
#[derive(Debug, Clone)]
pub struct Composite {
    pub label: u32,
    pub children: Vec<ComponentId>,
}

/// Closed variant set for graph nodes.
///
/// Visitors must handle every variant; adding one here breaks every visitor
/// at compile time rather than falling through a default branch at runtime.
#[derive(Debug, Clone)]
pub enum Component {
    Machine(Machine),
    Composite(Composite),
}

impl Component {
    pub fn label(&self) -> u32 {
        match self {
            Component::Machine(m) => m.label,
            Component::Composite(c) => c.label,
        }
    }
}

/// Arena-backed graph of plant components.
#[derive(Debug, Default)]
pub struct PlantGraph {
    arena: Arena<Component>,
}

impl PlantGraph {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn add_machine(&mut self, label: u32, kind: MachineKind) -> ComponentId {
        self.arena.insert(Component::Machine(Machine { label, kind }))
    }

    pub fn add_composite(&mut self, label: u32) -> ComponentId {
        self.arena.insert(Component::Composite(Composite {
            label,
            children: Vec::new(),
        }))
    }

    /// Append `child` to `parent`'s child sequence.
    ///
    /// No structural validation happens here: cycles, diamonds, and repeated
    /// children are all legal and must be tolerated by every read-side
    /// operation. Fails only when `parent` is a leaf machine or when a handle
    /// does not belong to this graph.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: ComponentId, child: ComponentId) -> GraphResult<()> {
        if !self.arena.contains(child) {
            return Err(GraphError::ComponentNotFound);
        }
        match self.arena.get_mut(parent) {
            Some(Component::Composite(c)) => {
                c.children.push(child);
                Ok(())
            }
            Some(Component::Machine(m)) => Err(GraphError::NotComposite(m.label)),
            None => Err(GraphError::ComponentNotFound),
        }
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.arena.get(id)
    }

    /// Child handles of `id` in stored order; empty for machines.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        match self.arena.get(id) {
            Some(Component::Composite(c)) => &c.children,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// True iff the graph reachable from `root` is a rooted tree: every
    /// reachable node has exactly one path from `root`.
    ///
    /// Iterative mark-before-descend sweep. A child that is already marked
    /// when about to be explored proves either a cycle (the child is an
    /// ancestor) or a diamond (the child has a second parent); both disprove
    /// tree-ness. The visited set alone bounds the walk, so the sweep
    /// terminates on any graph in O(V+E) without call recursion. A bare
    /// machine is trivially a tree of size one.
    #[instrument(level = "debug", skip(self))]
    pub fn is_tree(&self, root: ComponentId) -> bool {
        let mut visited: HashSet<ComponentId> = HashSet::new();
        visited.insert(root);
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            for &child in self.children(current) {
                if !visited.insert(child) {
                    return false;
                }
                stack.push(child);
            }
        }
        true
    }

    /// Count distinct machine (leaf) nodes reachable from `root`.
    ///
    /// A machine reachable via several paths counts once. A composite-only
    /// cycle yields zero; the same visited-before-descend discipline as
    /// [`is_tree`](Self::is_tree) guarantees termination.
    #[instrument(level = "debug", skip(self))]
    pub fn distinct_machine_count(&self, root: ComponentId) -> usize {
        let mut visited: HashSet<ComponentId> = HashSet::new();
        visited.insert(root);
        let mut stack = vec![root];
        let mut count = 0;

        while let Some(current) = stack.pop() {
            match self.arena.get(current) {
                Some(Component::Machine(_)) => count += 1,
                Some(Component::Composite(c)) => {
                    for &child in &c.children {
                        if visited.insert(child) {
                            stack.push(child);
                        }
                    }
                }
                None => {}
            }
        }
        count
    }

    /// Double dispatch: invoke the visitor handler matching `id`'s variant.
    ///
    /// Recursion into children is the visitor's decision; when a visitor
    /// recurses it sees children in stored sequence order. A handle that does
    /// not resolve is skipped silently, which only arises with handles from a
    /// different graph.
    pub fn accept<V: ComponentVisitor>(&self, id: ComponentId, visitor: &mut V) {
        match self.arena.get(id) {
            Some(Component::Machine(m)) => visitor.visit_machine(self, id, m),
            Some(Component::Composite(c)) => visitor.visit_composite(self, id, c),
            None => {}
        }
    }
}
