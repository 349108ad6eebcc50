//! plantflow: plant process-flow modeling.
//!
//! The core is a hierarchical component model: machines and composites form
//! a directed graph that may be cyclic or diamond-shaped, analyses over it
//! ([`PlantGraph::is_tree`], [`PlantGraph::distinct_machine_count`], visitor
//! traversals) characterize such structure rather than rejecting it, and a
//! [`Mediator`] keeps the tub↔machine assignment relation consistent under
//! reassignment. A TOML manifest layer and a small CLI sit on top.
//!
//! All guarantees apply to the in-memory graph; serialized forms (manifests)
//! do not promise to preserve structural sharing across a round trip.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod manifest;

pub use domain::{
    Component, ComponentId, ComponentVisitor, Composite, GraphError, GraphResult, LeafRake,
    Machine, MachineKind, Mediator, MediatorError, MediatorResult, PlantGraph,
};
pub use manifest::{ManifestError, ManifestResult, Plant, PlantManifest};
