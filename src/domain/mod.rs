//! Domain layer: component graphs, traversal visitors, and mediation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading).

pub mod error;
pub mod factory;
pub mod graph;
pub mod mediator;
pub mod visitor;

pub use error::{GraphError, GraphResult, MediatorError, MediatorResult};
pub use graph::{Component, ComponentId, Composite, Machine, MachineKind, PlantGraph};
pub use mediator::Mediator;
pub use visitor::{ComponentVisitor, LeafRake};
