//! Domain-level errors

use thiserror::Error;

/// Errors from graph construction.
///
/// Read-side analyses (`is_tree`, `distinct_machine_count`, rakes) never
/// fail: cyclic and shared structure is characterized, not rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("machine {0} is a leaf and cannot hold children")]
    NotComposite(u32),

    #[error("component handle does not resolve in this graph")]
    ComponentNotFound,
}

/// Errors from mediated tub reassignment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MediatorError {
    #[error("machine {0} is not registered with this mediator")]
    UnknownMachine(u32),
}

pub type GraphResult<T> = Result<T, GraphError>;
pub type MediatorResult<T> = Result<T, MediatorError>;
