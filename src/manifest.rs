//! Plant manifest files.
//!
//! A manifest is a TOML document describing a plant layout: machines,
//! composites with ordered child label lists, the root component, and the
//! initial tub assignments. External tooling writes these; we only promise
//! faithful construction of the in-memory graph. Because children are
//! referenced by label, a manifest can express shared nodes and cycles, but
//! whether a serializer preserves such sharing on a round trip is not part
//! of the contract.
//!
//! ```toml
//! root = 1000
//!
//! [[machines]]
//! label = 1101
//! kind = "mixer"
//!
//! [[composites]]
//! label = 1000
//! children = [1101]
//!
//! [[tubs]]
//! name = "t20305"
//! machine = 1101
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::domain::{ComponentId, GraphError, MachineKind, Mediator, MediatorError, PlantGraph};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("label {0} is declared more than once")]
    DuplicateLabel(u32),

    #[error("unknown machine kind '{0}' (expected fuser, mixer, star-press, or shell-assembler)")]
    UnknownKind(String),

    #[error("composite {parent} references undeclared child {child}")]
    UnknownChild { parent: u32, child: u32 },

    #[error("root {0} is not a declared component")]
    UnknownRoot(u32),

    #[error("tub '{tub}' assigned to undeclared machine {machine}")]
    UnknownTubMachine { tub: String, machine: u32 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ManifestResult<T> = Result<T, ManifestError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineSpec {
    pub label: u32,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSpec {
    pub label: u32,
    #[serde(default)]
    pub children: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TubSpec {
    pub name: String,
    pub machine: u32,
}

/// Declarative plant description, the construction surface for external
/// tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantManifest {
    pub root: u32,
    #[serde(default)]
    pub machines: Vec<MachineSpec>,
    #[serde(default)]
    pub composites: Vec<CompositeSpec>,
    #[serde(default)]
    pub tubs: Vec<TubSpec>,
}

/// A plant built from a manifest: the graph, its root handle, and the
/// mediator seeded with the declared tub assignments.
#[derive(Debug)]
pub struct Plant {
    pub graph: PlantGraph,
    pub root: ComponentId,
    pub mediator: Mediator,
}

fn parse_kind(spec: &str) -> ManifestResult<MachineKind> {
    match spec {
        "fuser" => Ok(MachineKind::Fuser),
        "mixer" => Ok(MachineKind::Mixer),
        "star-press" => Ok(MachineKind::StarPress),
        "shell-assembler" => Ok(MachineKind::ShellAssembler),
        other => Err(ManifestError::UnknownKind(other.to_string())),
    }
}

impl PlantManifest {
    pub fn from_str(content: &str) -> ManifestResult<Self> {
        Ok(toml::from_str(content)?)
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Build the in-memory plant this manifest describes.
    ///
    /// Labels must be unique within the document so child references can be
    /// resolved; the graph itself does not care. Children are wired in a
    /// second pass, so composites may reference components declared later,
    /// including themselves.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self) -> ManifestResult<Plant> {
        let mut graph = PlantGraph::new();
        let mut by_label: HashMap<u32, ComponentId> = HashMap::new();

        for machine in &self.machines {
            let kind = parse_kind(&machine.kind)?;
            let id = graph.add_machine(machine.label, kind);
            if by_label.insert(machine.label, id).is_some() {
                return Err(ManifestError::DuplicateLabel(machine.label));
            }
        }
        for composite in &self.composites {
            let id = graph.add_composite(composite.label);
            if by_label.insert(composite.label, id).is_some() {
                return Err(ManifestError::DuplicateLabel(composite.label));
            }
        }

        for composite in &self.composites {
            let parent = by_label[&composite.label];
            for &child_label in &composite.children {
                let child =
                    *by_label
                        .get(&child_label)
                        .ok_or(ManifestError::UnknownChild {
                            parent: composite.label,
                            child: child_label,
                        })?;
                graph.add_child(parent, child)?;
            }
        }

        let root = *by_label
            .get(&self.root)
            .ok_or(ManifestError::UnknownRoot(self.root))?;

        let mut mediator = Mediator::new();
        for machine in &self.machines {
            mediator.register_machine(machine.label);
        }
        for tub in &self.tubs {
            mediator.set_machine(&tub.name, tub.machine).map_err(|e| {
                let MediatorError::UnknownMachine(machine) = e;
                ManifestError::UnknownTubMachine {
                    tub: tub.name.clone(),
                    machine,
                }
            })?;
        }

        Ok(Plant {
            graph,
            root,
            mediator,
        })
    }
}
