//! Command dispatch: load a manifest, run the requested analysis, print it.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::{Component, ComponentId, LeafRake, PlantGraph};
use crate::manifest::{Plant, PlantManifest};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check { manifest }) => check(manifest),
        Some(Commands::Leaves { manifest }) => leaves(manifest),
        Some(Commands::Show { manifest }) => show(manifest),
        Some(Commands::Tubs { manifest }) => tubs(manifest),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn load(manifest: &Path) -> CliResult<Plant> {
    debug!("manifest: {:?}", manifest);
    Ok(PlantManifest::load(manifest)?.build()?)
}

#[instrument]
fn check(manifest: &Path) -> CliResult<()> {
    let plant = load(manifest)?;
    if plant.graph.is_tree(plant.root) {
        output::success("layout is a tree");
    } else {
        output::failure("layout is not a tree (shared or cyclic structure)");
    }
    output::info(&format!(
        "distinct machines: {}",
        plant.graph.distinct_machine_count(plant.root)
    ));
    Ok(())
}

#[instrument]
fn leaves(manifest: &Path) -> CliResult<()> {
    let plant = load(manifest)?;
    let labels = LeafRake::collect_labels(&plant.graph, plant.root);
    output::info(&labels.iter().join(" "));
    Ok(())
}

#[instrument]
fn show(manifest: &Path) -> CliResult<()> {
    let plant = load(manifest)?;
    let mut visited = HashSet::new();
    visited.insert(plant.root);
    println!("{}", render(&plant.graph, plant.root, &mut visited));
    Ok(())
}

/// Render a component as a termtree, descending into each child at most
/// once. Revisited children print as `^ label` stubs, so cyclic and shared
/// layouts render finitely.
fn render(graph: &PlantGraph, id: ComponentId, visited: &mut HashSet<ComponentId>) -> Tree<String> {
    match graph.get(id) {
        Some(Component::Machine(m)) => Tree::new(format!("{} {}", m.kind.as_str(), m.label)),
        Some(Component::Composite(c)) => {
            let mut tree = Tree::new(format!("[{}]", c.label));
            for &child in &c.children {
                if visited.insert(child) {
                    tree.push(render(graph, child, visited));
                } else if let Some(component) = graph.get(child) {
                    tree.push(Tree::new(format!("^ {}", component.label())));
                }
            }
            tree
        }
        None => Tree::new("?".to_string()),
    }
}

#[instrument]
fn tubs(manifest: &Path) -> CliResult<()> {
    let plant = load(manifest)?;
    for machine in plant.mediator.machines() {
        output::header(&format!("machine {}", machine));
        for tub in plant.mediator.tubs_at(machine).iter().sorted() {
            output::detail(tub);
        }
    }
    Ok(())
}
