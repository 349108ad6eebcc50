//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Plant process-flow modeling: composite machine graphs, traversal visitors, and mediated tub assignment
#[derive(Parser, Debug)]
#[command(name = "plantflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether the plant layout is a tree and how many machines it reaches
    Check {
        /// Plant manifest (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
    },

    /// Rake the machines out of the layout, in traversal order
    Leaves {
        /// Plant manifest (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
    },

    /// Render the layout from its root; revisited components show as back-references
    Show {
        /// Plant manifest (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
    },

    /// List tub assignments per machine
    Tubs {
        /// Plant manifest (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
