//! CLI for building and decoding viewer links.

mod args;
mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ngstate_core::config::{self, NgConfig};
use ngstate_core::state::{BlendMode, Layout};

use args::{
    parse_named_source, parse_positive, parse_positive_triple, parse_triple, parse_unit_interval,
    NamedSource,
};
use commands::{run_completions, run_decode, run_demo, run_man, run_source, run_url};

/// Top-level CLI for ngstate.
#[derive(Debug, Parser)]
#[command(name = "ngstate")]
#[command(about = "ngstate: build and decode shareable Neuroglancer viewer links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the link for the bloss18 image volume at (42000, 53780, 200), xy layout.
    Demo {
        /// Viewer URL to put before `#!` (default: config `viewer_prefix`).
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Build a viewer state from flags and print its link.
    Url(UrlArgs),

    /// Decode a link and print its state as JSON.
    Decode {
        /// Link containing a `#!` state fragment.
        url: String,

        /// Print compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Parse a layer source URI and describe it.
    Source {
        /// Source URI, e.g. boss://https://api.boss.neurodata.io/coll/exp/chan.
        uri: String,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    /// Image layer as NAME=SOURCE (repeatable, kept in order).
    #[arg(long = "image", value_name = "NAME=SOURCE", value_parser = parse_named_source)]
    pub images: Vec<NamedSource>,

    /// Segmentation layer as NAME=SOURCE (repeatable, after image layers).
    #[arg(long = "segmentation", value_name = "NAME=SOURCE", value_parser = parse_named_source)]
    pub segmentations: Vec<NamedSource>,

    /// Panel layout: xy, xz, yz, xy-3d, xz-3d, yz-3d, 4panel, 3d.
    #[arg(long)]
    pub layout: Option<Layout>,

    /// Voxel coordinates of the view center.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_triple, allow_hyphen_values = true)]
    pub position: Option<[f64; 3]>,

    /// Voxel size in nanometers (each component > 0).
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_positive_triple)]
    pub voxel_size: Option<[f64; 3]>,

    /// Cross-section zoom factor (> 0).
    #[arg(long, value_parser = parse_positive)]
    pub zoom: Option<f64>,

    /// Blend mode for every image layer.
    #[arg(long)]
    pub blend: Option<BlendMode>,

    /// Opacity for every image layer, in [0, 1].
    #[arg(long, value_parser = parse_unit_interval)]
    pub opacity: Option<f64>,

    /// Viewer URL to put before `#!` (default: config `viewer_prefix`).
    #[arg(long)]
    pub prefix: Option<String>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(|| {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(cfg)
        })
    }

    /// Dispatches the command. Only commands that build a state call `load_config`.
    pub(crate) fn run(self, load_config: impl FnOnce() -> Result<NgConfig>) -> Result<()> {
        match self {
            CliCommand::Demo { prefix } => run_demo(&load_config()?, prefix.as_deref())?,
            CliCommand::Url(args) => run_url(&load_config()?, &args)?,
            CliCommand::Decode { url, compact } => run_decode(&url, compact)?,
            CliCommand::Source { uri } => run_source(&uri)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
