//! fbgen CLI — scaffolding and build helpers for the fb rendering demos.
//!
//! `scaffold` expands the demo module templates for every configured module.
//! The remaining commands are standalone helpers: `binary-info`, `star`
//! and `scan-shaders`. `init-config` dumps the compiled-in module list so it
//! can be edited and passed back to `scaffold --config`.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fbgen",
    about = "Demo module scaffolding and build helpers for the fb rendering codebase",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the source, header and shader files for every demo module
    Scaffold {
        /// Workspace root the module base directory is resolved against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Module list to use instead of the compiled-in one
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write the compiled-in module list as an editable config file
    InitConfig {
        /// Destination file
        #[arg(long, short, default_value = "fbgen.config.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the size and SHA-256 of a built binary
    BinaryInfo {
        /// Path to the binary
        path: PathBuf,
    },

    /// Emit the star mesh vertex and index tables as source
    Star {
        /// Number of ring vertices
        #[arg(long, default_value = "10")]
        points: u16,

        /// Base radius
        #[arg(long, default_value = "0.5")]
        radius: f64,

        /// Radius ratio of the star tips
        #[arg(long, default_value = "1.0")]
        outer: f64,

        /// Radius ratio of the notches between tips
        #[arg(long, default_value = "0.4")]
        inner: f64,
    },

    /// List HLSL assignments that look like they should be constants
    ScanShaders {
        /// Directory searched recursively for .hlsl files
        #[arg(long, default_value = "src")]
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scaffold { root, config } => {
            commands::scaffold::run(&root, config.as_deref())?;
        }
        Commands::InitConfig { output, force } => {
            commands::init_config::run(&output, force)?;
        }
        Commands::BinaryInfo { path } => {
            commands::binary_info::run(&path)?;
        }
        Commands::Star {
            points,
            radius,
            outer,
            inner,
        } => {
            commands::star::run(fbgen_tools::star::StarParams {
                points,
                radius,
                outer,
                inner,
            })?;
        }
        Commands::ScanShaders { root } => {
            commands::scan_shaders::run(&root)?;
        }
    }

    Ok(())
}
