use anyhow::Result;
use clap::{Parser, Subcommand};
use rig_advisor::commands::{
    check_catalog_command, init_command, list_catalog_command, recommend_command, sweep_command,
};
use rig_advisor::init_logging;

/// Budget PC build advisor CLI.
///
/// This CLI is a thin wrapper around `rig-advisor-core` (exposed in code as
/// `rig_advisor_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "rig-advisor",
    version,
    about = "Recommend the best compatible PC build for a budget",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize an advisor root.
    ///
    /// This will:
    /// - Write `rig-advisor.json` with default budget limits and currency display.
    /// - Write `catalog.json` with the demonstration catalog (if absent).
    Init {
        /// Advisor root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,
    },

    /// Recommend the best build for a budget.
    Recommend {
        /// Budget in whole currency units. Defaults to the configured default budget.
        #[arg(long)]
        budget: Option<u64>,

        /// Advisor root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Catalog file (json/yaml). Overrides the config's catalog entry.
        #[arg(long)]
        catalog: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Do not clamp the budget to the configured range.
        #[arg(long, default_value_t = false)]
        no_clamp: bool,
    },

    /// List the parts in the resolved catalog.
    Catalog {
        /// Advisor root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Catalog file (json/yaml). Overrides the config's catalog entry.
        #[arg(long)]
        catalog: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Validate a catalog and print its fingerprint.
    CheckCatalog {
        /// Advisor root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Catalog file (json/yaml). Overrides the config's catalog entry.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Run the selector across a budget range.
    Sweep {
        /// First budget (inclusive).
        #[arg(long)]
        from: u64,

        /// Last budget (inclusive).
        #[arg(long)]
        to: u64,

        /// Budget increment. Defaults to the configured step.
        #[arg(long)]
        step: Option<u64>,

        /// Advisor root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Catalog file (json/yaml). Overrides the config's catalog entry.
        #[arg(long)]
        catalog: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Init { root, name } => init_command(&root, name)?,
        Command::Recommend { budget, root, catalog, json, no_clamp } => {
            recommend_command(&root, budget, catalog.as_deref(), json, !no_clamp)?
        }
        Command::Catalog { root, catalog, json } => {
            list_catalog_command(&root, catalog.as_deref(), json)?
        }
        Command::CheckCatalog { root, catalog } => {
            check_catalog_command(&root, catalog.as_deref())?
        }
        Command::Sweep { from, to, step, root, catalog, json } => {
            sweep_command(&root, catalog.as_deref(), from, to, step, json)?
        }
    }

    Ok(())
}
