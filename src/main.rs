#![forbid(unsafe_code)]
//! Claude Setup Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use claude_setup::commands::{
    execute_catalog, execute_init, execute_plan, CatalogOptions, InitOptions, PlanOptions,
};
use claude_setup::ExistingFilesAction;

#[derive(Parser)]
#[command(name = "claude-setup")]
#[command(about = "Configure Claude Code for any project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the setup wizard and write the configuration
    Init {
        /// Directory to start from
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Create a new project directory with this name
        #[arg(long)]
        new: Option<String>,

        /// Template directory to copy artifacts from
        #[arg(long, env = "CLAUDE_SETUP_TEMPLATES")]
        templates: Option<PathBuf>,

        /// Preset answers file (JSON or YAML)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Skip interactive prompts (answers file or earlier setup required)
        #[arg(short = 'y', long)]
        yes: bool,

        /// What to do with files from an earlier setup
        #[arg(long, value_enum)]
        mode: Option<ExistingFilesAction>,
    },

    /// Show which components an answers file selects
    Plan {
        /// Answers file (JSON or YAML)
        answers: PathBuf,

        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available templates
    Catalog {
        /// Template directory
        #[arg(long, env = "CLAUDE_SETUP_TEMPLATES")]
        templates: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            dir,
            new,
            templates,
            answers,
            yes,
            mode,
        } => {
            let options = InitOptions {
                dir,
                new,
                templates,
                answers,
                yes,
                mode,
            };
            tokio::task::spawn_blocking(move || execute_init(options)).await?
        }

        Commands::Plan { answers, json } => execute_plan(PlanOptions { answers, json }),

        Commands::Catalog { templates } => execute_catalog(CatalogOptions { templates }),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
    Ok(())
}
