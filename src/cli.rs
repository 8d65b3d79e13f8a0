//! CLI module containing the main entry point logic.

use crate::config::{self, ScaffoldConfig};
use crate::error::ScaffoldError;
use crate::executor::SystemExecutor;
use crate::pipeline::{self, Pipeline};
use crate::variant::Variant;
use clap::Parser as ClapParser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed after a usage error.
pub const USAGE: &str = "Usage: react-setup <project-name> [github-repo-url]";

/// CLI arguments for react-setup.
#[derive(ClapParser, Debug)]
#[command(name = "react-setup")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Bootstrap a React app with routing, Tailwind CSS and Git",
    long_about = None
)]
struct Cli {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    project_name: Option<String>,

    /// Repository to register as origin and push the initial commit to
    #[arg(value_name = "REPO_URL")]
    repo_url: Option<String>,

    /// Template variant
    #[arg(long, value_enum, env = "REACT_SETUP_VARIANT", default_value = "classic")]
    variant: Variant,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(long = "working-dir", value_name = "PATH")]
    working_dir: Option<PathBuf>,

    /// Print the planned steps as JSON without running anything
    #[arg(long)]
    inspect: bool,

    /// More diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<ScaffoldConfig, ScaffoldError> {
        let base_dir = self.working_dir.unwrap_or_else(config::default_base_dir);
        ScaffoldConfig::new(self.project_name, self.repo_url, self.variant, base_dir)
    }
}

/// Diagnostics go to stderr; stdout is reserved for progress and the plan.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if quiet {
            "error"
        } else {
            match verbose {
                0 => "warn",
                1 => "debug",
                _ => "trace",
            }
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Print the plan as pretty JSON.
fn print_inspect(config: &ScaffoldConfig) {
    match serde_json::to_string_pretty(&Pipeline::plan(config)) {
        Ok(json) => println!("{}", json),
        Err(e) => crate::fatal_error(&format!("Error serialising plan: {}", e)),
    }
}

/// Report a failed run on stderr and exit with code 1.
fn report_failure(error: &ScaffoldError) -> ! {
    match error {
        ScaffoldError::Usage => {
            eprintln!("{}", error);
            crate::fatal_error(USAGE);
        }
        ScaffoldError::Step(step) => {
            tracing::debug!(index = step.index, description = %step.description, "step failed");
            eprintln!("{}", step.message);
            crate::fatal_error(&step.failure.to_string());
        }
        ScaffoldError::ProjectExists(_) => crate::fatal_error(&error.to_string()),
    }
}

/// Parse arguments. `--help` and `--version` print and exit 0 as usual; any
/// other rejected invocation exits 1 like the rest of the usage errors.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => crate::fatal_error(e.to_string().trim_end()),
    }
}

/// Main CLI logic.
pub fn run_cli() {
    let cli = parse_args();
    init_tracing(cli.verbose, cli.quiet);

    let inspect = cli.inspect;
    let config = cli.into_config().unwrap_or_else(|e| report_failure(&e));
    tracing::debug!(?config, root = %config.project_root().display(), "resolved configuration");

    if inspect {
        print_inspect(&config);
        return;
    }

    match pipeline::scaffold(&config, &mut SystemExecutor) {
        Ok(message) => println!("{}", message),
        Err(e) => report_failure(&e),
    }
}
