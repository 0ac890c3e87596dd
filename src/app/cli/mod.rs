//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, InitOptions, InstallOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "lxr-init")]
#[command(version)]
#[command(about = "Scaffold a new LeanIX custom report project", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    init: InitArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the project questions and write the report template (default)
    #[clap(visible_alias = "i")]
    Init(InitArgs),
    /// Install project dependencies with npm
    Install(InstallArgs),
}

#[derive(Args, Debug, Clone)]
struct InitArgs {
    /// Directory to create the project in
    #[arg(short, long, env = "LXR_INIT_DIR", default_value = ".")]
    dir: PathBuf,
    /// Read answers from a TOML file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    answers: Option<PathBuf>,
    /// Node.js version to record instead of running `node --version`
    #[arg(long, env = "LXR_NODE_VERSION", value_name = "VERSION")]
    node_version: Option<String>,
    /// Overwrite an existing project in the target directory
    #[arg(short, long)]
    force: bool,
    /// Run `npm install` after the project is written
    #[arg(long)]
    install: bool,
    /// Show npm output while installing
    #[arg(long, requires = "install")]
    verbose_install: bool,
}

#[derive(Args, Debug, Clone)]
struct InstallArgs {
    /// Project directory
    #[arg(short, long, env = "LXR_INIT_DIR", default_value = ".")]
    dir: PathBuf,
    /// Show npm output
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Init(cli.init)) {
        Commands::Init(args) => run_init(args),
        Commands::Install(args) => run_install(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(args: InitArgs) -> Result<(), AppError> {
    let options = InitOptions {
        dir: args.dir.clone(),
        answers_file: args.answers,
        node_version: args.node_version,
        overwrite: args.force,
    };
    api::init(&options)?;

    if args.install {
        api::install(&InstallOptions { dir: args.dir, stream_output: args.verbose_install })?;
    }
    Ok(())
}

fn run_install(args: InstallArgs) -> Result<(), AppError> {
    api::install(&InstallOptions { dir: args.dir, stream_output: args.verbose })
}
