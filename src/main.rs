use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use fic::areas::checker::Checker;
use fic::artifacts::core::config::{Config, DEFAULT_ALGORITHM};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fic",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple file integrity checker",
    long_about = "This is a file integrity checker, written in Rust. \
    It hashes a list of critical files into a SHA-256 baseline and reports \
    files that were later modified, deleted, added or became unreadable.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "FIC_ROOT",
        help = "Project root holding the list, db/ and logs/ (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "FIC_ALGORITHM",
        default_value = DEFAULT_ALGORITHM,
        help = "Content hashing algorithm"
    )]
    algorithm: String,
    #[arg(short, long, global = true, help = "Print diagnostic output to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create baseline hashes",
        long_about = "This command hashes every file in the list and stores the result as the trusted baseline. \
        Without a list file, a default list is created first if none exists."
    )]
    Init {
        #[arg(index = 1, help = "The list file (defaults to critical_files.txt in the root)")]
        list_file: Option<PathBuf>,
    },
    #[command(
        name = "check",
        about = "Compare current hashes against the baseline",
        long_about = "This command hashes every file in the list, compares the result with the baseline \
        and logs every modified, missing, unreadable and new file."
    )]
    Check {
        #[arg(index = 1, help = "The list file (defaults to critical_files.txt in the root)")]
        list_file: Option<PathBuf>,
    },
    #[command(name = "add", about = "Add a file path to the list")]
    Add {
        #[arg(index = 1, help = "The path to watch")]
        path: String,
        #[arg(index = 2, help = "The list file (defaults to critical_files.txt in the root)")]
        list_file: Option<PathBuf>,
    },
    #[command(name = "remove", about = "Remove a file path from the list")]
    Remove {
        #[arg(index = 1, help = "The path to stop watching")]
        path: String,
        #[arg(index = 2, help = "The list file (defaults to critical_files.txt in the root)")]
        list_file: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let creates_root = matches!(command, Commands::Init { .. } | Commands::Add { .. });
    let config = Config::load(cli.root, creates_root)?.with_algorithm(cli.algorithm);
    let checker = Checker::new(config, Box::new(std::io::stdout()));

    let outcome = match &command {
        Commands::Init { list_file } => checker.init(list_file.as_deref()).await.map(|_| ()),
        Commands::Check { list_file } => checker.check(list_file.as_deref()).await.map(|_| ()),
        Commands::Add { path, list_file } => checker.add(path, list_file.as_deref()).map(|_| ()),
        Commands::Remove { path, list_file } => {
            checker.remove(path, list_file.as_deref()).map(|_| ())
        }
    };

    if let Err(error) = &outcome {
        checker.log_failure(error);
    }

    outcome
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {:#}", "error:".red(), error);
            ExitCode::FAILURE
        }
    }
}
