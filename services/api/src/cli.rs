use crate::report::{run_assessment, run_catalog, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ai_nativeness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Nativeness Assessment",
    about = "Score AI Nativeness self-assessments and serve the assessment API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answers file and print the assessment report
    Assess(AssessArgs),
    /// List the assessment categories and their statements
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Catalog => run_catalog(),
    }
}
