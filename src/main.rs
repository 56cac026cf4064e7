use clap::{CommandFactory, Parser};
use clap_complete::{generate, Generator};
use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;
use prism_cli::{
    cli::{Cli, Commands},
    config::Config,
    handlers::{handle_analyze, handle_improve, handle_doc, handle_config},
};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일 로드
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { path, language, format } => {
            let config = Config::load()?;
            handle_analyze(&path, language.as_deref(), &format, &config).await?;
        }
        Commands::Improve { path, language } => {
            let config = Config::load()?;
            handle_improve(&path, language.as_deref(), &config).await?;
        }
        Commands::Doc { target } => {
            let config = Config::load()?;
            handle_doc(&target, &config).await?;
        }
        Commands::Config { action } => {
            handle_config(action)?;
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
    }

    Ok(())
}

pub fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
