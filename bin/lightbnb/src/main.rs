mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use lightbnb_repo as repo;
use log::info;
use mimalloc::MiMalloc;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> Result<(), error::Error> {
    let config = cli.repo_config()?;
    let repo = repo::Repository::try_new(&config).await?;

    let res = commands::execute(&repo, cli.command).await;

    // The pool is released whatever the command outcome
    repo.close().await;

    let value = res?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");

    info!("done");

    Ok(())
}
