use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

use hookprobe::Result;
use hookprobe::cli::{Cli, Command};
use hookprobe::constants::SUITE_PAUSE;
use hookprobe::dispatch::Dispatcher;
use hookprobe::generator::{UsageTemplate, generate};
use hookprobe::logging::init_tracing;
use hookprobe::runner::{run_batch, run_single, run_suite};
use hookprobe::types::Identity;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Every failure stops here; dispatch failures inside a run are counted, not raised
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let scale = cli.mode().scale().unwrap_or_default();

    match cli.mode() {
        Command::Generate { .. } => {
            let event = generate(&Identity::from_username("test_user"), scale);
            writeln!(out, "{}", serde_json::to_string_pretty(&event)?)?;
        }
        Command::Suite => {
            let dispatcher = dispatcher(&cli, &mut out)?;
            run_suite(&dispatcher, SUITE_PAUSE, &mut out).await?;
        }
        Command::Single { username, .. } => {
            let dispatcher = dispatcher(&cli, &mut out)?;
            let identity = Identity::from_username(username);
            run_single(&dispatcher, &identity, scale, &mut out).await?;
        }
        Command::Batch(args) => {
            let dispatcher = dispatcher(&cli, &mut out)?;
            let template = match args.identity() {
                Some(identity) => UsageTemplate::default().with_identity(identity),
                None => UsageTemplate::default(),
            };
            run_batch(&dispatcher, &template, &args.plan(), &mut out).await?;
        }
    }

    Ok(())
}

fn dispatcher<W: Write>(cli: &Cli, out: &mut W) -> Result<Dispatcher> {
    let config = cli.dispatch_config()?;
    writeln!(out, "🌐 Requesting: {}", config.endpoint)?;
    Ok(Dispatcher::new(config)?)
}
