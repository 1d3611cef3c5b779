use crate::constants::{
    DEFAULT_CLIENT_VERSION, DEFAULT_DELAY_SECS, DEFAULT_ENDPOINT, DEFAULT_RUNS, DEFAULT_USER_ID,
};
use crate::dispatch::DispatchConfig;
use crate::error::{ProbeError, Result};
use crate::runner::RunPlan;
use crate::types::{Identity, Scale};
use clap::{Args, Parser, Subcommand};
use std::convert::Infallible;
use std::time::Duration;

static DEFAULT_COMMAND: Command = Command::Suite;

#[derive(Debug, Parser)]
#[command(name = "hookprobe", version, about = "Send synthetic usage events to a usage hook")]
pub struct Cli {
    /// Hook URL; http or https
    #[arg(long, global = true, env = "HOOKPROBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Value sent in the X-CLI-Version header
    #[arg(long, global = true, env = "HOOKPROBE_CLIENT_VERSION", default_value = DEFAULT_CLIENT_VERSION)]
    pub client_version: String,

    /// Per-request deadline in seconds
    #[arg(long, global = true, env = "HOOKPROBE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Tracing filter directive, e.g. `info` or `hookprobe=debug`
    #[arg(long, global = true, env = "HOOKPROBE_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Send one event for each of the light, medium and heavy debug cases (default)
    Suite,

    /// Send a single generated event
    Single {
        username: String,
        /// light, medium or heavy; anything else is treated as medium
        scale: String,
    },

    /// Print a generated event without sending it
    Generate {
        #[arg(default_value = "medium")]
        scale: String,
    },

    /// Send the fixed template repeatedly with fresh interaction hashes
    Batch(BatchArgs),
}

#[derive(Debug, Args, PartialEq, Eq)]
pub struct BatchArgs {
    /// Number of requests; non-positive or unparsable values use the default
    #[arg(long, env = "RUNS", default_value_t = DEFAULT_RUNS, value_parser = lenient_runs)]
    pub runs: u32,

    /// Seconds between requests; non-positive or unparsable values use the default
    #[arg(long, env = "DELAY", default_value_t = DEFAULT_DELAY_SECS, value_parser = lenient_delay)]
    pub delay: u64,

    /// Override the template's handle
    #[arg(long)]
    pub handle: Option<String>,

    /// Override the template's user id
    #[arg(long)]
    pub user_id: Option<String>,
}

impl Cli {
    pub fn mode(&self) -> &Command {
        self.command.as_ref().unwrap_or(&DEFAULT_COMMAND)
    }

    pub fn dispatch_config(&self) -> Result<DispatchConfig> {
        if self.timeout_secs == 0 {
            return Err(ProbeError::Config {
                message: "timeout must be at least one second".to_string(),
            });
        }
        Ok(DispatchConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_client_version(self.client_version.clone()))
    }
}

impl Command {
    pub fn scale(&self) -> Option<Scale> {
        match self {
            Command::Single { scale, .. } | Command::Generate { scale } => {
                Some(Scale::from_name(scale))
            }
            _ => None,
        }
    }
}

impl BatchArgs {
    pub fn plan(&self) -> RunPlan {
        RunPlan {
            runs: self.runs,
            delay: Duration::from_secs(self.delay),
        }
    }

    /// Identity override, if either part was given
    pub fn identity(&self) -> Option<Identity> {
        if self.handle.is_none() && self.user_id.is_none() {
            return None;
        }
        let mut identity = match &self.handle {
            Some(handle) => Identity::from_username(handle),
            None => Identity::default(),
        };
        identity.user_id = self
            .user_id
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        Some(identity)
    }
}

fn lenient_runs(s: &str) -> std::result::Result<u32, Infallible> {
    Ok(s.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_RUNS))
}

fn lenient_delay(s: &str) -> std::result::Result<u64, Infallible> {
    Ok(s.trim()
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_DELAY_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hookprobe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_suite() {
        let cli = parse(&[]);
        assert_eq!(cli.mode(), &Command::Suite);
        let config = cli.dispatch_config().unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.client_version, "0.2.9");
    }

    #[test]
    fn test_single_with_unknown_scale() {
        let cli = parse(&["single", "test_user", "enormous"]);
        assert_eq!(
            cli.mode(),
            &Command::Single {
                username: "test_user".to_string(),
                scale: "enormous".to_string()
            }
        );
        assert_eq!(cli.mode().scale(), Some(Scale::Medium));
    }

    #[test]
    fn test_generate_defaults_to_medium() {
        let cli = parse(&["generate"]);
        assert_eq!(cli.mode().scale(), Some(Scale::Medium));
        let cli = parse(&["generate", "heavy"]);
        assert_eq!(cli.mode().scale(), Some(Scale::Heavy));
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = parse(&[
            "batch",
            "--runs",
            "3",
            "--delay",
            "2",
            "--endpoint",
            "http://localhost:9000/api/usage/hook",
            "--timeout-secs",
            "5",
        ]);
        let Command::Batch(args) = cli.mode() else {
            panic!("expected batch");
        };
        assert_eq!(
            args.plan(),
            RunPlan {
                runs: 3,
                delay: Duration::from_secs(2)
            }
        );
        let config = cli.dispatch_config().unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/api/usage/hook");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_lenient_batch_numbers() {
        assert_eq!(lenient_runs("abc"), Ok(DEFAULT_RUNS));
        assert_eq!(lenient_runs("0"), Ok(DEFAULT_RUNS));
        assert_eq!(lenient_runs("-4"), Ok(DEFAULT_RUNS));
        assert_eq!(lenient_runs(" 25 "), Ok(25));
        assert_eq!(lenient_delay(""), Ok(DEFAULT_DELAY_SECS));
        assert_eq!(lenient_delay("3"), Ok(3));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = parse(&["--timeout-secs", "0"]);
        assert!(matches!(
            cli.dispatch_config(),
            Err(ProbeError::Config { .. })
        ));
    }

    #[test]
    fn test_batch_identity_override() {
        let cli = parse(&["batch", "--handle", "probe"]);
        let Command::Batch(args) = cli.mode() else {
            panic!("expected batch");
        };
        let identity = args.identity().unwrap();
        assert_eq!(identity.handle, "@probe");
        assert_eq!(identity.user_id, DEFAULT_USER_ID);

        let cli = parse(&["batch"]);
        let Command::Batch(args) = cli.mode() else {
            panic!("expected batch");
        };
        assert_eq!(args.identity(), None);
    }
}
