// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! `teamsnap`: command-line access to a discovered TeamSnap API.
//!
//! Every invocation runs discovery (falling back to the backup cache when the
//! API is unreachable), then performs one command:
//! - `types`: list discovered types and their operations
//! - `call`: invoke any generated query or command
//! - `find`: fetch one object by id
//! - `bulk-load`: load every object of several types under one team
//!
//! Settings come from `TEAMSNAP_*` environment variables; flags override them.

mod args;
mod formatter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use teamsnap_client::{Client, ClientConfig};

use args::{parse_id, parse_pairs};
use formatter::{format_resources, format_types, OutputFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

/// teamsnap: query a TeamSnap API discovered at runtime.
#[derive(Parser, Debug)]
#[command(name = "teamsnap", version = VERSION, about = "TeamSnap API client")]
struct Cli {
    /// API root URL.
    #[arg(long)]
    url: Option<String>,

    /// Bearer token.
    #[arg(long)]
    token: Option<String>,

    /// Backup cache: `true`, `false`, or a file path.
    #[arg(long, value_name = "BOOL|PATH")]
    backup_cache: Option<String>,

    /// Discover from the backup cache without contacting the API.
    #[arg(long)]
    offline: bool,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format for returned objects.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List discovered resource types.
    Types,
    /// Invoke an operation: `call Team search team_id=1`.
    Call {
        /// Resource type (`Root` for root operations).
        type_name: String,
        /// Operation name.
        operation: String,
        /// Arguments as name=value.
        args: Vec<String>,
    },
    /// Fetch one object by id.
    Find {
        /// Resource type.
        type_name: String,
        /// Object id.
        id: String,
    },
    /// Load several types scoped to a team: `bulk-load team_id=1 types=team,member`.
    BulkLoad {
        /// Arguments as name=value.
        args: Vec<String>,
    },
}

impl Cli {
    /// Environment configuration with flags applied on top.
    fn config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("Invalid TEAMSNAP_* environment")?;
        if let Some(url) = &self.url {
            config.url.clone_from(url);
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(setting) = &self.backup_cache {
            config.backup_cache = setting.parse().unwrap_or_default();
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.config()?;
    let client = Client::init(&config)
        .with_context(|| format!("Could not initialize a client for {}", config.url))?;

    let output = match &cli.command {
        Command::Types => format_types(client.registry()),
        Command::Call {
            type_name,
            operation,
            args,
        } => {
            let args = parse_pairs(args).map_err(anyhow::Error::msg)?;
            format_resources(&client.call(type_name, operation, &args)?, cli.format)
        }
        Command::Find { type_name, id } => {
            let resource = client.find(type_name, parse_id(id))?;
            format_resources(std::slice::from_ref(&resource), cli.format)
        }
        Command::BulkLoad { args } => {
            let args = parse_pairs(args).map_err(anyhow::Error::msg)?;
            format_resources(&client.bulk_load(&args)?, cli.format)
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Parsed command line");
    println!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamsnap_client::BackupCache;

    #[test]
    fn test_cli_parses_call() {
        let cli = Cli::try_parse_from([
            "teamsnap",
            "--url",
            "http://localhost:3000",
            "call",
            "Team",
            "search",
            "team_id=1",
        ])
        .unwrap();
        match cli.command {
            Command::Call {
                type_name,
                operation,
                args,
            } => {
                assert_eq!(type_name, "Team");
                assert_eq!(operation, "search");
                assert_eq!(args, ["team_id=1"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "teamsnap",
            "--url",
            "http://localhost:3000",
            "--backup-cache",
            "false",
            "--offline",
            "--timeout",
            "5",
            "types",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.url, "http://localhost:3000");
        assert_eq!(config.backup_cache, BackupCache::Disabled);
        assert!(config.offline);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_bulk_load_subcommand_name() {
        let cli = Cli::try_parse_from(["teamsnap", "bulk-load", "team_id=1", "types=team,member"])
            .unwrap();
        assert!(matches!(cli.command, Command::BulkLoad { ref args } if args.len() == 2));
    }
}
