//! disperse: plan and check batch native-token transfers from the terminal.

mod report;

use anyhow::Context;
use clap::Parser;
use disperse_parser::ParseMode;
use disperse_types::{EvmAddress, NativeAmount, NetworkId, Timestamp};
use disperse_utils::LogFormat;
use disperse_wallet_core::{
    DisperseConfig, DisperseSession, HistorySink, JsonHistoryStore, RpcClient,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::report::{render_history, PlanReport};

#[derive(Parser)]
#[command(name = "disperse", about = "Batch native-token transfer planner")]
struct Cli {
    /// Network: "monad_testnet" or "dev".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "DISPERSE_NETWORK")]
    network: Option<NetworkId>,

    /// JSON-RPC endpoint (defaults to the network's public endpoint).
    #[arg(long, env = "DISPERSE_RPC_URL")]
    rpc_url: Option<String>,

    /// History file.
    #[arg(long, env = "DISPERSE_HISTORY")]
    history: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "DISPERSE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "DISPERSE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "DISPERSE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Parse a recipient list and check whether it could be submitted.
    Plan {
        /// File with one recipient per line; "-" reads stdin.
        #[arg(default_value = "-")]
        input: PathBuf,

        /// "paired" (address and value per line) or "uniform" (addresses only).
        #[arg(long)]
        mode: Option<ParseMode>,

        /// Amount sent to every address in uniform mode.
        #[arg(long)]
        amount: Option<String>,

        /// Balance to check against. Takes precedence over `--account`.
        #[arg(long)]
        balance: Option<NativeAmount>,

        /// Account whose balance is fetched from the node.
        #[arg(long, env = "DISPERSE_ACCOUNT")]
        account: Option<EvmAddress>,

        /// Deployed disperse contract.
        #[arg(long, env = "DISPERSE_CONTRACT")]
        contract: Option<EvmAddress>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show an account's balance.
    Balance {
        #[arg(env = "DISPERSE_ACCOUNT")]
        account: EvmAddress,
    },
    /// List completed disperses, newest first.
    History {
        /// Show at most this many records.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

/// Merge the config file (if any) with CLI flags and env vars.
///
/// A `--config` that cannot be read or parsed is an error rather than a
/// silent fallback to defaults.
fn load_config(cli: &Cli) -> anyhow::Result<DisperseConfig> {
    let base = match cli.config.as_deref() {
        Some(path) => DisperseConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DisperseConfig::default(),
    };

    Ok(DisperseConfig {
        network: cli.network.unwrap_or(base.network),
        rpc_url: cli.rpc_url.clone().or(base.rpc_url),
        history_path: cli.history.clone().unwrap_or(base.history_path),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli.log_format.clone().unwrap_or(base.log_format),
        ..base
    })
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn rpc_client(config: &DisperseConfig) -> anyhow::Result<RpcClient> {
    Ok(RpcClient::with_timeout(
        config.rpc_url(),
        Duration::from_secs(config.request_timeout_secs),
    )?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let log_format = config.log_format.parse::<LogFormat>();
    if let Err(e) = disperse_utils::init_logging(
        log_format.clone().unwrap_or_default(),
        &config.log_level,
    ) {
        eprintln!("logging disabled: {e}");
    }
    if let Err(e) = log_format {
        tracing::warn!("{e}, using human log format");
    }
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    tracing::debug!(network = %config.network, rpc = config.rpc_url(), "configuration loaded");

    match cli.command {
        Command::Plan {
            input,
            mode,
            amount,
            balance,
            account,
            contract,
            json,
        } => {
            let text = read_input(&input)?;
            let mut session = DisperseSession::new(config.network);
            if let Some(contract) = contract.or(config.contract_address.clone()) {
                session = session.with_contract(contract);
            }
            session.set_mode(mode.unwrap_or(config.mode));
            if let Some(amount) = amount {
                session.set_uniform_amount(amount);
            }
            session.set_input(text);

            match (balance, account.or(config.account.clone())) {
                (Some(balance), _) => session.set_balance(balance),
                (None, Some(account)) => {
                    let client = rpc_client(&config)?;
                    session.refresh_balance(&client, &account).await;
                }
                (None, None) => {
                    tracing::warn!("no balance or account given, checking against zero");
                }
            }

            let report = PlanReport::from_session(&session);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Command::Balance { account } => {
            let client = rpc_client(&config)?;
            client
                .ensure_network(config.network)
                .await
                .context("RPC endpoint does not serve the configured network")?;
            let balance = client.get_balance(&account).await?;
            println!(
                "{} {}",
                balance.format_fixed(4),
                config.network.currency_symbol()
            );
        }
        Command::History { limit } => {
            let store = JsonHistoryStore::new(&config.history_path);
            let mut records = store.records()?;
            if let Some(limit) = limit {
                records.truncate(limit);
            }
            print!("{}", render_history(&records, config.network, Timestamp::now()));
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("disperse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn unreadable_config_file_is_an_error() {
        let parsed = cli(&["--config", "/nonexistent/disperse.toml", "config"]);
        let err = load_config(&parsed).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/disperse.toml"));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network = [").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(load_config(&cli(&["--config", &path, "config"])).is_err());
    }

    #[test]
    fn flags_override_the_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network = \"dev\"\nlog_level = \"debug\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = load_config(&cli(&["--config", &path, "config"])).unwrap();
        assert_eq!(config.network, NetworkId::Dev);
        assert_eq!(config.log_level, "debug");

        let config =
            load_config(&cli(&["--config", &path, "--log-level", "warn", "config"])).unwrap();
        assert_eq!(config.log_level, "warn");
    }
}
