/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */


use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use cmc_client::{CoinMarketCapClient, Context};
use cmc_core::{Config, SANDBOX_HOST};
use dotenvy::dotenv;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{
  fiat::FiatCommand, info::InfoCommand, key::KeyCommand, map::MapCommand, quotes::QuotesCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cmc")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Send requests to the sandbox host instead of the configured one
  #[arg(long, global = true)]
  sandbox: bool,

  /// Request timeout in seconds, overrides CMC_TIMEOUT_SECS
  #[arg(long, global = true)]
  timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Latest market quotes
  Quotes(QuotesCommand),
  /// Static cryptocurrency metadata
  Info(InfoCommand),
  /// Cryptocurrency id map
  Map(MapCommand),
  /// Fiat currency id map
  Fiat(FiatCommand),
  /// API key plan and usage
  Key(KeyCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let mut config = Config::from_env().context("Failed to load configuration")?;
  if cli.sandbox {
    config = config.with_base_url(SANDBOX_HOST);
  }
  if let Some(timeout) = cli.timeout {
    config.timeout_secs = timeout;
  }
  debug!("Using host {} with {}s timeout", config.base_url, config.timeout_secs);

  let client = CoinMarketCapClient::new(config).context("Failed to create client")?;

  // Ctrl-C cancels the in-flight request
  let (ctx, cancel) = Context::with_cancel();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      warn!("Interrupted, canceling request");
      cancel.cancel();
    }
  });

  match cli.command {
    Commands::Quotes(cmd) => commands::quotes::execute(cmd, &client, &ctx).await?,
    Commands::Info(cmd) => commands::info::execute(cmd, &client, &ctx).await?,
    Commands::Map(cmd) => commands::map::execute(cmd, &client, &ctx).await?,
    Commands::Fiat(cmd) => commands::fiat::execute(cmd, &client, &ctx).await?,
    Commands::Key(cmd) => commands::key::execute(cmd, &client, &ctx).await?,
  }

  Ok(())
}
