use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kline_harvester::config::HarvesterConfig;
use kline_harvester::models::timeframe::Timeframe;
use kline_harvester::pipeline::{self, scheduler};

#[derive(Parser)]
#[command(version, about = "Binance futures kline harvester")]
struct Cli {
    /// Path to the config file (harvester.toml)
    #[arg(short, long)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute one fan-out run and exit
    Run {
        /// Interval code (e.g. "4h"); defaults to [run].timeframe from the config
        #[arg(long)]
        timeframe: Option<String>,
    },

    /// Invoke the coordinator on a fixed cadence
    Schedule {
        /// Interval code (e.g. "4h"); defaults to [run].timeframe from the config
        #[arg(long)]
        timeframe: Option<String>,

        /// Seconds between runs; defaults to the timeframe's own duration
        #[arg(long)]
        every_secs: Option<u64>,
    },
}

fn resolve_timeframe(cli_value: Option<&str>, config: &HarvesterConfig) -> Result<Timeframe> {
    if let Some(code) = cli_value {
        return code
            .parse()
            .with_context(|| format!("invalid --timeframe '{}'", code));
    }
    match &config.run.timeframe {
        Some(tf) => Ok(tf.clone()),
        None => bail!("no timeframe given: pass --timeframe or set [run].timeframe in the config"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = HarvesterConfig::load(&cli.config)?;
    let coordinator = pipeline::from_config(&config)?;

    match &cli.command {
        Commands::Run { timeframe } => {
            let timeframe = resolve_timeframe(timeframe.as_deref(), &config)?;
            let result = coordinator.run(&timeframe).await?;

            for (symbol, cause) in &result.failed {
                eprintln!("ERROR: {} - {}", symbol, cause);
            }
            eprintln!(
                "SUMMARY: {} succeeded, {} failed ({} symbols, {:.1}s)",
                result.succeeded.len(),
                result.failed.len(),
                result.total(),
                result.elapsed.as_secs_f64(),
            );
        }

        Commands::Schedule {
            timeframe,
            every_secs,
        } => {
            let timeframe = resolve_timeframe(timeframe.as_deref(), &config)?;
            let every = match every_secs {
                Some(secs) => Duration::from_secs(*secs),
                None => timeframe.duration(),
            };
            tracing::info!(timeframe = %timeframe, every_secs = every.as_secs(), "starting scheduler");
            scheduler::run_on_schedule(&coordinator, &timeframe, every).await;
        }
    }

    Ok(())
}
