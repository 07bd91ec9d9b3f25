//! bs-pricer - Black-Scholes European option pricer
//!
//! # Commands
//!
//! - `bs-pricer price --spot <S> --strike <K> --expiry <T> --rate <r> --volatility <v>`
//!   - Call and put values side by side, then the Greeks table
//! - `bs-pricer quote --spot <S> --strike <K> --days <D> --rate-pct <R> --vol-pct <V>`
//!   - Same report from market-quote conventions (days, percent)
//! - `bs-pricer greek --name <GREEK> --kind <call|put> ...` - A single sensitivity
//!
//! Inputs not given on the command line come from the configuration file
//! (`bs_pricer.toml` by default) and otherwise default to zero, which skips
//! pricing.

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands;
use service_cli::commands::quote::MarketQuote;
use service_cli::config::{build_config, CliArgs, CliConfig, InputOverrides, ENV_LOG_LEVEL};
use service_cli::Result;

/// Black-Scholes European option pricer
#[derive(Parser)]
#[command(name = "bs-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// The five model inputs, each optional
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Spot price of the underlying
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    expiry: Option<f64>,

    /// Continuously compounded risk-free rate (decimal)
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility (decimal)
    #[arg(long)]
    volatility: Option<f64>,
}

impl From<&InputArgs> for InputOverrides {
    fn from(args: &InputArgs) -> Self {
        Self {
            spot: args.spot,
            strike: args.strike,
            expiry: args.expiry,
            rate: args.rate,
            volatility: args.volatility,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a call and a put and show the Greeks
    Price {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Price from a market quote (maturity in days, rate and volatility in percent)
    Quote {
        /// Spot price of the underlying
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Calendar days to maturity
        #[arg(long)]
        days: f64,

        /// Risk-free rate in percent
        #[arg(long, allow_negative_numbers = true)]
        rate_pct: f64,

        /// Volatility in percent
        #[arg(long)]
        vol_pct: f64,
    },

    /// Evaluate one Greek (delta, gamma, theta, vega, rho)
    Greek {
        /// Greek name
        #[arg(short, long)]
        name: String,

        /// Option kind (call, put)
        #[arg(long)]
        kind: String,

        #[command(flatten)]
        inputs: InputArgs,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (inputs, skip_input_validation): (InputOverrides, bool) = match &self.command {
            Commands::Price { inputs } | Commands::Greek { inputs, .. } => (inputs.into(), false),
            Commands::Quote { .. } => (InputOverrides::default(), true),
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            format: self.format.clone(),
            inputs,
            skip_input_validation,
        }
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Price { .. } => {
            commands::price::run(&config.inputs, config.format, &mut stdout)?;
        }
        Commands::Quote {
            spot,
            strike,
            days,
            rate_pct,
            vol_pct,
        } => {
            let quote = MarketQuote {
                spot,
                strike,
                days,
                rate_pct,
                volatility_pct: vol_pct,
            };
            commands::quote::run(&quote, config.format, &mut stdout)?;
        }
        Commands::Greek { name, kind, .. } => {
            commands::greek::run(&config.inputs, &name, &kind, &mut stdout)?;
        }
    }

    Ok(())
}
