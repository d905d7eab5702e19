//! Purse command-line formatter
//!
//! Formats one amount for a locale and prints the visual text and its spoken
//! form.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use purse_core::{CurrencyCode, FormattedMoney, Locale, Money};
use purse_shared::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "purse",
    version,
    about = "Format a money amount for a locale",
    group(ArgGroup::new("code").required(true).args(["currency", "numeric"]))
)]
struct Cli {
    /// Amount in minor units (e.g. cents), negative allowed
    #[arg(allow_negative_numbers = true)]
    amount: i64,

    /// Alphabetic ISO 4217 code (divisor defaults to 100)
    #[arg(short, long)]
    currency: Option<String>,

    /// Numeric ISO 4217 code (divisor inferred from the registry)
    #[arg(short, long)]
    numeric: Option<i32>,

    /// Explicit divisor, overriding any default
    #[arg(short, long)]
    divisor: Option<u64>,

    /// Locale identifier, e.g. en-AU (defaults to configuration)
    #[arg(short, long, env = "PURSE_LOCALE")]
    locale: Option<String>,

    /// Render as a transaction amount instead of a balance
    #[arg(short, long)]
    transaction: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn build_money(cli: &Cli) -> Result<Money> {
    let money = match (&cli.currency, cli.numeric, cli.divisor) {
        (Some(code), _, divisor) => {
            let code: CurrencyCode = code.parse()?;
            match divisor {
                Some(divisor) => Money::with_divisor(cli.amount, code, divisor)?,
                None => Money::new(cli.amount, code),
            }
        }
        (None, Some(numeric), Some(divisor)) => {
            Money::from_numeric_with_divisor(cli.amount, numeric, divisor)?
        }
        (None, Some(numeric), None) => Money::from_numeric(cli.amount, numeric),
        (None, None, _) => anyhow::bail!("either --currency or --numeric is required"),
    };
    Ok(money)
}

fn print(out: &FormattedMoney, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "visual": out.visual.as_str(),
            "currency": out.spoken.currency,
            "spoken": out.spoken.decimal,
            "balance_mode": out.balance_mode,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", out.visual);
        println!("{}", out.spoken);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "purse=info,purse_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let locale_id = cli.locale.clone().unwrap_or(config.format.locale);
    let locale: Locale = locale_id.parse()?;
    let balance_mode = if cli.transaction {
        false
    } else {
        config.format.balance_mode
    };

    let money = build_money(&cli)?;
    info!(%money, %locale, balance_mode, "Formatting amount");

    print(&money.format(&locale, balance_mode), cli.json)
}
