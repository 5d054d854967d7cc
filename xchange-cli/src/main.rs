//! Xchange CLI
//!
//! Converts an amount between two currencies and prints one line:
//! `<amount><from> = <converted><to>`.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use exchange_rates::{DEFAULT_BASE_URL, HttpRateSource, StaticRateSource};
use xchange_hex::Resolver;
use xchange_types::{Conversion, CurrencyCode, RateSource, XchangeError};

#[derive(Parser, Debug)]
#[command(name = "xchange")]
#[command(author, version, about = "Currency converter", long_about = None)]
struct Cli {
    /// Source currency code ("r" is 60000 JPY)
    #[arg(long, default_value = "USD")]
    from: String,

    /// Target currency code
    #[arg(long, default_value = "JPY")]
    to: String,

    /// Amount in the source currency
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    amount: f64,

    /// Use the built-in rate table instead of the remote provider
    #[arg(long)]
    offline: bool,

    /// Base URL of the remote quote provider
    #[arg(long, env = "XCHANGE_SOURCE_URL", default_value = DEFAULT_BASE_URL)]
    source_url: String,

    /// Remote request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

async fn convert<S: RateSource>(
    source: S,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<Conversion, XchangeError> {
    let from = CurrencyCode::new(from)?;
    let to = CurrencyCode::new(to)?;
    Resolver::new(source).convert(&from, &to, amount).await
}

fn format_line(conversion: &Conversion) -> String {
    format!(
        "{:.6}{} = {:.6}{}",
        conversion.amount,
        conversion.quote.source(),
        conversion.converted,
        conversion.quote.target()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Diagnostics go to stderr and only when asked for.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let result = if cli.offline {
        convert(StaticRateSource::new(), &cli.from, &cli.to, cli.amount).await
    } else {
        let source = HttpRateSource::new(&cli.source_url, Duration::from_secs(cli.timeout_secs))?;
        convert(source, &cli.from, &cli.to, cli.amount).await
    };

    match result {
        Ok(conversion) => println!("{}", format_line(&conversion)),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
