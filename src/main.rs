//! Twilio Types - command line entry point
//!
//! Normalizes and displays single values the way API records are decoded:
//!
//! ```text
//! twilio-types phone "(410) 555-1234"
//! twilio-types time "Tue, 20 Sep 2016 22:59:57 +0000"
//! twilio-types price USD -0.0075
//! twilio-types duration 88
//! ```

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilio_types::{format_price, Config, PhoneNumber, TwilioDuration, TwilioTime};

const USAGE: &str =
    "usage: twilio-types <phone RAW | time RFC2822 | price UNIT AMOUNT | duration SECONDS>";

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only, stdout carries results)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        country_code = config.dialing.country_code(),
        "Configuration loaded successfully"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["phone", raw] => {
            let phone = PhoneNumber::parse_with(raw, &config.dialing).map_err(|e| {
                error!("Failed to parse phone number: {}", e);
                e
            })?;
            println!("{}", phone);
            println!("{}", phone.friendly());
            println!("{}", phone.local());
        }
        ["time", raw] => {
            let time = TwilioTime::parse(raw);
            if !time.valid {
                bail!("Invalid timestamp: {}", raw);
            }
            println!("{}", time.time.to_rfc3339());
        }
        ["price", unit, amount] => println!("{}", format_price(unit, amount)),
        ["duration", raw] => println!("{}", TwilioDuration::parse(raw)),
        _ => bail!(USAGE),
    }

    Ok(())
}
