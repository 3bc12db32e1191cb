//! `expiry-alert <back-days> <logo.png>`
//!
//! Finds quotes whose order date was `back-days` ago, composes one HTML
//! alert listing them with detail links, and mails it with the logo attached
//! inline. Sends nothing when no quotes match.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use cotiza::config::Settings;
use cotiza::core::{CotizaError, dates};
use cotiza::notify::{Mailer, expiring_quote_line};
use cotiza::store::MongoStore;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), CotizaError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [back_days, logo_path] = args.as_slice() else {
        return Err(CotizaError::InvalidInput(
            "usage: expiry-alert <back-days> <logo.png>".into(),
        ));
    };
    let back_days: u32 = back_days
        .parse()
        .map_err(|e| CotizaError::InvalidInput(format!("bad back-days value: {e}")))?;
    let logo_png = std::fs::read(PathBuf::from(logo_path))?;

    let settings = Settings::for_alert()?;
    let store = MongoStore::connect(&settings.mongo_uri, &settings.mongo_db)?;

    let today = dates::local_date(Utc::now());
    let expiring = store.find_expiring(back_days, today)?;
    if expiring.is_empty() {
        tracing::info!("no quotes expiring today; nothing to send");
        return Ok(());
    }

    let lines: Vec<String> = expiring
        .iter()
        .map(|q| expiring_quote_line(&q.client_full_name(), &q.number, &settings.base_url, &q.id))
        .collect();

    let smtp = &settings.smtp;
    Mailer::new(&smtp.host, smtp.port, &smtp.user, &smtp.password).send_alert(
        &smtp.from,
        &smtp.recipients,
        "Cotizaciones por vencer",
        &format!("Cotizaciones que vencen {today}"),
        &logo_png,
        &lines,
    )?;

    tracing::info!(count = lines.len(), "expiry alert sent");
    Ok(())
}
