//! `render <quote|preorder|order> <record-id> <output.pdf>`
//!
//! Fetches one record, renders it to HTML, and hands the markup to the
//! external PDF rasterizer. A missing record or bad record type fails before
//! any output is produced; an unreachable store exits with a distinct code.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use cotiza::config::Settings;
use cotiza::core::{CotizaError, RecordType};
use cotiza::document;
use cotiza::pdf::PdfEngine;
use cotiza::store::{MongoStore, RecordStore};

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
    let [type_code, id, output_path] = args.as_slice() else {
        return Err(CotizaError::InvalidInput(
            "usage: render <quote|preorder|order> <record-id> <output.pdf>".into(),
        ));
    };

    let record_type = RecordType::from_cli_code(type_code)?;
    let output = PathBuf::from(output_path);

    let settings = Settings::for_render()?;
    let store = MongoStore::connect(&settings.mongo_uri, &settings.mongo_db)?;

    let record = store
        .fetch(record_type, id)?
        .ok_or_else(|| CotizaError::NotFound {
            collection: record_type.collection().to_string(),
            id: id.clone(),
        })?;

    let html = document::render_document(&record, document::DEFAULT_LOGO_DATA_URI, Utc::now())?;
    PdfEngine::new(&settings.pdf_command).render_to_file(&html, &output)?;

    tracing::info!(record = %record.number, output = %output.display(), "document rendered");
    Ok(())
}
