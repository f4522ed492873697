use crate::cli::commands::{collect_payloads, InputArgs};
use crate::config::AppConfig;
use crate::decoder;
use crate::detection;
use crate::errors::{AppError, AppResult};
use clap::Args;
use serde::Serialize;
use tracing::error;

/// Report the detected MIME type and decoded size of payloads without
/// writing files
#[derive(Args)]
pub struct DetectCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// One detection report row
#[derive(Debug, Serialize)]
pub struct DetectReport {
    pub index: usize,
    pub mime_type: String,
    pub estimated_bytes: usize,
}

impl DetectCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let source = self.input.source()?;
        let resolved = source.resolve(&config.fetch).await?;
        let payloads = collect_payloads(&source, &resolved)?;

        // Same per-payload contract as convert: report what detects, log
        // what does not, and only fail at the end
        let total = payloads.len();
        let mut failed = 0;
        let mut reports = Vec::new();
        for (index, payload) in payloads.iter().enumerate() {
            match detection::detect(payload) {
                Ok(detection) => reports.push(DetectReport {
                    index: index + 1,
                    mime_type: detection.mime_type().to_string(),
                    estimated_bytes: decoder::estimated_decoded_len(payload),
                }),
                Err(e) => {
                    failed += 1;
                    error!("payload {}/{} failed: {}", index + 1, total, e);
                }
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!(
                    "payload {}: {} ({} bytes decoded)",
                    report.index, report.mime_type, report.estimated_bytes
                );
            }
        }

        if failed > 0 {
            return Err(AppError::PartialFailure { failed, total });
        }
        Ok(())
    }
}
