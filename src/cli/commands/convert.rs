use crate::cli::commands::{collect_payloads, InputArgs};
use crate::config::AppConfig;
use crate::decoder;
use crate::detection;
use crate::errors::{AppError, AppResult, PayloadError};
use crate::output::OutputWriter;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Convert base64/data-URL payloads into image files
#[derive(Args)]
pub struct ConvertCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output filename; the extension is appended from the detected format
    /// when not supplied
    #[arg(long)]
    pub output: Option<String>,

    /// Output directory (overrides config.toml)
    #[arg(long)]
    pub outputdir: Option<PathBuf>,
}

impl ConvertCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let source = self.input.source()?;
        let resolved = source.resolve(&config.fetch).await?;
        let payloads = collect_payloads(&source, &resolved)?;

        let outdir = self
            .outputdir
            .clone()
            .unwrap_or(config.output.default_dir.clone());
        let writer = OutputWriter::new(outdir);

        // Wall clock is read once, up front; the writer itself stays
        // deterministic and testable
        let (stem, forced_ext) = match &self.output {
            Some(name) => split_output_name(name),
            None => (
                chrono::Local::now().format("image_%Y%m%d_%H%M%S").to_string(),
                None,
            ),
        };

        // Per-payload contract: each conversion stands alone, a failure is
        // logged and the remaining payloads still get their attempt
        let total = payloads.len();
        let mut failed = 0;
        for (index, payload) in payloads.iter().enumerate() {
            match convert_one(&writer, &stem, forced_ext.as_deref(), payload) {
                Ok(path) => {
                    info!("payload {}/{} converted", index + 1, total);
                    println!("{}", path.display());
                }
                Err(e) => {
                    failed += 1;
                    error!("payload {}/{} failed: {}", index + 1, total, e);
                }
            }
        }

        if failed > 0 {
            return Err(AppError::PartialFailure { failed, total });
        }
        Ok(())
    }
}

/// Convert a single payload to a file
fn convert_one(
    writer: &OutputWriter,
    stem: &str,
    forced_ext: Option<&str>,
    payload: &str,
) -> AppResult<PathBuf> {
    let detection = detection::detect(payload)?;
    let extension = match forced_ext {
        Some(ext) => ext.to_string(),
        None => detection
            .image_format()
            .map(|format| format.extension().to_string())
            .ok_or_else(|| PayloadError::Unsupported {
                mime: detection.mime_type().to_string(),
            })?,
    };

    let bytes = decoder::decode_payload(payload)?;
    Ok(writer.write_image(stem, &extension, &bytes)?)
}

/// Split a user-supplied output name into stem and optional extension
fn split_output_name(name: &str) -> (String, Option<String>) {
    let path = Path::new(name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => (stem.to_string(), Some(ext.to_string())),
        _ => (name.to_string(), None),
    }
}
