//! End-to-end conversion: input text through scan, detect, decode and write

use crate::common;
use b64image::cli::commands::convert::ConvertCommand;
use b64image::cli::commands::InputArgs;
use b64image::errors::AppError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use tempfile::TempDir;

fn command(payload: Option<String>, file: Option<PathBuf>, outdir: &TempDir) -> ConvertCommand {
    ConvertCommand {
        input: InputArgs {
            payload,
            file,
            url: None,
        },
        output: Some("image".to_string()),
        outputdir: Some(outdir.path().to_path_buf()),
    }
}

fn written_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn inline_png_data_url_converts_to_png_file() {
    let outdir = TempDir::new().unwrap();
    let cmd = command(Some(common::one_by_one_png_data_url()), None, &outdir);
    cmd.run().await.unwrap();

    let path = outdir.path().join("image.png");
    assert!(path.exists());

    // Round-trip: the written file is byte-identical to the decoded payload
    let written = std::fs::read(&path).unwrap();
    let expected = STANDARD.decode(common::ONE_BY_ONE_PNG_B64).unwrap();
    assert_eq!(written, expected);
    assert!(written.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]));
}

#[tokio::test]
async fn raw_base64_argument_converts_via_signature_sniff() {
    let outdir = TempDir::new().unwrap();
    let cmd = command(Some(common::to_base64(&common::gif_bytes())), None, &outdir);
    cmd.run().await.unwrap();

    assert_eq!(written_files(&outdir), vec!["image.gif"]);
}

#[tokio::test]
async fn html_file_with_four_images_writes_four_files() {
    let outdir = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();

    let png = common::to_data_url("image/png", &common::png_bytes());
    let jpeg = common::to_data_url("image/jpeg", &common::jpeg_bytes());
    let gif = common::to_data_url("image/gif", &common::gif_bytes());
    let webp = common::to_data_url("image/webp", &common::webp_bytes());
    let page = common::page_with_images(&[&png, &jpeg, &gif, &webp]);

    let page_path = workdir.path().join("page.html");
    std::fs::write(&page_path, page).unwrap();

    let cmd = command(None, Some(page_path), &outdir);
    cmd.run().await.unwrap();

    // Extensions come from each payload's declared MIME
    assert_eq!(
        written_files(&outdir),
        vec!["image.gif", "image.jpg", "image.png", "image.webp"]
    );
}

#[tokio::test]
async fn payloads_sharing_stem_and_format_get_numbered() {
    let outdir = TempDir::new().unwrap();

    // Two different PNGs: distinct payload strings, same stem and extension
    let mut second_png = common::png_bytes();
    second_png.push(0x42);
    let page = common::page_with_images(&[
        &common::to_data_url("image/png", &common::png_bytes()),
        &common::to_data_url("image/png", &second_png),
    ]);

    let cmd = command(Some(page), None, &outdir);
    cmd.run().await.unwrap();

    assert_eq!(written_files(&outdir), vec!["image.png", "image_1.png"]);
}

#[tokio::test]
async fn one_bad_payload_does_not_stop_the_rest() {
    let outdir = TempDir::new().unwrap();

    let good = common::to_data_url("image/png", &common::png_bytes());
    // Declared MIME outside the closed set: detection succeeds, conversion
    // has no extension for it
    let bad = common::to_data_url("image/heic", &common::png_bytes());
    let trailing = common::to_data_url("image/gif", &common::gif_bytes());
    let html = common::page_with_images(&[&good, &bad, &trailing]);

    let cmd = command(Some(html), None, &outdir);
    let result = cmd.run().await;

    // The run reports the failure...
    assert!(matches!(
        result,
        Err(AppError::PartialFailure {
            failed: 1,
            total: 3
        })
    ));
    // ...but payloads 1 and 3 still landed on disk
    assert_eq!(written_files(&outdir), vec!["image.gif", "image.png"]);
}

#[tokio::test]
async fn html_without_payloads_reports_no_payloads() {
    let outdir = TempDir::new().unwrap();
    let cmd = command(
        Some("<!DOCTYPE html><html><body>no images</body></html>".to_string()),
        None,
        &outdir,
    );

    let result = cmd.run().await;
    assert!(result.is_err());
    assert!(written_files(&outdir).is_empty());
}

#[tokio::test]
async fn user_supplied_extension_wins_over_detection() {
    let outdir = TempDir::new().unwrap();
    let mut cmd = command(Some(common::one_by_one_png_data_url()), None, &outdir);
    cmd.output = Some("snapshot.bin".to_string());

    cmd.run().await.unwrap();
    assert_eq!(written_files(&outdir), vec!["snapshot.bin"]);
}
