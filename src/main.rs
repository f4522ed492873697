#[tokio::main]
async fn main() {
    if let Err(e) = b64image::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
