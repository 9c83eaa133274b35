//! Command-line entry point: export a character's comic catalog to CSV.
//!
//! Credentials come from the `PUBLIC_KEY` and `PRIVATE_KEY` environment
//! variables (a `.env` file in the working directory is honored). The
//! first argument selects the character; it defaults to "Thor".

use comic_export::{Config, Credentials, Exporter};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    // .env is optional; real deployments can set the variables directly
    dotenvy::dotenv().ok();

    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    let character = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Thor".to_string());

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "cannot start without API credentials");
            return;
        }
    };

    let config = Config::default();
    let output = config.output_path.clone();

    let exporter = match Exporter::new(config, credentials) {
        Ok(exporter) => exporter,
        Err(e) => {
            error!(error = %e, "failed to construct exporter");
            return;
        }
    };

    match exporter.run(&character).await {
        Ok(()) => info!(character = %character, output = %output.display(), "export finished"),
        Err(e) => error!(error = %e, character = %character, "export aborted"),
    }
}
