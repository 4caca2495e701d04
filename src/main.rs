use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::app::App;
use folio::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,folio=debug")),
        )
        .init();

    let config = Config::parse();

    let app = App::from_config(config).unwrap_or_else(|e| {
        eprintln!("Startup error: {e}");
        std::process::exit(1);
    });

    if let Err(e) = app.run().await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
