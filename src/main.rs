mod app;
mod chart;
mod commands;
mod config;
mod logging;
mod player;
mod setup;
mod source;

#[tokio::main]
async fn main() {
    if let Err(e) = app::run().await {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
