//! CLI entry point for empath.

mod cli;

use clap::Parser;
use empath::api::ApiClient;
use empath::app::run_cli;
use empath::config::color_enabled;
use empath::render::{RenderSink, Renderer};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "EMPATH_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _args = cli::Args::parse();
    let renderer = Renderer::new(color_enabled());
    init_tracing(&renderer);

    let code = run_cli(
        |name| std::env::var(name).ok(),
        io::stdin().lock(),
        io::stdout().lock(),
        &renderer,
        |config| {
            ApiClient::new(
                &config.api,
                Duration::from_secs(config.network.api_timeout_secs),
            )
        },
    )
    .await;
    std::process::exit(code);
}

/// Route diagnostics to stderr, filtered by `EMPATH_LOG` (default `warn`).
fn init_tracing(renderer: &Renderer) {
    let filter = match std::env::var(LOG_FILTER_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            renderer.warn(&format!(
                "ignoring invalid {LOG_FILTER_ENV} value `{directives}`: {err}"
            ));
            EnvFilter::new("warn")
        }),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
