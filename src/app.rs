//! One analyzer run from credential check to printed result.
//!
//! Everything here is generic over the terminal streams, the environment
//! lookup, and the analysis client, so the full flow runs in tests without a
//! TTY or network.

use crate::api::AnalysisClient;
use crate::collect::Collector;
use crate::config::{load_config_with, Config};
use crate::error::{AppError, ConfigError, InputError};
use crate::present::{write_result, RULE_WIDTH};
use crate::prompt::build_prompt;
use crate::render::RenderSink;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Exit status for a fully printed result.
pub const EXIT_SUCCESS: i32 = 0;

/// Collect, build, analyze, and print; every failure is returned to the caller.
pub async fn run<C, R, W>(
    client: &C,
    input: R,
    output: W,
    width: usize,
    renderer: &dyn RenderSink,
) -> Result<(), AppError>
where
    C: AnalysisClient + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut collector = Collector::new(input, output);
    write_banner(collector.output_mut()).map_err(InputError::from)?;
    let request = collector.collect()?;
    let mut output = collector.into_output();

    let prompt = build_prompt(&request);
    debug!(
        prompt_chars = prompt.chars().count(),
        relationship = request.relationship.label(),
        "analysis prompt built"
    );

    renderer.activity("Analyzing… (this may take a few seconds)");
    let result = client.analyze(&prompt).await?;
    debug!(result_chars = result.chars().count(), "analysis received");

    write_result(&mut output, &result, width).map_err(InputError::from)?;
    Ok(())
}

/// Full command-line flow: resolve config, connect, run, and map to an exit code.
///
/// The credential is checked before anything is written to `output`.
pub async fn run_cli<FEnv, R, W, F, C>(
    env_lookup: FEnv,
    input: R,
    output: W,
    renderer: &dyn RenderSink,
    connect: F,
) -> i32
where
    FEnv: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
    F: FnOnce(&Config) -> C,
    C: AnalysisClient,
{
    let config = match load_config_with(env_lookup) {
        Ok(config) => config,
        Err(err) => return report_error(renderer, &AppError::from(err)),
    };
    debug!(
        model = %config.api.model,
        base_url = %config.api.base_url,
        "configuration resolved"
    );

    let client = connect(&config);
    match run(&client, input, output, config.display.width, renderer).await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => report_error(renderer, &err),
    }
}

/// Print a user-facing message for `err` and return its exit status.
pub fn report_error(renderer: &dyn RenderSink, err: &AppError) -> i32 {
    debug!(error = ?err, "run aborted");
    renderer.error(&err.to_string());
    if let AppError::Config(ConfigError::MissingCredential(var)) = err {
        renderer.detail(&format!("Export it first:  export {var}='sk-ant-...'"));
    }
    err.exit_code()
}

/// Write the startup banner shown before the first question.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "  CORE EMOTION ANALYZER — Email Edition")?;
    writeln!(out, "  Powered by NVC (Rosenberg) + Letting Go (Hawkins)")?;
    writeln!(out, "{rule}")
}
