//! CLI argument parsing via clap.

use clap::Parser;

/// Find the core emotion behind an email using NVC and the Map of Consciousness.
///
/// Requires ANTHROPIC_API_KEY. Optional overrides: EMPATH_MODEL,
/// EMPATH_BASE_URL, EMPATH_MAX_TOKENS, EMPATH_API_TIMEOUT_SECS, EMPATH_LOG,
/// NO_COLOR.
#[derive(Debug, Parser)]
#[command(name = "empath", version)]
pub struct Args {}
