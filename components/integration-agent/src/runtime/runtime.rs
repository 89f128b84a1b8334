// Local crates
use crate::emitter::emitter;
use crate::helpers::config::AgentConfig;
use crate::report::builder;

// External crates
use anyhow::Result;
use tracing::debug;

/// Run one integration pass: build the report for the configured search
/// path and emit it on stdout.
///
/// Walk errors never reach this level; they are logged and absorbed inside
/// the sizer. Only an emission failure propagates, and the CLI layer treats
/// it as fatal.
pub fn run_integration(config: &AgentConfig) -> Result<()> {
    debug!(path = %config.search_path.display(), "Building integration report");

    let report = builder::build_report(config);
    emitter::emit(&report, config.pretty)?;

    Ok(())
}
