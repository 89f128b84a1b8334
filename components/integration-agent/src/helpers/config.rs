// External crates
use std::env;
use std::path::PathBuf;

/// Environment variable set by the agent to tag the emitted metric.
const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Runtime options for a single integration run.
///
/// Collected once at startup from CLI flags and the process environment,
/// then passed by reference to the components that need them. There is no
/// global mutable configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Log at debug level instead of info.
    pub verbose: bool,
    /// Emit tab-indented JSON instead of compact single-line output.
    pub pretty: bool,
    /// Root of the directory tree to size.
    pub search_path: PathBuf,
    /// Value of `ENVIRONMENT`, when set and non-empty.
    pub environment: Option<String>,
}

impl AgentConfig {
    /// Build the run configuration from parsed flags and the environment.
    /// An empty `ENVIRONMENT` value is treated as unset.
    pub fn new(verbose: bool, pretty: bool, search_path: PathBuf) -> Self {
        let environment = env::var(ENVIRONMENT_VAR).ok().filter(|v| !v.is_empty());

        Self {
            verbose,
            pretty,
            search_path,
            environment,
        }
    }
}
