mod cli;
mod emitter;
mod helpers;
mod instrumentation;
mod report;
mod runtime;
mod sizer;

use anyhow::Result;

fn main() -> Result<()> {
    instrumentation::tracing::init_panic_handler();

    // Main entrypoint simply delegates control to CLI layer.
    // Tracing is initialized there, once the verbosity flag is known.
    cli::cli::run()
}
