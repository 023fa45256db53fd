use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "OZ_ADVISOR_LOG";

/// Filter used when `OZ_ADVISOR_LOG` is unset.
pub fn default_filter(verbose: bool) -> EnvFilter {
  if verbose {
    EnvFilter::new("oz_core=debug,oz_advisor=debug,warn")
  } else {
    EnvFilter::new("oz_core=warn,oz_advisor=warn")
  }
}

/// Install the diagnostics subscriber. Everything goes to stderr so stdout
/// stays clean for content.
#[cfg(not(tarpaulin_include))] // Skip coverage - global subscriber installation
pub fn init(verbose: bool) {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init();
}
