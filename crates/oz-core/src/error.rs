use thiserror::Error;

/// Any failure of the idea-fetch capability.
///
/// The variants only exist for diagnostics. Users always see
/// [`FetchFailure::USER_MESSAGE`], whatever went wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
  #[error("Idea service request failed: {message}")]
  Transport { message: String },

  #[error("Idea service did not answer within {seconds}s")]
  Timeout { seconds: u64 },

  #[error("Idea service returned HTTP {code}: {body}")]
  Status { code: u16, body: String },

  #[error("Idea service response could not be decoded: {message}")]
  Malformed { message: String },

  #[error("Idea service unavailable: {message}")]
  Unavailable { message: String },
}

impl FetchFailure {
  pub const USER_MESSAGE: &'static str =
    "An error occurred while fetching ideas. Please try again.";

  pub fn transport(message: impl Into<String>) -> Self {
    Self::Transport { message: message.into() }
  }

  pub fn status(code: u16, body: impl Into<String>) -> Self {
    Self::Status { code, body: body.into() }
  }

  pub fn malformed(message: impl Into<String>) -> Self {
    Self::Malformed { message: message.into() }
  }

  pub fn unavailable(message: impl Into<String>) -> Self {
    Self::Unavailable { message: message.into() }
  }

  /// The one message shown to the user for every variant.
  pub fn user_message(&self) -> &'static str {
    Self::USER_MESSAGE
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
  #[error("No idea at position {index} (list has {len})")]
  OutOfRange { index: usize, len: usize },

  #[error("No ideas are displayed")]
  NothingDisplayed,
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read configuration: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid idea service endpoint '{endpoint}': {reason}")]
  InvalidEndpoint { endpoint: String, reason: String },

  #[error("HTTP fetcher selected but no endpoint configured")]
  MissingEndpoint,
}
