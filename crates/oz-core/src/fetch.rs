use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::{sleep, timeout};

use crate::config::{FetcherConfig, FetcherKind};
use crate::error::{ConfigError, FetchFailure};
use crate::model::{Idea, PropertyProfile};

/// The idea service boundary: a profile in, display-ordered ideas or a failure out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdeaFetcher: Send + Sync {
  async fn fetch_ideas(&self, profile: &PropertyProfile) -> Result<Vec<Idea>, FetchFailure>;
}

/// The three built-in ideas, returned regardless of the profile.
pub fn canned_ideas() -> Vec<Idea> {
  vec![
    Idea::new(
      "1",
      "Co-working Space",
      "Create a modern co-working space catering to remote workers and small businesses in the area.",
      "15-20% annually",
    ),
    Idea::new(
      "2",
      "Mixed-Use Development",
      "Develop a mixed-use property with retail on the ground floor and apartments above.",
      "12-18% annually",
    ),
    Idea::new(
      "3",
      "Sustainable Agriculture Facility",
      "Establish an indoor vertical farming facility to provide fresh produce to local restaurants and markets.",
      "10-15% annually",
    ),
  ]
}

/// Stand-in for a real idea service: waits, then answers with [`canned_ideas`].
#[derive(Debug, Clone)]
pub struct CannedIdeaFetcher {
  delay: Duration,
}

impl Default for CannedIdeaFetcher {
  fn default() -> Self {
    Self::new(Duration::from_millis(1000))
  }
}

impl CannedIdeaFetcher {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }
}

#[async_trait]
impl IdeaFetcher for CannedIdeaFetcher {
  async fn fetch_ideas(&self, profile: &PropertyProfile) -> Result<Vec<Idea>, FetchFailure> {
    tracing::debug!(address = %profile.address, delay_ms = self.delay.as_millis() as u64, "serving canned ideas");
    sleep(self.delay).await;
    Ok(canned_ideas())
  }
}

/// The service may answer with a bare list or wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdeasPayload {
  List(Vec<Idea>),
  Wrapped { ideas: Vec<Idea> },
}

impl From<IdeasPayload> for Vec<Idea> {
  fn from(payload: IdeasPayload) -> Self {
    match payload {
      IdeasPayload::List(ideas) | IdeasPayload::Wrapped { ideas } => ideas,
    }
  }
}

/// Posts the profile as JSON to a remote idea service.
pub struct HttpIdeaFetcher {
  client: Client,
  endpoint: url::Url,
  timeout: Duration,
}

impl HttpIdeaFetcher {
  pub fn new(endpoint: url::Url, timeout: Duration) -> Result<Self, FetchFailure> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| FetchFailure::unavailable(format!("failed to create HTTP client: {e}")))?;

    Ok(Self { client, endpoint, timeout })
  }

  pub fn endpoint(&self) -> &url::Url {
    &self.endpoint
  }

  fn timeout_failure(&self) -> FetchFailure {
    FetchFailure::Timeout { seconds: self.timeout.as_secs() }
  }
}

#[async_trait]
impl IdeaFetcher for HttpIdeaFetcher {
  async fn fetch_ideas(&self, profile: &PropertyProfile) -> Result<Vec<Idea>, FetchFailure> {
    tracing::debug!(endpoint = %self.endpoint, "requesting ideas");

    let response = timeout(self.timeout, self.client.post(self.endpoint.clone()).json(profile).send())
      .await
      .map_err(|_| self.timeout_failure())?
      .map_err(|e| {
        if e.is_timeout() {
          self.timeout_failure()
        } else {
          FetchFailure::transport(e.to_string())
        }
      })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(FetchFailure::status(status.as_u16(), body));
    }

    let body = response.text().await.map_err(|e| FetchFailure::transport(e.to_string()))?;
    parse_ideas(&body)
  }
}

/// Decode an idea service response body.
pub fn parse_ideas(body: &str) -> Result<Vec<Idea>, FetchFailure> {
  serde_json::from_str::<IdeasPayload>(body)
    .map(Vec::from)
    .map_err(|e| FetchFailure::malformed(e.to_string()))
}

/// Strategy factory - creates the configured idea service implementation
pub fn fetcher_from_config(config: &FetcherConfig) -> Result<Box<dyn IdeaFetcher>, ConfigError> {
  match config.kind {
    FetcherKind::Canned => {
      Ok(Box::new(CannedIdeaFetcher::new(Duration::from_millis(config.delay_ms))))
    }
    FetcherKind::Http => {
      let endpoint = config.endpoint_url()?;
      let fetcher = HttpIdeaFetcher::new(endpoint.clone(), Duration::from_secs(config.timeout_secs))
        .map_err(|e| ConfigError::InvalidEndpoint {
          endpoint: endpoint.to_string(),
          reason: e.to_string(),
        })?;
      Ok(Box::new(fetcher))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::FormFields;

  fn profile() -> PropertyProfile {
    FormFields {
      address: "123 Main St".to_string(),
      square_footage: "1000".to_string(),
      budget: "50000".to_string(),
      business_type: "retail".to_string(),
      cash_flow_type: "stable".to_string(),
    }
    .to_profile()
  }

  #[tokio::test(start_paused = true)]
  async fn test_canned_fetcher_waits_then_answers() {
    let fetcher = CannedIdeaFetcher::default();
    let started = tokio::time::Instant::now();

    let ideas = fetcher.fetch_ideas(&profile()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
    let titles: Vec<&str> = ideas.iter().map(|idea| idea.title.as_str()).collect();
    assert_eq!(titles, vec!["Co-working Space", "Mixed-Use Development", "Sustainable Agriculture Facility"]);
  }

  #[tokio::test(start_paused = true)]
  async fn test_canned_fetcher_ignores_input() {
    let fetcher = CannedIdeaFetcher::new(Duration::ZERO);
    let mut odd = profile();
    odd.budget = f64::NAN;
    odd.business_type = "anything".to_string();

    assert_eq!(fetcher.fetch_ideas(&odd).await.unwrap(), canned_ideas());
  }

  #[test]
  fn test_canned_ideas_content() {
    let ideas = canned_ideas();
    assert_eq!(ideas.len(), 3);
    assert_eq!(ideas[0].id, "1");
    assert_eq!(ideas[0].potential_roi, "15-20% annually");
    assert_eq!(ideas[1].potential_roi, "12-18% annually");
    assert_eq!(ideas[2].potential_roi, "10-15% annually");
  }

  #[test]
  fn test_parse_bare_list() {
    let body = r#"[{"id":"7","title":"Food Hall","description":"Shared kitchens","potentialROI":"9%"}]"#;
    let ideas = parse_ideas(body).unwrap();
    assert_eq!(ideas, vec![Idea::new("7", "Food Hall", "Shared kitchens", "9%")]);
  }

  #[test]
  fn test_parse_wrapped_list() {
    let body = r#"{"ideas":[]}"#;
    assert!(parse_ideas(body).unwrap().is_empty());
  }

  #[test]
  fn test_parse_garbage_is_malformed() {
    assert!(matches!(parse_ideas("<html>"), Err(FetchFailure::Malformed { .. })));
    assert!(matches!(parse_ideas(r#"{"data":[]}"#), Err(FetchFailure::Malformed { .. })));
  }

  #[tokio::test]
  async fn test_mock_fetcher_failure_passes_through() {
    let mut mock = MockIdeaFetcher::new();
    mock
      .expect_fetch_ideas()
      .times(1)
      .returning(|_| Err(FetchFailure::transport("connection refused")));

    let result = mock.fetch_ideas(&profile()).await;
    assert_eq!(result, Err(FetchFailure::transport("connection refused")));
  }

  #[test]
  fn test_factory_picks_http_with_endpoint() {
    let config = FetcherConfig {
      kind: FetcherKind::Http,
      endpoint: Some("http://127.0.0.1:9/ideas".to_string()),
      ..FetcherConfig::default()
    };
    assert!(fetcher_from_config(&config).is_ok());
  }

  #[test]
  fn test_factory_rejects_http_without_endpoint() {
    let config = FetcherConfig { kind: FetcherKind::Http, ..FetcherConfig::default() };
    assert!(matches!(fetcher_from_config(&config), Err(ConfigError::MissingEndpoint)));
  }

  #[tokio::test]
  async fn test_http_fetcher_unreachable_is_a_failure() {
    let endpoint = url::Url::parse("http://127.0.0.1:9/ideas").unwrap();
    let fetcher = HttpIdeaFetcher::new(endpoint, Duration::from_secs(2)).unwrap();

    let result = fetcher.fetch_ideas(&profile()).await;
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().user_message(), FetchFailure::USER_MESSAGE);
  }
}
