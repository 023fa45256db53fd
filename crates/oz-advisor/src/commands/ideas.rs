use anyhow::{anyhow, Context, Result};
use oz_core::fetch::fetcher_from_config;
use oz_core::{AdvisorConfig, FetcherKind, Presenter, SubmissionOutcome, SubmissionPipeline};
use std::process::ExitCode;

use crate::cli::IdeasArgs;
use crate::display::{self, JsonReport, TerminalPresenter};

pub async fn handle(args: IdeasArgs, mut config: AdvisorConfig) -> Result<ExitCode> {
  if let Some(endpoint) = &args.endpoint {
    config.fetcher.kind = FetcherKind::Http;
    config.fetcher.endpoint = Some(endpoint.clone());
  }

  tracing::debug!(
    kind = ?config.fetcher.kind,
    endpoint = config.fetcher.endpoint.as_deref().unwrap_or("-"),
    "using idea service"
  );

  let fetcher = fetcher_from_config(&config.fetcher).context("Failed to set up idea service")?;
  let mut pipeline = SubmissionPipeline::new(fetcher);
  let form = args.form_fields();

  if args.json {
    let mut report = JsonReport::default();
    let outcome = pipeline.submit(&form, &mut report).await;
    report.outcome = Some(outcome);
    // Fetched content is reported even when the selection is rejected.
    let selected = select(&mut pipeline, outcome, args.select, &mut report);
    report.print()?;
    selected?;
    return Ok(exit_code(outcome));
  }

  let mut presenter = TerminalPresenter;
  let outcome = pipeline.submit(&form, &mut presenter).await;
  select(&mut pipeline, outcome, args.select, &mut presenter)?;
  if let SubmissionOutcome::Displayed { count } = outcome {
    display::success(&format!("{count} idea(s) for {}", form.address));
  }
  Ok(exit_code(outcome))
}

fn select<P: Presenter>(
  pipeline: &mut SubmissionPipeline,
  outcome: SubmissionOutcome,
  select: Option<usize>,
  presenter: &mut P,
) -> Result<()> {
  match (outcome, select) {
    (SubmissionOutcome::Displayed { .. }, Some(position)) => {
      let index = position.checked_sub(1).ok_or_else(|| anyhow!("Idea positions start at 1"))?;
      tracing::debug!(position, "selecting idea");
      pipeline
        .select(index, presenter)
        .with_context(|| format!("Cannot select idea {position}"))?;
    }
    (SubmissionOutcome::Failed, Some(_)) => {
      display::warn("Nothing to select; no ideas were fetched");
    }
    (_, None) => {}
  }

  Ok(())
}

fn exit_code(outcome: SubmissionOutcome) -> ExitCode {
  match outcome {
    SubmissionOutcome::Displayed { .. } => ExitCode::SUCCESS,
    SubmissionOutcome::Failed => ExitCode::FAILURE,
  }
}
