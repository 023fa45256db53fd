//! Submit-to-display pipeline.
//!
//! One submission disables the trigger control, clears any earlier error,
//! awaits the injected [`IdeaFetcher`], and then either replaces the idea list
//! or shows the generic error. The trigger control is enabled again on both
//! paths. Only the resulting content is handed to the [`Presenter`].

use serde::Serialize;

use crate::content::{IdeaDetails, IdeaListContent};
use crate::error::{FetchFailure, SelectionError};
use crate::fetch::IdeaFetcher;
use crate::model::FormFields;
use crate::selection::{self, IdeaList, SelectionState};

pub const TRIGGER_LABEL: &str = "Get Opportunity Zone Ideas";
pub const LOADING_LABEL: &str = "Loading...";

/// State of the button that starts a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerControl {
  pub disabled: bool,
  pub label: &'static str,
}

impl TriggerControl {
  pub fn ready() -> Self {
    Self { disabled: false, label: TRIGGER_LABEL }
  }

  pub fn loading() -> Self {
    Self { disabled: true, label: LOADING_LABEL }
  }
}

impl Default for TriggerControl {
  fn default() -> Self {
    Self::ready()
  }
}

/// Presentation binding layer. Receives content, never produces it.
pub trait Presenter {
  fn show_trigger(&mut self, trigger: &TriggerControl);

  /// `None` hides the error banner.
  fn show_error(&mut self, message: Option<&str>);

  fn show_ideas(&mut self, content: &IdeaListContent);

  /// Makes both detail panels visible with the given content.
  fn show_details(&mut self, details: &IdeaDetails);
}

/// Everything the form page currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdvisorState {
  pub trigger: TriggerControl,
  pub error: Option<String>,
  /// `None` until the first successful fetch
  pub ideas: Option<IdeaList>,
  pub selection: SelectionState,
  /// Detail panels stay on the last selected idea until another one is picked
  pub details: Option<IdeaDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
  Displayed { count: usize },
  Failed,
}

pub struct SubmissionPipeline {
  fetcher: Box<dyn IdeaFetcher>,
  state: AdvisorState,
}

impl SubmissionPipeline {
  pub fn new(fetcher: Box<dyn IdeaFetcher>) -> Self {
    Self { fetcher, state: AdvisorState::default() }
  }

  pub fn state(&self) -> &AdvisorState {
    &self.state
  }

  /// Run one submission. `&mut self` keeps a second one from starting meanwhile.
  pub async fn submit<P>(&mut self, form: &FormFields, presenter: &mut P) -> SubmissionOutcome
  where
    P: Presenter + ?Sized,
  {
    self.state.trigger = TriggerControl::loading();
    presenter.show_trigger(&self.state.trigger);

    self.state.error = None;
    presenter.show_error(None);

    let profile = form.to_profile();
    tracing::info!(address = %profile.address, business_type = %profile.business_type, "fetching ideas");

    let outcome = match self.fetcher.fetch_ideas(&profile).await {
      Ok(ideas) => {
        tracing::info!(count = ideas.len(), "ideas received");
        let list = IdeaList::new(ideas);
        self.state.selection = SelectionState::none();
        presenter.show_ideas(&list.content(self.state.selection));
        let count = list.len();
        self.state.ideas = Some(list);
        SubmissionOutcome::Displayed { count }
      }
      Err(failure) => {
        tracing::error!(error = %failure, "error fetching opportunity zone ideas");
        self.show_failure(&failure, &mut *presenter);
        SubmissionOutcome::Failed
      }
    };

    self.state.trigger = TriggerControl::ready();
    presenter.show_trigger(&self.state.trigger);

    outcome
  }

  fn show_failure<P>(&mut self, failure: &FetchFailure, presenter: &mut P)
  where
    P: Presenter + ?Sized,
  {
    let message = failure.user_message();
    self.state.error = Some(message.to_string());
    presenter.show_error(Some(message));
  }

  /// Select a displayed idea and present its detail panels.
  pub fn select<P>(&mut self, index: usize, presenter: &mut P) -> Result<&IdeaDetails, SelectionError>
  where
    P: Presenter + ?Sized,
  {
    let list = self.state.ideas.as_ref().ok_or(SelectionError::NothingDisplayed)?;
    let selection = selection::select(self.state.selection, list, index)?;

    presenter.show_ideas(&list.content(selection.state));
    presenter.show_details(&selection.details);

    self.state.selection = selection.state;
    Ok(&*self.state.details.insert(selection.details))
  }
}
