use serde::Serialize;

use crate::content::{IdeaDetails, IdeaListContent};
use crate::error::SelectionError;
use crate::model::Idea;

/// Ideas currently displayed, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdeaList {
  ideas: Vec<Idea>,
}

impl IdeaList {
  pub fn new(ideas: Vec<Idea>) -> Self {
    Self { ideas }
  }

  pub fn ideas(&self) -> &[Idea] {
    &self.ideas
  }

  pub fn len(&self) -> usize {
    self.ideas.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ideas.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Idea> {
    self.ideas.get(index)
  }

  /// Display content with the current selection marked.
  pub fn content(&self, selection: SelectionState) -> IdeaListContent {
    IdeaListContent::build(&self.ideas, selection.selected())
  }
}

/// Which displayed idea carries the "selected" marker, if any.
///
/// Only ever replaced by a newer selection; there is no explicit deselect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
  selected: Option<usize>,
}

impl SelectionState {
  pub fn none() -> Self {
    Self::default()
  }

  pub fn selected(&self) -> Option<usize> {
    self.selected
  }

  pub fn is_selected(&self, index: usize) -> bool {
    self.selected == Some(index)
  }
}

/// Result of clicking an idea: the replacement state plus the detail panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
  pub state: SelectionState,
  pub previous: Option<usize>,
  pub idea: Idea,
  pub details: IdeaDetails,
}

/// Select the idea at `index`, deselecting whatever was selected before.
pub fn select(
  state: SelectionState,
  list: &IdeaList,
  index: usize,
) -> Result<Selection, SelectionError> {
  if list.is_empty() {
    return Err(SelectionError::NothingDisplayed);
  }

  let idea = list
    .get(index)
    .ok_or(SelectionError::OutOfRange { index, len: list.len() })?
    .clone();

  tracing::debug!(index, title = %idea.title, previous = ?state.selected(), "idea selected");

  Ok(Selection {
    state: SelectionState { selected: Some(index) },
    previous: state.selected(),
    details: IdeaDetails::for_idea(&idea),
    idea,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fetch::canned_ideas;

  fn list() -> IdeaList {
    IdeaList::new(canned_ideas())
  }

  #[test]
  fn test_first_selection() {
    let selection = select(SelectionState::none(), &list(), 0).unwrap();

    assert_eq!(selection.state.selected(), Some(0));
    assert_eq!(selection.previous, None);
    assert_eq!(selection.idea.title, "Co-working Space");
    assert_eq!(selection.details.steps.heading, "Co-working Space - Actionable Steps");
  }

  #[test]
  fn test_new_selection_replaces_previous() {
    let list = list();
    let first = select(SelectionState::none(), &list, 0).unwrap();
    let second = select(first.state, &list, 2).unwrap();

    assert_eq!(second.previous, Some(0));
    assert!(second.state.is_selected(2));
    assert!(!second.state.is_selected(0));
    assert_eq!(list.content(second.state).selected_count(), 1);
  }

  #[test]
  fn test_at_most_one_marker_through_any_sequence() {
    let list = list();
    let mut state = SelectionState::none();
    assert_eq!(list.content(state).selected_count(), 0);

    for index in [1, 1, 0, 2, 0] {
      state = select(state, &list, index).unwrap().state;
      let content = list.content(state);
      assert_eq!(content.selected_count(), 1);
      assert!(content.entries()[index].selected);
    }
  }

  #[test]
  fn test_reselecting_is_idempotent() {
    let list = list();
    let once = select(SelectionState::none(), &list, 1).unwrap();
    let twice = select(once.state, &list, 1).unwrap();

    assert_eq!(once.details, twice.details);
    assert_eq!(once.state, twice.state);
  }

  #[test]
  fn test_out_of_range() {
    let result = select(SelectionState::none(), &list(), 3);
    assert_eq!(result.unwrap_err(), SelectionError::OutOfRange { index: 3, len: 3 });
  }

  #[test]
  fn test_empty_list_has_nothing_to_select() {
    let result = select(SelectionState::none(), &IdeaList::default(), 0);
    assert_eq!(result.unwrap_err(), SelectionError::NothingDisplayed);
  }
}
