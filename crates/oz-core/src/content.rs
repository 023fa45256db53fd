//! Display content for the idea list and the detail panels.
//!
//! Everything here is a pure function of its input. The step and resource
//! lists are the same boilerplate for every idea apart from the interpolated
//! title.

use serde::Serialize;

use crate::model::Idea;

pub const IDEAS_HEADER: &str = "Opportunity Zone Ideas";
pub const NO_IDEAS_PLACEHOLDER: &str = "No ideas found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaEntry {
  pub title: String,
  pub description: String,
  pub roi_line: String,
  pub selected: bool,
}

impl IdeaEntry {
  pub fn from_idea(idea: &Idea, selected: bool) -> Self {
    Self {
      title: idea.title.clone(),
      description: idea.description.clone(),
      roi_line: format!("Potential ROI: {}", idea.potential_roi),
      selected,
    }
  }
}

/// What the idea list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdeaListContent {
  Empty { placeholder: String },
  Listed { header: String, entries: Vec<IdeaEntry> },
}

impl IdeaListContent {
  /// Content for `ideas` with the entry at `selected` (if any) marked.
  pub fn build(ideas: &[Idea], selected: Option<usize>) -> Self {
    if ideas.is_empty() {
      return Self::Empty { placeholder: NO_IDEAS_PLACEHOLDER.to_string() };
    }

    let entries = ideas
      .iter()
      .enumerate()
      .map(|(index, idea)| IdeaEntry::from_idea(idea, selected == Some(index)))
      .collect();

    Self::Listed { header: IDEAS_HEADER.to_string(), entries }
  }

  pub fn entries(&self) -> &[IdeaEntry] {
    match self {
      Self::Empty { .. } => &[],
      Self::Listed { entries, .. } => entries,
    }
  }

  pub fn selected_count(&self) -> usize {
    self.entries().iter().filter(|entry| entry.selected).count()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
  Ordered,
  Unordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalResource {
  pub name: String,
  pub guidance: String,
}

impl LocalResource {
  fn new(name: &str, guidance: impl Into<String>) -> Self {
    Self { name: name.to_string(), guidance: guidance.into() }
  }
}

impl std::fmt::Display for LocalResource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.name, self.guidance)
  }
}

/// A titled list shown in one of the detail panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection<T> {
  pub heading: String,
  pub style: ListStyle,
  pub items: Vec<T>,
}

/// Both detail panels for the selected idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeaDetails {
  pub steps: DetailSection<String>,
  pub resources: DetailSection<LocalResource>,
}

impl IdeaDetails {
  pub fn for_idea(idea: &Idea) -> Self {
    Self { steps: actionable_steps(idea), resources: local_resources(idea) }
  }
}

pub fn actionable_steps(idea: &Idea) -> DetailSection<String> {
  let subject = idea.title.to_lowercase();

  let items = vec![
    format!("Research local zoning laws and regulations for {subject}."),
    "Conduct a market analysis to validate demand for this type of business in the area.".to_string(),
    "Develop a detailed business plan, including financial projections.".to_string(),
    "Identify potential investors or funding sources familiar with Opportunity Zone investments.".to_string(),
    "Consult with a tax professional to understand the tax benefits and requirements of Opportunity Zone investments.".to_string(),
    "Begin the process of acquiring or leasing a suitable property within the Opportunity Zone.".to_string(),
    "Engage with local community leaders and organizations to build support for your project.".to_string(),
    "Start the permitting and licensing process for your business.".to_string(),
    "Develop a timeline for project implementation and set milestones.".to_string(),
    "Create a marketing strategy to attract customers or tenants to your new venture.".to_string(),
  ];

  DetailSection {
    heading: format!("{} - Actionable Steps", idea.title),
    style: ListStyle::Ordered,
    items,
  }
}

pub fn local_resources(idea: &Idea) -> DetailSection<LocalResource> {
  let subject = idea.title.to_lowercase();

  let items = vec![
    LocalResource::new(
      "Local Economic Development Office",
      "Contact for guidance on local business incentives and regulations.",
    ),
    LocalResource::new(
      "Chamber of Commerce",
      "Join to network with local business leaders and access resources.",
    ),
    LocalResource::new(
      "Small Business Development Center",
      "Seek free consulting and workshops for business planning.",
    ),
    LocalResource::new(
      "Local Zoning Office",
      format!("Consult for specific zoning requirements related to {subject}."),
    ),
    LocalResource::new(
      "Community Banks",
      "Explore local financing options familiar with Opportunity Zone investments.",
    ),
    LocalResource::new(
      "Industry Associations",
      format!("Join relevant associations for {subject} to access industry-specific resources."),
    ),
    LocalResource::new(
      "Local Universities",
      "Partner for research, talent acquisition, or specialized knowledge.",
    ),
    LocalResource::new("Mentorship Programs", "Connect with experienced entrepreneurs in similar fields."),
    LocalResource::new(
      "Networking Events",
      "Attend local business mixers to build connections and partnerships.",
    ),
    LocalResource::new(
      "Online Communities",
      "Join local business forums or social media groups for peer support and advice.",
    ),
  ];

  DetailSection {
    heading: format!("{} - Local Resources and Support", idea.title),
    style: ListStyle::Unordered,
    items,
  }
}
