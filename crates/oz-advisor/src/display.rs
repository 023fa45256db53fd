//! Terminal presentation of advisor content.
//!
//! Status lines go to stderr with a colored `[level]` prefix. Content (ideas,
//! steps, resources, style variables) goes to stdout.

use chrono::Local;
use colored::*;
use oz_core::content::{DetailSection, IdeaDetails, IdeaListContent, ListStyle};
use oz_core::{Presenter, SubmissionOutcome, TriggerControl};
use serde::Serialize;

const WIDTH: usize = 72;

fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

fn log_with(color: Color, prefix: &str, message: &str) {
  let prefix = format_prefix(color, prefix);
  for line in message.lines() {
    eprintln!("{prefix} {line}");
  }
}

pub fn info(message: &str) {
  log_with(Color::Blue, "info", message);
}

pub fn warn(message: &str) {
  log_with(Color::Yellow, "warn", message);
}

pub fn error(message: &str) {
  log_with(Color::Red, "error", message);
}

pub fn success(message: &str) {
  log_with(Color::Green, "sccs", message);
}

/// Timestamped status line
pub fn event(message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  let prefix = format!("[{}] [{}]", "event".blue().bold(), timestamp.cyan());
  for line in message.lines() {
    eprintln!("{prefix} {line}");
  }
}

pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

fn heading(text: &str, border: char) {
  let line = banner_line(WIDTH, border);
  println!("{line}");
  println!("{}", text.bold());
  println!("{line}");
}

fn print_section<T: std::fmt::Display>(section: &DetailSection<T>) {
  println!();
  heading(&section.heading, '-');
  for (position, item) in section.items.iter().enumerate() {
    match section.style {
      ListStyle::Ordered => println!("{:>3}. {item}", position + 1),
      ListStyle::Unordered => println!("  • {item}"),
    }
  }
}

pub fn print_idea_list(content: &IdeaListContent) {
  match content {
    IdeaListContent::Empty { placeholder } => println!("{placeholder}"),
    IdeaListContent::Listed { header, entries } => {
      heading(header, '=');
      for (position, entry) in entries.iter().enumerate() {
        let marker = if entry.selected { "▶".green().bold().to_string() } else { " ".to_string() };
        let title = if entry.selected {
          entry.title.green().bold().to_string()
        } else {
          entry.title.bold().to_string()
        };
        println!("{marker} {}. {title}", position + 1);
        println!("     {}", entry.description);
        println!("     {}", entry.roi_line.cyan());
      }
    }
  }
}

pub fn print_details(details: &IdeaDetails) {
  print_section(&details.steps);
  print_section(&details.resources);
}

/// Writes content to the terminal as it arrives.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
  fn show_trigger(&mut self, trigger: &TriggerControl) {
    if trigger.disabled {
      event(trigger.label);
    }
  }

  fn show_error(&mut self, message: Option<&str>) {
    if let Some(message) = message {
      error(message);
    }
  }

  fn show_ideas(&mut self, content: &IdeaListContent) {
    print_idea_list(content);
  }

  fn show_details(&mut self, details: &IdeaDetails) {
    print_details(details);
  }
}

/// Collects the final content and prints it as one JSON document.
#[derive(Debug, Default, Serialize)]
pub struct JsonReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub outcome: Option<SubmissionOutcome>,
  pub error: Option<String>,
  pub ideas: Option<IdeaListContent>,
  pub details: Option<IdeaDetails>,
}

impl JsonReport {
  pub fn print(&self) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(self)?);
    Ok(())
  }
}

impl Presenter for JsonReport {
  fn show_trigger(&mut self, _trigger: &TriggerControl) {}

  fn show_error(&mut self, message: Option<&str>) {
    self.error = message.map(str::to_string);
  }

  fn show_ideas(&mut self, content: &IdeaListContent) {
    self.ideas = Some(content.clone());
  }

  fn show_details(&mut self, details: &IdeaDetails) {
    self.details = Some(details.clone());
  }
}
