use anyhow::Result;
use oz_core::tooltip::{InfoIcon, StyleSink, TooltipMeasure};
use oz_core::{AdvisorConfig, Size, TooltipLayout, TooltipPosition, TooltipPositioner, Viewport};
use serde::Serialize;

use crate::cli::TooltipArgs;
use crate::display;

/// The CLI has no renderer, so the tooltip size is whatever the caller says.
struct GivenSize(Size);

impl TooltipMeasure for GivenSize {
  fn measure(&self, _provisional: &TooltipPosition) -> Size {
    self.0
  }
}

/// Records style variable writes in order.
#[derive(Debug, Default)]
pub struct StyleLog {
  pub writes: Vec<(String, String)>,
}

impl StyleSink for StyleLog {
  fn set_property(&mut self, name: &str, value: &str) {
    self.writes.push((name.to_string(), value.to_string()));
  }
}

#[derive(Serialize)]
struct TooltipReport {
  provisional: TooltipPosition,
  #[serde(rename = "final")]
  final_position: TooltipPosition,
  style: Vec<(String, String)>,
}

pub async fn handle(args: TooltipArgs, config: AdvisorConfig) -> Result<()> {
  let positioner = TooltipPositioner::new(config.tooltip.clone());
  let icon = InfoIcon { classes: args.classes.clone(), rect: args.icon };
  let viewport = Viewport::new(args.viewport.width, args.viewport.height)
    .scrolled(args.scroll.x, args.scroll.y);
  tracing::debug!(trigger = ?args.trigger, classes = ?args.classes, "positioning tooltip");

  let mut style = StyleLog::default();
  let position = positioner
    .position(&icon, args.trigger.into(), viewport, &GivenSize(args.tooltip_size), &mut style)
    .await;

  let Some(final_position) = position else {
    display::warn(&format!(
      "Element is not marked '{}'; no tooltip positioned",
      config.tooltip.marker_class
    ));
    return Ok(());
  };

  let provisional = TooltipLayout::provisional(args.icon, viewport, &config.tooltip)
    .provisional_position();

  if args.json {
    let final_vars = style.writes.split_off(style.writes.len().saturating_sub(2));
    let report = TooltipReport { provisional, final_position, style: final_vars };
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  display::info(&format!("Provisional: top {}px, left {}px", provisional.top, provisional.left));
  for (name, value) in final_position.style_vars() {
    println!("{name}: {value};");
  }

  Ok(())
}
