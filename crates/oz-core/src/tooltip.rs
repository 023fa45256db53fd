//! Tooltip placement for info icons.
//!
//! Layout happens in two phases. [`TooltipLayout::provisional`] puts the
//! tooltip under the icon so it can render, the real size is then measured
//! through a [`TooltipMeasure`], and [`TooltipLayout::finalize`] clamps the
//! result into the viewport. All coordinates are CSS pixels in document space.

use serde::{Deserialize, Serialize};

use crate::config::TooltipConfig;

pub const TOP_VAR: &str = "--tooltip-top";
pub const LEFT_VAR: &str = "--tooltip-left";

/// Bounding box relative to the viewport, like a client rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
  pub left: f64,
  pub top: f64,
  pub width: f64,
  pub height: f64,
}

impl Rect {
  pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
    Self { left, top, width, height }
  }

  pub fn right(&self) -> f64 {
    self.left + self.width
  }

  pub fn bottom(&self) -> f64 {
    self.top + self.height
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
  pub width: f64,
  pub height: f64,
  pub scroll_x: f64,
  pub scroll_y: f64,
}

impl Viewport {
  pub fn new(width: f64, height: f64) -> Self {
    Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
  }

  pub fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
    self.scroll_x = scroll_x;
    self.scroll_y = scroll_y;
    self
  }

  /// Lowest visible document y coordinate.
  pub fn visible_bottom(&self) -> f64 {
    self.height + self.scroll_y
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
  pub top: f64,
  pub left: f64,
}

impl TooltipPosition {
  /// The two style variables consumed by the presentation layer.
  pub fn style_vars(&self) -> [(&'static str, String); 2] {
    [(TOP_VAR, px(self.top)), (LEFT_VAR, px(self.left))]
  }

  pub fn apply<S: StyleSink + ?Sized>(&self, sink: &mut S) {
    for (name, value) in self.style_vars() {
      sink.set_property(name, &value);
    }
  }
}

fn px(value: f64) -> String {
  format!("{value}px")
}

/// Receives style variable writes for the tooltip element.
pub trait StyleSink {
  fn set_property(&mut self, name: &str, value: &str);
}

/// Reports the rendered size of the tooltip at its provisional position.
#[cfg_attr(test, mockall::automock)]
pub trait TooltipMeasure {
  fn measure(&self, provisional: &TooltipPosition) -> Size;
}

/// What triggered a tooltip. Pointer enter and keyboard focus behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipTrigger {
  PointerEnter,
  Focus,
}

/// An element that may carry a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoIcon {
  pub classes: Vec<String>,
  pub rect: Rect,
}

impl InfoIcon {
  pub fn new(class: impl Into<String>, rect: Rect) -> Self {
    Self { classes: vec![class.into()], rect }
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|c| c == class)
  }
}

/// One placement computation, started from the icon's current geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLayout {
  icon: Rect,
  viewport: Viewport,
  vertical_offset: f64,
  edge_margin: f64,
  provisional: TooltipPosition,
}

impl TooltipLayout {
  /// First phase: below the icon, anchored at its horizontal center.
  pub fn provisional(icon: Rect, viewport: Viewport, config: &TooltipConfig) -> Self {
    let provisional = TooltipPosition {
      top: icon.bottom() + viewport.scroll_y + config.vertical_offset,
      left: icon.left + icon.width / 2.0 + viewport.scroll_x,
    };

    Self {
      icon,
      viewport,
      vertical_offset: config.vertical_offset,
      edge_margin: config.edge_margin,
      provisional,
    }
  }

  pub fn provisional_position(&self) -> TooltipPosition {
    self.provisional
  }

  /// Second phase: clamp horizontally, then flip above the icon if the
  /// tooltip would run past the bottom of the visible area.
  pub fn finalize(&self, tooltip: Size) -> TooltipPosition {
    let TooltipPosition { mut top, mut left } = self.provisional;

    if left + tooltip.width > self.viewport.width {
      left = self.viewport.width - tooltip.width - self.edge_margin;
      tracing::debug!(left, "tooltip shifted off the right edge");
    }

    if left < self.edge_margin {
      left = self.edge_margin;
    }

    if top + tooltip.height > self.viewport.visible_bottom() {
      top = self.icon.top - tooltip.height - self.vertical_offset + self.viewport.scroll_y;
      tracing::debug!(top, "tooltip flipped above icon");
    }

    TooltipPosition { top, left }
  }
}

/// Handles hover and focus on info icons.
#[derive(Debug, Clone, Default)]
pub struct TooltipPositioner {
  config: TooltipConfig,
}

impl TooltipPositioner {
  pub fn new(config: TooltipConfig) -> Self {
    Self { config }
  }

  pub fn handles(&self, icon: &InfoIcon) -> bool {
    icon.has_class(&self.config.marker_class)
  }

  /// Place the tooltip for `icon`, writing both phases to `sink`.
  ///
  /// Yields once between the phases so the provisional placement can render
  /// before it is measured. Returns `None` for elements without the marker class.
  pub async fn position<M, S>(
    &self,
    icon: &InfoIcon,
    trigger: TooltipTrigger,
    viewport: Viewport,
    measure: &M,
    sink: &mut S,
  ) -> Option<TooltipPosition>
  where
    M: TooltipMeasure + ?Sized,
    S: StyleSink + ?Sized,
  {
    if !self.handles(icon) {
      return None;
    }

    tracing::debug!(?trigger, "positioning tooltip");
    let layout = TooltipLayout::provisional(icon.rect, viewport, &self.config);
    let provisional = layout.provisional_position();
    provisional.apply(&mut *sink);

    tokio::task::yield_now().await;

    let size = measure.measure(&provisional);
    let position = layout.finalize(size);
    position.apply(&mut *sink);
    Some(position)
  }
}
