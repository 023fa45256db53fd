use oz_core::tooltip::{InfoIcon, StyleSink, TooltipMeasure, TooltipTrigger};
use oz_core::{Rect, Size, TooltipConfig, TooltipLayout, TooltipPosition, TooltipPositioner, Viewport};
use std::collections::HashMap;

struct FixedSize(Size);

impl TooltipMeasure for FixedSize {
  fn measure(&self, _provisional: &TooltipPosition) -> Size {
    self.0
  }
}

#[derive(Default)]
struct StyleMap {
  vars: HashMap<String, String>,
}

impl StyleSink for StyleMap {
  fn set_property(&mut self, name: &str, value: &str) {
    self.vars.insert(name.to_string(), value.to_string());
  }
}

#[test]
fn test_horizontal_overflow_always_lands_inside_margins() {
  let config = TooltipConfig::default();
  let viewport = Viewport::new(1024.0, 768.0);
  let tooltip = Size::new(240.0, 60.0);

  for left in (0..1024).step_by(16) {
    let icon = Rect::new(left as f64, 100.0, 16.0, 16.0);
    let layout = TooltipLayout::provisional(icon, viewport, &config);
    let provisional = layout.provisional_position();
    let position = layout.finalize(tooltip);

    assert!(position.left >= 10.0, "left {} for icon at {}", position.left, left);
    if provisional.left + tooltip.width > viewport.width {
      assert_eq!(position.left, viewport.width - tooltip.width - 10.0);
    } else {
      assert_eq!(position.left, provisional.left.max(10.0));
    }
  }
}

#[test]
fn test_right_margin_only_applies_after_overflow() {
  let config = TooltipConfig::default();
  let viewport = Viewport::new(800.0, 600.0);
  let tooltip = Size::new(150.0, 30.0);

  // Right edge at 795: inside the viewport, within the margin, left alone.
  let inside = TooltipLayout::provisional(Rect::new(640.0, 100.0, 10.0, 10.0), viewport, &config);
  assert_eq!(inside.finalize(tooltip).left, 645.0);

  // Right edge at 805: overflows, pulled back to the margin.
  let overflowing = TooltipLayout::provisional(Rect::new(650.0, 100.0, 10.0, 10.0), viewport, &config);
  assert_eq!(overflowing.finalize(tooltip).left, 640.0);
}

#[test]
fn test_flips_exactly_when_bottom_placement_overflows() {
  let config = TooltipConfig::default();
  let tooltip = Size::new(120.0, 80.0);

  for scroll_y in [0.0, 250.0, 4000.0] {
    let viewport = Viewport::new(800.0, 600.0).scrolled(0.0, scroll_y);
    for top in (0..600).step_by(20) {
      let icon = Rect::new(200.0, top as f64, 24.0, 24.0);
      let layout = TooltipLayout::provisional(icon, viewport, &config);
      let below = layout.provisional_position().top;
      let position = layout.finalize(tooltip);

      if below + tooltip.height > viewport.height + scroll_y {
        assert_eq!(position.top, icon.top - tooltip.height - 5.0 + scroll_y);
      } else {
        assert_eq!(position.top, below);
      }
    }
  }
}

#[tokio::test]
async fn test_focus_and_hover_produce_same_style_vars() {
  let positioner = TooltipPositioner::default();
  let icon = InfoIcon::new("info-icon", Rect::new(790.0, 590.0, 10.0, 10.0));
  let viewport = Viewport::new(800.0, 600.0);
  let measure = FixedSize(Size::new(150.0, 30.0));

  let mut hovered = StyleMap::default();
  let mut focused = StyleMap::default();
  positioner.position(&icon, TooltipTrigger::PointerEnter, viewport, &measure, &mut hovered).await;
  positioner.position(&icon, TooltipTrigger::Focus, viewport, &measure, &mut focused).await;

  assert_eq!(hovered.vars, focused.vars);
  assert_eq!(hovered.vars["--tooltip-left"], "640px");
  assert_eq!(hovered.vars["--tooltip-top"], "555px");
}

#[tokio::test]
async fn test_icon_with_extra_classes_is_still_handled() {
  let positioner = TooltipPositioner::default();
  let icon = InfoIcon {
    classes: vec!["icon".to_string(), "info-icon".to_string(), "muted".to_string()],
    rect: Rect::new(10.0, 10.0, 10.0, 10.0),
  };
  let mut sink = StyleMap::default();

  let position = positioner
    .position(&icon, TooltipTrigger::Focus, Viewport::new(800.0, 600.0), &FixedSize(Size::new(50.0, 20.0)), &mut sink)
    .await;

  assert_eq!(position, Some(TooltipPosition { top: 25.0, left: 15.0 }));
  assert_eq!(sink.vars.len(), 2);
}
