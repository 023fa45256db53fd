use clap::{Args, Parser, Subcommand, ValueEnum};
use oz_core::tooltip::TooltipTrigger;
use oz_core::{FormFields, Rect, Size};

/// Opportunity Zone Advisor
///
/// Submit a property profile, get investment ideas, and see what to do next.
#[derive(Parser)]
#[command(name = "oz-advisor")]
#[command(about = "Investment ideas and next steps for opportunity zone properties")]
#[command(version)]
pub struct Cli {
  /// Configuration file path
  #[arg(short, long, global = true)]
  pub config: Option<String>,

  /// Show debug diagnostics on stderr
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Submit a property profile and list investment ideas
  Ideas(IdeasArgs),
  /// Compute the tooltip position for an info icon
  Tooltip(TooltipArgs),
  /// Show the effective configuration
  Config {
    /// Write the effective configuration to this file
    #[arg(long)]
    save: Option<String>,
  },
}

#[derive(Args, Debug, Clone)]
pub struct IdeasArgs {
  /// Property address
  #[arg(long)]
  pub address: String,

  /// Square footage (taken as typed; non-numbers are sent as null)
  #[arg(long, default_value = "", allow_hyphen_values = true)]
  pub square_footage: String,

  /// Budget (taken as typed; non-numbers are sent as null)
  #[arg(long, default_value = "", allow_hyphen_values = true)]
  pub budget: String,

  /// Business type, e.g. retail
  #[arg(long, default_value = "")]
  pub business_type: String,

  /// Cash flow type, e.g. stable
  #[arg(long, default_value = "")]
  pub cash_flow_type: String,

  /// Select the idea at this position (1-based) and show its next steps
  #[arg(short, long)]
  pub select: Option<usize>,

  /// Idea service URL; switches to the HTTP idea service
  #[arg(long, env = "OZ_ADVISOR_ENDPOINT")]
  pub endpoint: Option<String>,

  /// Print structured content as JSON
  #[arg(long)]
  pub json: bool,
}

impl IdeasArgs {
  pub fn form_fields(&self) -> FormFields {
    FormFields {
      address: self.address.clone(),
      square_footage: self.square_footage.clone(),
      budget: self.budget.clone(),
      business_type: self.business_type.clone(),
      cash_flow_type: self.cash_flow_type.clone(),
    }
  }
}

#[derive(Args, Debug, Clone)]
pub struct TooltipArgs {
  /// Icon bounding box as left,top,width,height
  #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
  pub icon: Rect,

  /// Viewport size as width,height
  #[arg(long, value_parser = parse_size)]
  pub viewport: Size,

  /// Scroll offsets as x,y
  #[arg(long, value_parser = parse_scroll, default_value = "0,0", allow_hyphen_values = true)]
  pub scroll: ScrollOffset,

  /// Rendered tooltip size as width,height
  #[arg(long, value_parser = parse_size)]
  pub tooltip_size: Size,

  /// What triggered the tooltip
  #[arg(long, value_enum, default_value_t = TriggerArg::Hover)]
  pub trigger: TriggerArg,

  /// Class list of the element
  #[arg(long = "class", default_value = "info-icon")]
  pub classes: Vec<String>,

  /// Print positions as JSON
  #[arg(long)]
  pub json: bool,
}

/// Page scroll position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerArg {
  Hover,
  Focus,
}

impl From<TriggerArg> for TooltipTrigger {
  fn from(arg: TriggerArg) -> Self {
    match arg {
      TriggerArg::Hover => TooltipTrigger::PointerEnter,
      TriggerArg::Focus => TooltipTrigger::Focus,
    }
  }
}

fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], String> {
  let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
  if parts.len() != N {
    return Err(format!("expected {N} comma-separated numbers, got '{raw}'"));
  }

  let mut values = [0.0; N];
  for (slot, part) in values.iter_mut().zip(parts) {
    *slot = part.parse::<f64>().map_err(|_| format!("'{part}' is not a number"))?;
    if !slot.is_finite() {
      return Err(format!("'{part}' is not a finite number"));
    }
  }
  Ok(values)
}

pub fn parse_rect(raw: &str) -> Result<Rect, String> {
  let [left, top, width, height] = parse_numbers::<4>(raw)?;
  Ok(Rect::new(left, top, width, height))
}

pub fn parse_size(raw: &str) -> Result<Size, String> {
  let [width, height] = parse_numbers::<2>(raw)?;
  Ok(Size::new(width, height))
}

pub fn parse_scroll(raw: &str) -> Result<ScrollOffset, String> {
  let [x, y] = parse_numbers::<2>(raw)?;
  Ok(ScrollOffset { x, y })
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_rect() {
    assert_eq!(parse_rect("10, 20,30,40").unwrap(), Rect::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(parse_rect("-5,0,1.5,2").unwrap(), Rect::new(-5.0, 0.0, 1.5, 2.0));
    assert!(parse_rect("1,2,3").is_err());
    assert!(parse_rect("a,b,c,d").is_err());
    assert!(parse_rect("1,2,3,inf").is_err());
  }

  #[test]
  fn test_parse_size() {
    assert_eq!(parse_size("800,600").unwrap(), Size::new(800.0, 600.0));
    assert!(parse_size("800").is_err());
  }

  #[test]
  fn test_parse_scroll() {
    assert_eq!(parse_scroll("0, 200").unwrap(), ScrollOffset { x: 0.0, y: 200.0 });
    assert!(parse_scroll("1,2,3").is_err());
  }

  #[test]
  fn test_tooltip_scroll_defaults_to_origin() {
    let cli = Cli::parse_from([
      "oz-advisor",
      "tooltip",
      "--icon",
      "0,0,10,10",
      "--viewport",
      "800,600",
      "--tooltip-size",
      "10,10",
    ]);

    match cli.command {
      Commands::Tooltip(args) => assert_eq!(args.scroll, ScrollOffset::default()),
      _ => panic!("expected tooltip command"),
    }
  }

  #[test]
  fn test_ideas_args_keep_raw_numbers() {
    let cli = Cli::parse_from([
      "oz-advisor",
      "ideas",
      "--address",
      "123 Main St",
      "--square-footage",
      "1,000",
      "--budget",
      "50000",
    ]);

    match cli.command {
      Commands::Ideas(args) => {
        let fields = args.form_fields();
        assert_eq!(fields.square_footage, "1,000");
        assert!(fields.to_profile().square_footage.is_nan());
        assert_eq!(fields.to_profile().budget, 50000.0);
      }
      _ => panic!("expected ideas command"),
    }
  }
}
