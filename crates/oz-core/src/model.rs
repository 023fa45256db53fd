use serde::{Deserialize, Deserializer, Serialize};

/// The five raw values of the property form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
  pub address: String,
  pub square_footage: String,
  pub budget: String,
  pub business_type: String,
  pub cash_flow_type: String,
}

impl FormFields {
  /// Build the request for one submission. Numbers are coerced, never validated.
  pub fn to_profile(&self) -> PropertyProfile {
    PropertyProfile {
      address: self.address.clone(),
      square_footage: coerce_number(&self.square_footage),
      budget: coerce_number(&self.budget),
      business_type: self.business_type.clone(),
      cash_flow_type: self.cash_flow_type.clone(),
    }
  }
}

/// Request sent to the idea service.
///
/// Non-numeric input shows up here as NaN and goes out on the wire as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyProfile {
  pub address: String,
  #[serde(deserialize_with = "nullable_number")]
  pub square_footage: f64,
  #[serde(deserialize_with = "nullable_number")]
  pub budget: f64,
  pub business_type: String,
  pub cash_flow_type: String,
}

fn nullable_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A proposed business or investment concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
  pub id: String,
  pub title: String,
  pub description: String,
  /// Free text, e.g. "15-20% annually"
  #[serde(rename = "potentialROI")]
  pub potential_roi: String,
}

impl Idea {
  pub fn new(
    id: impl Into<String>,
    title: impl Into<String>,
    description: impl Into<String>,
    potential_roi: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      description: description.into(),
      potential_roi: potential_roi.into(),
    }
  }
}

/// Coerce form text into a number the way browser form fields do.
///
/// Blank input is zero, `Infinity` and radix-prefixed integers are accepted,
/// and everything unparseable becomes NaN rather than an error.
pub fn coerce_number(raw: &str) -> f64 {
  let text = raw.trim();
  if text.is_empty() {
    return 0.0;
  }

  match text {
    "Infinity" | "+Infinity" => return f64::INFINITY,
    "-Infinity" => return f64::NEG_INFINITY,
    _ => {}
  }

  if let Some(value) = radix_literal(text) {
    return value;
  }

  let decimal_chars = text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
  if !decimal_chars {
    return f64::NAN;
  }

  text.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(text: &str) -> Option<f64> {
  let (radix, digits) = match text.get(..2)? {
    "0x" | "0X" => (16, &text[2..]),
    "0o" | "0O" => (8, &text[2..]),
    "0b" | "0B" => (2, &text[2..]),
    _ => return None,
  };

  if digits.is_empty() {
    return Some(f64::NAN);
  }

  let value = digits
    .chars()
    .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)));
  Some(value.unwrap_or(f64::NAN))
}
