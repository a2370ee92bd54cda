use std::cmp::Ordering;

use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;

use crate::models::Holding;

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Millisecond-timestamp ids, strictly increasing for the lifetime of the
/// generator. Ids are compared as unbounded decimal numbers, so a saved id of
/// any length can be stepped over.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: Option<String>,
}

impl IdGenerator {
    /// Starts above every numeric id in `holdings`.
    pub fn after(holdings: &[Holding]) -> Self {
        let last = holdings
            .iter()
            .map(|holding| holding.id().as_str())
            .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
            .map(strip_leading_zeros)
            .max_by(|a, b| compare_digits(a, b))
            .map(str::to_string);

        Self { last }
    }

    pub fn next_id(&mut self) -> String {
        let now = Local::now().timestamp_millis().max(0).to_string();
        let next = match &self.last {
            Some(last) => {
                let bumped = increment_digits(last);
                if compare_digits(&now, &bumped) == Ordering::Greater {
                    now
                } else {
                    bumped
                }
            }
            None => now,
        };

        self.last = Some(next.clone());
        next
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Orders two digit strings without leading zeros by numeric value.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }

    format!("1{}", String::from_utf8_lossy(&bytes))
}
