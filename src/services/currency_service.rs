use regex::Regex;
use std::env;

pub const DEFAULT_USD_TO_INR: f64 = 83.5;

/// Converts display cost strings from the provider's native USD into INR.
/// The rate is injected so tests and deployments can substitute their own.
#[derive(Clone)]
pub struct CurrencyConverter {
    usd_to_inr: f64,
    usd_range: Regex,
}

impl CurrencyConverter {
    pub fn new(usd_to_inr: f64) -> Self {
        Self {
            usd_to_inr,
            // Matches "$15" and "$15-25"
            usd_range: Regex::new(r"\$(\d+)(?:-(\d+))?").unwrap(),
        }
    }

    pub fn from_env() -> Self {
        let rate = env::var("USD_TO_INR_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_USD_TO_INR);
        Self::new(rate)
    }

    /// Convert a dollar amount or range (e.g. "$15-25") to rupees, rounded
    /// to whole units. Strings without a dollar figure pass through as-is.
    pub fn convert(&self, usd_amount: &str) -> String {
        let captures = match self.usd_range.captures(usd_amount) {
            Some(captures) => captures,
            None => return usd_amount.to_string(),
        };

        let min: u64 = captures[1].parse().unwrap_or(0);
        let max: u64 = captures
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(min);

        let min_inr = (min as f64 * self.usd_to_inr).round() as u64;
        let max_inr = (max as f64 * self.usd_to_inr).round() as u64;

        if min == max {
            format!("₹{}", min_inr)
        } else {
            format!("₹{}-{}", min_inr, max_inr)
        }
    }

    /// Format the trip budget line: per-person figure plus the group total.
    pub fn format_budget(&self, per_person_usd: u32, total_usd: u32) -> String {
        let per_person = (per_person_usd as f64 * self.usd_to_inr).round() as u64;
        let total = (total_usd as f64 * self.usd_to_inr).round() as u64;
        format!("₹{}/person (₹{} total)", per_person, total)
    }
}
