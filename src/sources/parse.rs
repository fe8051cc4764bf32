//! Price and spec extraction from provider page text
//!
//! Provider pages are treated as opaque text: markup is stripped, then
//! currency-marked amounts and Indian unit words (Lakh, Crore) are scanned
//! out. Exact per-provider selectors are deliberately not modeled; the
//! outlier filter downstream absorbs whatever noise slips through.

use std::collections::BTreeMap;

use crate::models::PriceSample;

/// Longest spec key accepted, to skip prose lines that merely contain a colon.
const MAX_SPEC_KEY_LEN: usize = 40;

/// Longest spec value accepted.
const MAX_SPEC_VALUE_LEN: usize = 120;

/// Replaces markup with newlines so each element's text lands on its own line.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push('\n');
            }
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Extracts the numeric value from a price token, ignoring currency signs,
/// grouping commas, and stray punctuation.
pub fn clean_numeric(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

fn is_currency_marker(token: &str) -> bool {
    matches!(token, "₹" | "₨" | "Rs" | "Rs." | "INR")
}

/// Scale factor for an Indian unit word following an amount.
fn unit_multiplier(token: &str) -> Option<f64> {
    let word: String = token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    match word.as_str() {
        "lakh" | "lakhs" | "lac" => Some(100_000.0),
        "cr" | "crore" | "crores" => Some(10_000_000.0),
        _ => None,
    }
}

/// Scans page text for price mentions and tags them with the source name.
///
/// A number is taken as a price only when it is currency-marked (`₹`, `Rs`)
/// or scaled by a unit word (`5.5 Lakh`, `1.2 Cr`); bare numbers are noise.
pub fn extract_prices(html: &str, source: &'static str) -> Vec<PriceSample> {
    let text = strip_tags(html);
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut samples = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(value) = clean_numeric(token) else {
            continue;
        };

        let marked = token.contains('₹')
            || token.contains('₨')
            || token.starts_with("Rs")
            || (i > 0 && is_currency_marker(tokens[i - 1]));

        match tokens.get(i + 1).and_then(|next| unit_multiplier(next)) {
            Some(multiplier) => samples.push(PriceSample::new(value * multiplier, source)),
            None if marked => samples.push(PriceSample::new(value, source)),
            None => {}
        }
    }

    samples
}

/// Collects `Key: Value` rows from page text into a spec map.
///
/// Later duplicates win, matching how providers repeat refined values
/// further down the page.
pub fn extract_specs(html: &str) -> BTreeMap<String, String> {
    let text = strip_tags(html);
    let mut specs = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.is_empty()
            || value.is_empty()
            || key.len() > MAX_SPEC_KEY_LEN
            || value.len() > MAX_SPEC_VALUE_LEN
            || value.contains("//")
        {
            continue;
        }

        specs.insert(key.to_string(), value.to_string());
    }

    specs
}
