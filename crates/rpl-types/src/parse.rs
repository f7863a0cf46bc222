//! Conversions from user-entered text to entity fields.
//!
//! These mirror what an ingredient or recipe form submits: free text for the
//! count, a date that may be left as `N/A`, and a comma-separated list of
//! recipe lines.

use chrono::NaiveDate;

use crate::error::TypeError;
use crate::recipe::RecipeIngredient;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a unit count. Blank input counts as zero.
pub fn parse_count(input: &str) -> Result<u32, TypeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| TypeError::InvalidCount {
        input: input.to_string(),
    })
}

/// Parse an expiry date.
///
/// Blank input, `N/A` and `none` (any case) mean the ingredient does not
/// expire.
pub fn parse_expiry(input: &str) -> Result<Option<NaiveDate>, TypeError> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TypeError::InvalidDate {
            input: input.to_string(),
        })
}

/// Parse a comma-separated list of `name:count` recipe lines.
pub fn parse_recipe_ingredients(input: &str) -> Result<Vec<RecipeIngredient>, TypeError> {
    input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
