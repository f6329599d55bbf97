//! Diesel row types and their conversions into domain records.
//!
//! The record store this console grew out of kept numeric quantities as
//! loosely typed text. All of that slack is absorbed here, once, so the rest
//! of the crate only ever sees typed domain values.

pub mod inventory;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod table;

/// Coerce a loosely typed quantity to a number; missing or non-numeric
/// values read as 0.
pub(crate) fn coerce_quantity(value: Option<&str>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(coerce_quantity(Some("450.50")), 450.50);
        assert_eq!(coerce_quantity(Some("  12 ")), 12.0);
    }

    #[test]
    fn garbage_and_missing_read_as_zero() {
        assert_eq!(coerce_quantity(Some("abc")), 0.0);
        assert_eq!(coerce_quantity(Some("")), 0.0);
        assert_eq!(coerce_quantity(None), 0.0);
    }
}
