// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of declarative host attributes.
//!
//! Hosts configure widgets through string attributes (`type="single"`,
//! `orientation="horizontal"`, `duration="5000"`, `ratio="16/9"`). These
//! helpers map such strings onto typed values. Malformed input never
//! produces an error: every helper falls back to a stated default, because
//! a typo in markup must degrade the widget, not break the page.

use armature_registry::Orientation;

/// Selection arity, as declared by a `type` attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// `type="single"`.
    #[default]
    Single,
    /// `type="multiple"`.
    Multiple,
}

/// Parses a boolean-ish attribute.
///
/// `None` means the attribute is absent (`false`); `Some("")` and
/// `Some("true")` mean present (`true`); `Some("false")` opts out.
/// Anything else reads as present, matching boolean-attribute semantics.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(text) => !text.trim().eq_ignore_ascii_case("false"),
    }
}

/// Parses `"single"` / `"multiple"`, defaulting to single.
#[must_use]
pub fn parse_selection_mode(value: &str) -> SelectionMode {
    if value.trim().eq_ignore_ascii_case("multiple") {
        SelectionMode::Multiple
    } else {
        SelectionMode::Single
    }
}

/// Parses `"horizontal"` / `"vertical"`, defaulting to vertical.
#[must_use]
pub fn parse_orientation(value: &str) -> Orientation {
    if value.trim().eq_ignore_ascii_case("horizontal") {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Parses a non-negative millisecond duration, with a fallback for
/// malformed input.
#[must_use]
pub fn parse_ms_or(value: &str, fallback: u64) -> u64 {
    value.trim().parse::<u64>().unwrap_or(fallback)
}

/// Parses a finite float, with a fallback for malformed or non-finite
/// input.
#[must_use]
pub fn parse_f64_or(value: &str, fallback: f64) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => fallback,
    }
}

/// Parses an aspect ratio: either a plain number or `"w/h"`.
///
/// Malformed, non-finite, or non-positive input falls back to `1.0`
/// (square), so a bad ratio renders degenerate-but-visible rather than
/// propagating a parse failure.
#[must_use]
pub fn parse_ratio(value: &str) -> f64 {
    let text = value.trim();
    let parsed = if let Some((w, h)) = text.split_once('/') {
        let w = parse_f64_or(w, f64::NAN);
        let h = parse_f64_or(h, f64::NAN);
        w / h
    } else {
        parse_f64_or(text, f64::NAN)
    };
    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_boolean_attribute_semantics() {
        assert!(!parse_flag(None));
        assert!(parse_flag(Some("")));
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("disabled")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some(" FALSE ")));
    }

    #[test]
    fn selection_mode_defaults_to_single() {
        assert_eq!(parse_selection_mode("multiple"), SelectionMode::Multiple);
        assert_eq!(parse_selection_mode("single"), SelectionMode::Single);
        assert_eq!(parse_selection_mode("banana"), SelectionMode::Single);
    }

    #[test]
    fn orientation_defaults_to_vertical() {
        assert_eq!(parse_orientation("horizontal"), Orientation::Horizontal);
        assert_eq!(parse_orientation(""), Orientation::Vertical);
        assert_eq!(parse_orientation("diagonal"), Orientation::Vertical);
    }

    #[test]
    fn durations_fall_back_on_junk() {
        assert_eq!(parse_ms_or("5000", 0), 5000);
        assert_eq!(parse_ms_or(" 300 ", 0), 300);
        assert_eq!(parse_ms_or("-1", 700), 700);
        assert_eq!(parse_ms_or("soon", 700), 700);
    }

    #[test]
    fn ratios_fall_back_to_square() {
        assert_eq!(parse_ratio("16/9"), 16.0 / 9.0);
        assert_eq!(parse_ratio("1.5"), 1.5);
        assert_eq!(parse_ratio("0"), 1.0);
        assert_eq!(parse_ratio("16/0"), 1.0);
        assert_eq!(parse_ratio("wide"), 1.0);
    }
}
