//! Pipe-delimited response parser.
//!
//! Whether the model actually answered `CATEGORY|COLOR|EXPLANATION|ICON` is
//! decided here as an explicit branch — the raw-text fallback is a
//! first-class result, not error recovery.

use super::types::{Classification, Outcome};

/// Parse a raw model response into an [`Outcome`].
///
/// The first four `|`-separated segments are taken positionally, each
/// trimmed; segments beyond the fourth are discarded. Fewer than four
/// segments yields [`Outcome::Raw`] with the whole trimmed text.
pub fn parse_classification(raw: &str) -> Outcome {
    let trimmed = raw.trim();
    let segments: Vec<&str> = trimmed.split('|').collect();

    if segments.len() < 4 {
        return Outcome::Raw(trimmed.to_string());
    }

    Outcome::Structured(Classification {
        category: segments[0].trim().to_string(),
        color_name: segments[1].trim().to_string(),
        explanation: segments[2].trim().to_string(),
        icon: segments[3].trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_segments_parse_positionally() {
        let outcome = parse_classification("Organic|Green|Food scraps|🍏");
        assert_eq!(
            outcome,
            Outcome::Structured(Classification {
                category: "Organic".into(),
                color_name: "Green".into(),
                explanation: "Food scraps".into(),
                icon: "🍏".into(),
            })
        );
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let outcome = parse_classification("\n  Paper/Cardboard | Blue | Clean and dry | 📘  \n");
        match outcome {
            Outcome::Structured(c) => {
                assert_eq!(c.category, "Paper/Cardboard");
                assert_eq!(c.color_name, "Blue");
                assert_eq!(c.explanation, "Clean and dry");
                assert_eq!(c.icon, "📘");
            }
            other => panic!("expected Structured, got {:?}", other),
        }
    }

    #[test]
    fn extra_segments_are_discarded() {
        let outcome = parse_classification("Hazardous|Red|Battery acid|⚠️|extra|noise");
        match outcome {
            Outcome::Structured(c) => {
                assert_eq!(c.icon, "⚠️");
                assert_eq!(c.explanation, "Battery acid");
            }
            other => panic!("expected Structured, got {:?}", other),
        }
    }

    #[test]
    fn two_segments_fall_back_to_raw() {
        assert_eq!(
            parse_classification("Organic|Green"),
            Outcome::Raw("Organic|Green".into())
        );
    }

    #[test]
    fn prose_falls_back_to_raw() {
        let text = "I'm sorry, I can't classify that item.";
        assert_eq!(parse_classification(text), Outcome::Raw(text.into()));
    }

    #[test]
    fn empty_response_falls_back_to_raw() {
        assert_eq!(parse_classification("   \n"), Outcome::Raw(String::new()));
    }

    #[test]
    fn empty_middle_segments_are_kept_as_empty_fields() {
        // Positional contract: four delimiters mean four fields, even blank ones.
        let outcome = parse_classification("Organic||Food scraps|🍏");
        match outcome {
            Outcome::Structured(c) => assert_eq!(c.color_name, ""),
            other => panic!("expected Structured, got {:?}", other),
        }
    }
}
