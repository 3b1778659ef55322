//! Classification prompt — the contract between EcoGuide and the model.
//!
//! The system prompt pins the response format to a single pipe-delimited
//! line and enumerates the five permitted category/color/icon combinations
//! as guidance. None of it is enforced on the model side; the parser decides
//! whether the answer actually followed the format.

pub const CLASSIFY_MAX_TOKENS: u32 = 256;

/// CLASSIFY system prompt.
///
/// Instructs the model to place a single waste item into one of the five
/// disposal categories and answer with exactly one formatted line.
pub const CLASSIFY_SYSTEM_PROMPT: &str = r#"You are a global recycling expert. The user names a single waste item and you assign it to the correct disposal bin.

<rules>
1. Respond with EXACTLY one line in the form CATEGORY|COLOR|EXPLANATION|ICON.
2. No prose, no markdown, no code fences, no extra lines.
3. EXPLANATION is one short sentence telling the user why the item belongs there.
4. Use only the categories, colors and icons listed below.
</rules>

<categories>
Organic|Green|food scraps, peels, garden waste|🍏
Paper/Cardboard|Blue|clean and dry paper, cardboard, magazines|📘
Recyclable|White|clean plastic, glass and metal containers|🧴
Non-recyclable|Black|napkins, soiled cardboard, mixed waste|⬛
Hazardous|Red|batteries, oils, chemicals, electronics|⚠️
</categories>"#;

/// Build the user message for a classification request.
///
/// The item text is embedded verbatim — no escaping or sanitization.
pub fn build_classify_message(item_text: &str) -> String {
    format!("Classify the waste item: \"{item_text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_embeds_item_verbatim() {
        let msg = build_classify_message("greasy pizza box | with onions");
        assert!(msg.contains("greasy pizza box | with onions"));
    }

    #[test]
    fn system_prompt_pins_the_pipe_format() {
        assert!(CLASSIFY_SYSTEM_PROMPT.contains("CATEGORY|COLOR|EXPLANATION|ICON"));
    }

    #[test]
    fn system_prompt_enumerates_all_five_bins() {
        for color in ["Green", "Blue", "White", "Black", "Red"] {
            assert!(
                CLASSIFY_SYSTEM_PROMPT.contains(color),
                "missing bin color {color}"
            );
        }
    }
}
