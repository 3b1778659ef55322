//! Terminal rendering — result cards, raw fallback, and the reference guide.
//!
//! Pure string builders; nothing here talks to the gateway or prints.
//! Backgrounds come from [`crate::guide`], applied as truecolor escapes.

use owo_colors::OwoColorize;

use crate::guide::{self, background_for, DEFAULT_BACKGROUND};
use crate::llm::Classification;

const CARD_WIDTH: usize = 46;

/// Dark ink that stays readable on all five pastel backgrounds.
const INK: (u8, u8, u8) = (0x21, 0x25, 0x29);

/// One centered card line with the given background.
fn card_line(text: &str, bg: (u8, u8, u8)) -> String {
    let pad = CARD_WIDTH.saturating_sub(text.chars().count());
    let left = pad / 2;
    let padded = format!(" {}{}{} ", " ".repeat(left), text, " ".repeat(pad - left));
    format!(
        "{}\n",
        padded
            .truecolor(INK.0, INK.1, INK.2)
            .on_truecolor(bg.0, bg.1, bg.2)
    )
}

/// Greedy word wrap for the explanation line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render a structured classification as a colored result card.
///
/// The background comes from the model's color name; names outside the five
/// known bins get the neutral default and everything else renders as-is.
pub fn classification_card(c: &Classification) -> String {
    let bg = background_for(&c.color_name);
    let mut out = String::new();
    out.push_str(&card_line("", bg));
    out.push_str(&card_line(&c.icon, bg));
    out.push_str(&card_line(&c.category, bg));
    out.push_str(&card_line(
        &format!("{} BIN", c.color_name.to_uppercase()),
        bg,
    ));
    out.push_str(&card_line(&"─".repeat(CARD_WIDTH - 8), bg));
    for line in wrap(&c.explanation, CARD_WIDTH - 4) {
        out.push_str(&card_line(&line, bg));
    }
    out.push_str(&card_line("", bg));
    out
}

/// Render an unstructured model response verbatim, in a neutral card.
pub fn raw_card(text: &str) -> String {
    let mut out = String::new();
    out.push_str(&card_line("", DEFAULT_BACKGROUND));
    for line in text.lines() {
        for wrapped in wrap(line, CARD_WIDTH - 4) {
            out.push_str(&card_line(&wrapped, DEFAULT_BACKGROUND));
        }
    }
    out.push_str(&card_line("", DEFAULT_BACKGROUND));
    out
}

/// Render the five-card quick reference guide.
pub fn guide_table() -> String {
    let mut out = String::from("📚 Quick color guide\n");
    for card in guide::cards() {
        let bg = card.bin.background();
        let line = format!(
            " {}  {:<18} {:<34} {:>5} bin ",
            card.icon,
            card.title,
            card.description,
            card.bin.label()
        );
        out.push_str(&format!(
            "{}\n",
            line.truecolor(INK.0, INK.1, INK.2)
                .on_truecolor(bg.0, bg.1, bg.2)
        ));
    }
    out
}
