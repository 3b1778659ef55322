//! Disposal bins and the quick reference guide.
//!
//! The five bins form a closed set. The model is *asked* to answer with one
//! of these color names, but its output stays free text — [`BinColor::from_name`]
//! is a display lookup, never a validator, and unknown names resolve to the
//! neutral default background.

/// The five disposal bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinColor {
    Green,
    Blue,
    White,
    Black,
    Red,
}

/// Neutral card background used when the model's color name is not one of
/// the five known bins.
pub const DEFAULT_BACKGROUND: (u8, u8, u8) = (0xee, 0xee, 0xee);

impl BinColor {
    /// Case-insensitive lookup of the model's color segment.
    ///
    /// `None` means the model left the requested vocabulary; callers fall
    /// back to [`DEFAULT_BACKGROUND`] for display and keep the rest of the
    /// record untouched.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    /// Card background, RGB. The five pastels of the reference guide
    /// (#d1e7dd, #cff4fc, #ffffff, #e2e3e5, #f8d7da).
    pub fn background(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0xd1, 0xe7, 0xdd),
            Self::Blue => (0xcf, 0xf4, 0xfc),
            Self::White => (0xff, 0xff, 0xff),
            Self::Black => (0xe2, 0xe3, 0xe5),
            Self::Red => (0xf8, 0xd7, 0xda),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
        }
    }
}

/// Resolve a free-text color name to a card background.
pub fn background_for(name: &str) -> (u8, u8, u8) {
    BinColor::from_name(name)
        .map(BinColor::background)
        .unwrap_or(DEFAULT_BACKGROUND)
}

/// One card of the quick reference guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bin: BinColor,
}

/// The quick reference guide, in display order.
pub fn cards() -> [GuideCard; 5] {
    [
        GuideCard {
            icon: "🍏",
            title: "Organics",
            description: "Food scraps, peels, garden waste.",
            bin: BinColor::Green,
        },
        GuideCard {
            icon: "📘",
            title: "Paper & Cardboard",
            description: "Clean, dry paper, magazines.",
            bin: BinColor::Blue,
        },
        GuideCard {
            icon: "🧴",
            title: "Recyclables",
            description: "Clean plastic, glass, metal.",
            bin: BinColor::White,
        },
        GuideCard {
            icon: "⬛",
            title: "Non-recyclable",
            description: "Napkins, soiled cardboard.",
            bin: BinColor::Black,
        },
        GuideCard {
            icon: "⚠️",
            title: "Hazardous",
            description: "Batteries, oils, chemicals.",
            bin: BinColor::Red,
        },
    ]
}
