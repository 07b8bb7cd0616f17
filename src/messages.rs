use crate::ui::rgb::{
    CORAL, ELECTRIC_PURPLE, ELECTRIC_YELLOW, NEON_CYAN, SOFT_PINK, SUCCESS_GREEN,
};
use rand::prelude::*;

/// A spinner message with its display color
#[derive(Clone)]
pub struct ColoredMessage {
    pub text: String,
    pub color: (u8, u8, u8),
}

static WAITING_MESSAGES: std::sync::LazyLock<Vec<ColoredMessage>> =
    std::sync::LazyLock::new(|| {
        vec![
            ColoredMessage {
                text: "🔮 Consulting the marketplace oracle...".to_string(),
                color: ELECTRIC_PURPLE,
            },
            ColoredMessage {
                text: "📈 Studying the trending gig charts...".to_string(),
                color: NEON_CYAN,
            },
            ColoredMessage {
                text: "✨ Distilling keywords from top sellers...".to_string(),
                color: ELECTRIC_YELLOW,
            },
            ColoredMessage {
                text: "🚀 Launching your listing into orbit...".to_string(),
                color: CORAL,
            },
            ColoredMessage {
                text: "🪄 Weaving a title buyers can't resist...".to_string(),
                color: SOFT_PINK,
            },
            ColoredMessage {
                text: "📝 Drafting prose worth five stars...".to_string(),
                color: SUCCESS_GREEN,
            },
            ColoredMessage {
                text: "🔍 Mining search intent for gold...".to_string(),
                color: NEON_CYAN,
            },
            ColoredMessage {
                text: "💡 Laying out your tech stack in lights...".to_string(),
                color: ELECTRIC_PURPLE,
            },
        ]
    });

/// Pick a random waiting message for the spinner
pub fn get_waiting_message() -> ColoredMessage {
    let mut rng = rand::rng();
    WAITING_MESSAGES
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| ColoredMessage {
            text: "Generating content...".to_string(),
            color: NEON_CYAN,
        })
}
