//! Terminal colors for theme keys.
//!
//! Each `ColorKey` maps to one accent color (roughly the 600 shade of the
//! matching web palette). Buttons use the accent as background.

use ratatui::style::{Color, Modifier, Style};

use crate::core::types::ColorKey;

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text color, for hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Correct answer (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Wrong answer (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub button_bg: Color,
    pub button_fg: Color,
}

impl Palette {
    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, selected: bool) -> Style {
        let style = Style::default().bg(self.button_bg).fg(self.button_fg);
        if selected {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    }
}

pub fn accent(color: ColorKey) -> Color {
    match color {
        ColorKey::Blue => Color::Rgb(37, 99, 235),
        ColorKey::Indigo => Color::Rgb(79, 70, 229),
        ColorKey::Purple => Color::Rgb(147, 51, 234),
        ColorKey::Pink => Color::Rgb(219, 39, 119),
        ColorKey::Rose => Color::Rgb(225, 29, 72),
        ColorKey::Orange => Color::Rgb(234, 88, 12),
        ColorKey::Amber => Color::Rgb(217, 119, 6),
        ColorKey::Yellow => Color::Rgb(202, 138, 4),
        ColorKey::Lime => Color::Rgb(101, 163, 13),
        ColorKey::Green => Color::Rgb(22, 163, 74),
        ColorKey::Emerald => Color::Rgb(5, 150, 105),
        ColorKey::Teal => Color::Rgb(13, 148, 136),
        ColorKey::Cyan => Color::Rgb(8, 145, 178),
        ColorKey::Sky => Color::Rgb(2, 132, 199),
        ColorKey::Violet => Color::Rgb(124, 58, 237),
        ColorKey::Fuchsia => Color::Rgb(192, 38, 211),
        ColorKey::Slate => Color::Rgb(71, 85, 105),
        ColorKey::Red => Color::Rgb(220, 38, 38),
        ColorKey::Brown => Color::Rgb(146, 64, 14),
        ColorKey::Gray => Color::Rgb(75, 85, 99),
    }
}

pub fn palette(color: ColorKey) -> Palette {
    Palette {
        accent: accent(color),
        button_bg: accent(color),
        button_fg: Color::White,
    }
}
