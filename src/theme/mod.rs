//! Color palette and user settings for the pricegrid TUI.
//!
//! The palette groups neutrals (base/mantle/surfaces), text shades, and a few
//! accents. Settings come from `settings.conf` under the config directory.
use ratatui::style::Color;

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use settings::{Settings, load_settings, parse_settings};

/// Application theme palette used by rendering code.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background used behind cards.
    pub mantle: Color,
    /// Darkest shade, used for text on highlighted rows.
    pub crust: Color,
    /// Border color for unfocused panels.
    pub surface1: Color,
    /// Border color for cards.
    pub surface2: Color,
    /// Muted caption color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for interactive hints.
    pub sapphire: Color,
    /// Accent for headings and the focused card.
    pub mauve: Color,
    /// Price color.
    pub green: Color,
    /// Rating star color.
    pub yellow: Color,
    /// Error color.
    pub red: Color,
    /// Highlight background for the selected panel row.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's theme palette.
///
/// ```rust
/// use pricegrid::theme::theme;
/// let t = theme();
/// let primary_text = t.text;
/// ```
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        mantle: hex((0x18, 0x18, 0x25)),
        crust: hex((0x11, 0x11, 0x1b)),
        surface1: hex((0x45, 0x47, 0x5a)),
        surface2: hex((0x58, 0x5b, 0x70)),
        overlay1: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext0: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}
