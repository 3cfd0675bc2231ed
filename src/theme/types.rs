use ratatui::style::Color;

use crate::state::Screen;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// URL scheme of the content API.
    pub api_scheme: String,
    /// Host (and optional port) of the content API.
    pub api_authority: String,
    /// Base64-encoded API key; `None` uses the build-time or built-in key.
    pub api_key: Option<String>,
    /// Cosmetic delay before each fetch so the loading state stays visible.
    pub fetch_delay_ms: u64,
    /// Connect timeout for API requests.
    pub connect_timeout_secs: u64,
    /// Read timeout for API requests.
    pub read_timeout_secs: u64,
    /// Locale of the optional translation override file.
    pub locale: String,
    /// Tab shown on startup.
    pub start_screen: Screen,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_scheme: "https".to_string(),
            api_authority: "content.guardianapis.com".to_string(),
            api_key: None,
            fetch_delay_ms: 2000,
            connect_timeout_secs: 10,
            read_timeout_secs: 15,
            locale: "en-US".to_string(),
            start_screen: Screen::World,
        }
    }
}
