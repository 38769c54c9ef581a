//! Theme and style system for tidepool
//!
//! One global theme, swappable at startup, with a monochrome mode for
//! terminals that should not receive color codes.

use ratatui::style::{Color, Style, Stylize};
use std::str::FromStr;
use std::sync::RwLock;

/// Focus indicator shown next to the focused checkbox/link row
pub const FOCUS_INDICATOR: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Swap the global theme. Called once at startup, before any drawing.
pub fn init_theme(theme_type: ThemeType) {
    *THEME.write().unwrap() = Theme::new(theme_type);
}

/// Snapshot of the current theme.
pub fn theme() -> Theme {
    *THEME.read().unwrap()
}

/// Theme selector, parsed from the config or forced by `--no-colors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Resolved palette plus the styles built from it.
///
/// In monochrome mode every helper returns its modifier-only form and
/// the palette is never consulted, so no color codes reach the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    monochrome: bool,
    palette: Palette,
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    /// Main accent: titles, focused borders, the submit button.
    accent: Color,
    /// Second accent: links and the logo wave.
    accent_alt: Color,
    /// Checked boxes.
    ok: Color,
    /// The agreement message.
    alert: Color,
    /// Body text.
    ink: Color,
    /// Placeholders and hints.
    faint: Color,
    /// Emphasized text, also the focused row foreground.
    glow: Color,
    /// Resting borders.
    edge: Color,
    /// Focused borders.
    edge_active: Color,
    /// Focused row background.
    row_bg: Color,
    /// Card background; Reset leaves the terminal's own.
    surface: Color,
    /// Near-surface backdrop shapes (bubbles, fish).
    shallows: Color,
    /// Deep backdrop shapes.
    depths: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// For dark terminal backgrounds. Cyan reads as sea foam here.
    const fn dark() -> Self {
        Self {
            monochrome: false,
            palette: Palette {
                accent: Color::Cyan,
                accent_alt: Color::LightBlue,
                ok: Color::Green,
                alert: Color::Red,
                ink: Color::White,
                faint: Color::DarkGray,
                glow: Color::Yellow,
                edge: Color::DarkGray,
                edge_active: Color::Cyan,
                row_bg: Color::DarkGray,
                surface: Color::Reset,
                shallows: Color::Rgb(70, 130, 180),
                depths: Color::Rgb(25, 60, 100),
            },
        }
    }

    /// Darker accents so everything stays legible on light backgrounds.
    fn light() -> Self {
        Self {
            monochrome: false,
            palette: Palette {
                accent: Color::Blue,
                accent_alt: Color::Rgb(0, 105, 148),
                ok: Color::Green,
                alert: Color::Red,
                ink: Color::Black,
                faint: Color::DarkGray,
                glow: Color::Blue,
                edge: Color::DarkGray,
                edge_active: Color::Blue,
                row_bg: Color::Gray,
                surface: Color::Reset,
                shallows: Color::Rgb(100, 160, 200),
                depths: Color::Rgb(60, 110, 160),
            },
        }
    }

    /// Modifier-only rendition for `NO_COLOR` terminals. The palette is
    /// carried but never read.
    fn no_color() -> Self {
        Self {
            monochrome: true,
            ..Self::dark()
        }
    }

    /// Choose the colored or the monochrome form of a style.
    fn pick(&self, colored: Style, plain: Style) -> Style {
        if self.monochrome {
            plain
        } else {
            colored
        }
    }

    /// Primary/title text.
    pub fn title_style(&self) -> Style {
        self.pick(
            Style::new().fg(self.palette.accent).bold(),
            Style::new().bold(),
        )
    }

    /// Regular text.
    pub fn text_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.ink), Style::new())
    }

    /// Placeholders and hints.
    pub fn muted_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.faint), Style::new().dim())
    }

    /// Emphasized text.
    pub fn emphasis_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.glow), Style::new().bold())
    }

    /// Checked boxes.
    pub fn success_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.ok), Style::new().bold())
    }

    /// The agreement message.
    pub fn error_style(&self) -> Style {
        self.pick(
            Style::new().fg(self.palette.alert),
            Style::new().bold().underlined(),
        )
    }

    /// Focused borders.
    pub fn border_focused_style(&self) -> Style {
        self.pick(
            Style::new().fg(self.palette.edge_active),
            Style::new().bold(),
        )
    }

    /// Resting borders.
    pub fn border_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.edge), Style::new())
    }

    /// The focused checkbox/link/button row.
    pub fn highlight_style(&self) -> Style {
        self.pick(
            Style::new()
                .fg(self.palette.glow)
                .bg(self.palette.row_bg)
                .bold(),
            Style::new().bold().reversed(),
        )
    }

    /// The cross-flow links ("Sign up", "Sign in").
    pub fn link_style(&self) -> Style {
        self.pick(
            Style::new().fg(self.palette.accent_alt).underlined(),
            Style::new().underlined(),
        )
    }

    /// Near-surface backdrop shapes.
    pub fn water_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.shallows), Style::new().dim())
    }

    /// Deep backdrop shapes.
    pub fn water_deep_style(&self) -> Style {
        self.pick(Style::new().fg(self.palette.depths), Style::new().dim())
    }

    /// Card background.
    pub fn background_style(&self) -> Style {
        self.pick(Style::new().bg(self.palette.surface), Style::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_parse() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no_color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!("mauve".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_colored_themes_set_foregrounds() {
        for t in [Theme::new(ThemeType::Dark), Theme::new(ThemeType::Light)] {
            assert!(t.title_style().fg.is_some());
            assert!(t.error_style().fg.is_some());
            assert!(t.water_style().fg.is_some());
        }
    }

    #[test]
    fn test_monochrome_styles_carry_no_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [
            t.title_style(),
            t.error_style(),
            t.link_style(),
            t.highlight_style(),
            t.water_style(),
        ] {
            // In no-color mode we rely on modifiers only, not fg/bg.
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }
}
