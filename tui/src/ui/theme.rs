use ratatui::style::{Color, Modifier, Style};
use valuation::map::MARKER_RGB;

/// Gold-on-dark theme.
///
/// Base aesthetic:
/// - gold foreground over a near-black backdrop
/// - white headings, light grey labels
/// - warm coral/amber price card, lime action and marker
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(12, 12, 12);
    pub const FG_GOLD: Color = Color::Rgb(255, 215, 0);
    pub const FG_WHITE: Color = Color::Rgb(255, 255, 255);
    pub const FG_LABEL: Color = Color::Rgb(220, 220, 220);
    pub const FG_MUTED: Color = Color::Rgb(110, 110, 110);

    // Accents
    pub const ACCENT_LIME: Color = Color::Rgb(50, 205, 50);
    pub const ACCENT_CORAL: Color = Color::Rgb(255, 111, 97);
    pub const ACCENT_AMBER: Color = Color::Rgb(247, 183, 49);
    pub const ACCENT_RED: Color = Color::Rgb(255, 69, 0);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_GOLD).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_GOLD).bg(Self::BG)
    }

    /// Titles (bold white).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Input labels.
    pub fn label() -> Style {
        Style::default()
            .fg(Self::FG_LABEL)
            .add_modifier(Modifier::BOLD)
    }

    /// Input values.
    pub fn value() -> Style {
        Style::default().fg(Self::FG_GOLD)
    }

    /// Muted/hint text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Focused row.
    pub fn focused() -> Style {
        Style::default()
            .bg(Color::Rgb(40, 34, 0))
            .add_modifier(Modifier::BOLD)
    }

    /// The predict button, idle.
    pub fn button() -> Style {
        Style::default().fg(Self::FG_WHITE).bg(Color::Rgb(30, 110, 30))
    }

    /// The predict button, focused.
    pub fn button_focused() -> Style {
        Style::default()
            .fg(Self::FG_WHITE)
            .bg(Self::ACCENT_LIME)
            .add_modifier(Modifier::BOLD)
    }

    /// Price card frame.
    pub fn card_border() -> Style {
        Style::default().fg(Self::ACCENT_CORAL)
    }

    /// Price card text.
    pub fn card_text() -> Style {
        Style::default()
            .fg(Self::FG_WHITE)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn marker() -> Color {
        let (r, g, b) = MARKER_RGB;
        Color::Rgb(r, g, b)
    }

    pub fn coastline() -> Color {
        Self::FG_MUTED
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_matches_the_button_accent() {
        assert_eq!(Theme::marker(), Color::Rgb(50, 205, 50));
        assert_eq!(Theme::marker(), Theme::ACCENT_LIME);
    }
}
