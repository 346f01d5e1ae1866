use ratatui::style::Color;

/// Colors for the two panes and the speed badge
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub border: Color,
    pub badge: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            title: Color::Rgb(192, 202, 245),   // #C0CAF5
            border: Color::Rgb(86, 95, 137),    // #565F89 Gray
            badge: Color::Rgb(247, 118, 142),   // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn title() -> Color {
        Theme::current().title
    }
    pub fn border() -> Color {
        Theme::current().border
    }
    pub fn badge() -> Color {
        Theme::current().badge
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
