//! Presentational primitives
//!
//! Each primitive resolves its colors against a [`ColorScheme`] and
//! renders to a single block of text for the terminal.

use crate::theme::{ColorName, ColorOverrides, ColorScheme, theme_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// (vertical, horizontal) padding
    pub fn padding(&self) -> (u8, u8) {
        match self {
            ButtonSize::Small => (8, 16),
            ButtonSize::Medium => (12, 20),
            ButtonSize::Large => (16, 24),
        }
    }

    pub fn font_size(&self) -> u8 {
        match self {
            ButtonSize::Small => 14,
            ButtonSize::Medium => 16,
            ButtonSize::Large => 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub title: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub is_loading: bool,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            is_loading: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// A loading button swallows presses
    pub fn is_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn background(&self, scheme: ColorScheme) -> &'static str {
        let name = match self.variant {
            ButtonVariant::Primary => ColorName::Primary,
            ButtonVariant::Secondary => ColorName::Secondary,
            ButtonVariant::Danger => ColorName::Error,
            ButtonVariant::Outline => return "transparent",
        };
        theme_color(scheme, ColorOverrides::NONE, name)
    }

    pub fn text_color(&self, scheme: ColorScheme) -> &'static str {
        let name = match self.variant {
            ButtonVariant::Outline => ColorName::Text,
            _ => ColorName::White,
        };
        theme_color(scheme, ColorOverrides::NONE, name)
    }

    pub fn render(&self) -> String {
        if self.is_loading {
            "[ ... ]".to_string()
        } else {
            format!("[ {} ]", self.title)
        }
    }
}

/// Labelled text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub label: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub secure: bool,
}

impl Input {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn border_color(&self, scheme: ColorScheme) -> &'static str {
        let name = if self.error.is_some() { ColorName::Error } else { ColorName::Border };
        theme_color(scheme, ColorOverrides::NONE, name)
    }

    /// Text as displayed; secure fields are masked
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            return self.placeholder.clone().unwrap_or_default();
        }
        if self.secure {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(label) = &self.label {
            out.push_str(label);
            out.push_str(": ");
        }
        out.push_str(&self.display_value());
        if let Some(error) = &self.error {
            out.push_str("\n  ! ");
            out.push_str(error);
        }
        out
    }
}

/// Bordered container with an optional title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self) -> String {
        let width = self
            .title
            .iter()
            .chain(self.lines.iter())
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let rule = "─".repeat(width + 2);
        let mut out = format!("┌{}┐\n", rule);
        if let Some(title) = &self.title {
            out.push_str(&format!("│ {:<width$} │\n", title, width = width));
            out.push_str(&format!("├{}┤\n", rule));
        }
        for line in &self.lines {
            out.push_str(&format!("│ {:<width$} │\n", line, width = width));
        }
        out.push_str(&format!("└{}┘", rule));
        out
    }
}

/// Dashboard stat tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub icon_color: Option<&'static str>,
}

impl StatsCard {
    pub fn new(title: impl Into<String>, value: impl ToString) -> Self {
        Self {
            title: title.into(),
            value: value.to_string(),
            subtitle: None,
            icon_color: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn icon_color(mut self, color: &'static str) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn render(&self) -> String {
        let mut card = Card::titled(&self.title).line(&self.value);
        if let Some(subtitle) = &self.subtitle {
            card.push(subtitle);
        }
        card.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_colors_by_variant() {
        let outline = Button::new("Cancel").variant(ButtonVariant::Outline);
        assert_eq!(outline.background(ColorScheme::Light), "transparent");
        assert_eq!(outline.text_color(ColorScheme::Dark), "#F9FAFB");

        let danger = Button::new("Delete").variant(ButtonVariant::Danger);
        assert_eq!(danger.background(ColorScheme::Light), "#EF4444");
        assert_eq!(danger.text_color(ColorScheme::Light), "#FFFFFF");
    }

    #[test]
    fn test_loading_button_is_disabled() {
        let button = Button::new("Sign In").loading(true);
        assert!(!button.is_enabled());
        assert_eq!(button.render(), "[ ... ]");
        assert_eq!(ButtonSize::Large.padding(), (16, 24));
    }

    #[test]
    fn test_secure_input_is_masked() {
        let input = Input::new("Password").value("hunter2").secure();
        assert_eq!(input.display_value(), "•••••••");

        let input = Input::new("Email").placeholder("you@example.com");
        assert_eq!(input.display_value(), "you@example.com");
    }

    #[test]
    fn test_input_error_changes_border() {
        let input = Input::new("Price").error(Some("Please enter a valid price".into()));
        assert_eq!(input.border_color(ColorScheme::Light), "#EF4444");
        assert!(input.render().contains("Please enter a valid price"));
    }

    #[test]
    fn test_stats_card_render() {
        let out = StatsCard::new("Total Candies", 5).subtitle("in catalog").render();
        assert!(out.contains("Total Candies"));
        assert!(out.contains("│ 5"));
        assert!(out.contains("in catalog"));
    }
}
