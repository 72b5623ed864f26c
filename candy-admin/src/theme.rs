//! Color scheme and semantic color lookup

use std::fmt;
use std::str::FromStr;

use shared::models::{EventType, OrderStatus, UserRole};
use shared::AppError;

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(AppError::config(format!("Invalid color scheme: {}", other))),
        }
    }
}

/// Semantic color names shared by both palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Text,
    Background,
    Card,
    Border,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Gray,
    White,
}

/// Per-call color overrides; the entry for the active scheme wins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub light: Option<&'static str>,
    pub dark: Option<&'static str>,
}

impl ColorOverrides {
    pub const NONE: ColorOverrides = ColorOverrides { light: None, dark: None };

    fn for_scheme(&self, scheme: ColorScheme) -> Option<&'static str> {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}

fn palette(scheme: ColorScheme, name: ColorName) -> &'static str {
    use ColorName::*;
    match (scheme, name) {
        (ColorScheme::Light, Text) => "#1F2937",
        (ColorScheme::Light, Background) => "#F9FAFB",
        (ColorScheme::Light, Card) => "#FFFFFF",
        (ColorScheme::Light, Border) => "#E5E7EB",
        (ColorScheme::Light, Gray) => "#6B7280",
        (ColorScheme::Dark, Text) => "#F9FAFB",
        (ColorScheme::Dark, Background) => "#111827",
        (ColorScheme::Dark, Card) => "#1F2937",
        (ColorScheme::Dark, Border) => "#374151",
        (ColorScheme::Dark, Gray) => "#9CA3AF",
        (_, Primary) => "#A37BED",
        (_, Secondary) => "#F97316",
        (_, Success) => "#4CAF50",
        (_, Warning) => "#F59E0B",
        (_, Error) => "#EF4444",
        (_, Info) => "#3B82F6",
        (_, White) => "#FFFFFF",
    }
}

/// Resolve a semantic color for the given scheme
pub fn theme_color(scheme: ColorScheme, overrides: ColorOverrides, name: ColorName) -> &'static str {
    overrides.for_scheme(scheme).unwrap_or_else(|| palette(scheme, name))
}

pub fn event_type_color(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Cultural => "#A37BED",
        EventType::Seasonal => "#F97316",
        EventType::Holiday => "#3B82F6",
    }
}

pub fn order_status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "#F97316",
        OrderStatus::Processing => "#3B82F6",
        OrderStatus::Shipped => "#A37BED",
        OrderStatus::Delivered => "#4CAF50",
        OrderStatus::Cancelled => "#EF4444",
    }
}

pub fn role_color(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "#A37BED",
        UserRole::Manager => "#3B82F6",
        UserRole::Staff => "#4CAF50",
    }
}

/// Append a two-digit hex alpha to a `#RRGGBB` color (badge backgrounds)
pub fn with_alpha(hex: &str, alpha: u8) -> String {
    format!("{}{:02X}", hex, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_for_active_scheme_wins() {
        let overrides = ColorOverrides {
            light: Some("#000000"),
            dark: None,
        };
        assert_eq!(theme_color(ColorScheme::Light, overrides, ColorName::Text), "#000000");
        assert_eq!(theme_color(ColorScheme::Dark, overrides, ColorName::Text), "#F9FAFB");
    }

    #[test]
    fn test_palettes_differ_for_surfaces() {
        for name in [ColorName::Text, ColorName::Background, ColorName::Card, ColorName::Border] {
            assert_ne!(
                theme_color(ColorScheme::Light, ColorOverrides::NONE, name),
                theme_color(ColorScheme::Dark, ColorOverrides::NONE, name)
            );
        }
        assert_eq!(
            theme_color(ColorScheme::Light, ColorOverrides::NONE, ColorName::Primary),
            theme_color(ColorScheme::Dark, ColorOverrides::NONE, ColorName::Primary)
        );
    }

    #[test]
    fn test_accent_tables() {
        assert_eq!(event_type_color(EventType::Seasonal), "#F97316");
        assert_eq!(order_status_color(OrderStatus::Cancelled), "#EF4444");
        assert_eq!(role_color(UserRole::Staff), "#4CAF50");
        assert_eq!(with_alpha("#A37BED", 0x20), "#A37BED20");
        assert_eq!("Dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
    }
}
