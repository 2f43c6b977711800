use std::collections::HashMap;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

use super::StyleRole;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
}

impl ThemeName {
    pub fn parse(s: &str) -> Option<ThemeName> {
        return ThemeName::iter().find(|e| e.to_string() == s);
    }
}

/// Concrete styles for each [`StyleRole`].
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    styles: HashMap<StyleRole, Style>,
}

impl Default for Theme {
    fn default() -> Theme {
        return Theme::get(ThemeName::Default);
    }
}

impl Theme {
    pub fn get(name: ThemeName) -> Theme {
        let styles = match name {
            ThemeName::Default => HashMap::from([
                (StyleRole::XAxis, Style::default().fg(Color::Gray)),
                (
                    StyleRole::XTickLabel,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                (StyleRole::XTickSpacing, Style::default()),
            ]),
            ThemeName::Monochrome => HashMap::new(),
        };

        return Theme { styles };
    }

    pub fn style(&self, role: Option<StyleRole>) -> Style {
        return role
            .and_then(|role| self.styles.get(&role).copied())
            .unwrap_or_default();
    }
}
