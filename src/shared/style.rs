// Global style variables consumed by the presentation layer

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::theme::ColorRole;

/// The three root variables the resolved colors are written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVariable {
    Background,
    Text,
    Accent,
}

impl StyleVariable {
    pub const ALL: [StyleVariable; 3] = [
        StyleVariable::Background,
        StyleVariable::Text,
        StyleVariable::Accent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleVariable::Background => "--bg-color",
            StyleVariable::Text => "--text-color",
            StyleVariable::Accent => "--accent-color",
        }
    }

    pub fn for_role(role: ColorRole) -> Self {
        match role {
            ColorRole::BackgroundColor => StyleVariable::Background,
            ColorRole::TextColor => StyleVariable::Text,
            ColorRole::AccentColor => StyleVariable::Accent,
        }
    }
}

/// Destination for style variable writes.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Root-level style variables, as read by the front-ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    properties: BTreeMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn color(&self, var: StyleVariable) -> Option<&str> {
        self.get(var.name())
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {}: {};", name, value);
        }
        css.push('}');
        css
    }
}

impl StyleSink for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }
}
