use serde::{Deserialize, Serialize};

use super::chat_color::{ChatColor, COLOR_CHAR};

/// Structured rich text, serialized as chat JSON on generations that
/// support it. Children in `extra` inherit the style of their parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ChatColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Component>,
}

// Resolved style while flattening a component tree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Style {
    color: Option<ChatColor>,
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
    obfuscated: bool,
}

impl Style {
    fn inherit(&self, component: &Component) -> Self {
        Self {
            color: component.color.or(self.color),
            bold: component.bold.unwrap_or(self.bold),
            italic: component.italic.unwrap_or(self.italic),
            underlined: component.underlined.unwrap_or(self.underlined),
            strikethrough: component.strikethrough.unwrap_or(self.strikethrough),
            obfuscated: component.obfuscated.unwrap_or(self.obfuscated),
        }
    }

    // Same color with a superset of formats: only the new formats need emitting
    fn extends(&self, base: &Style) -> bool {
        self.color == base.color
            && (self.bold || !base.bold)
            && (self.italic || !base.italic)
            && (self.underlined || !base.underlined)
            && (self.strikethrough || !base.strikethrough)
            && (self.obfuscated || !base.obfuscated)
    }

    fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    fn formats(&self) -> impl Iterator<Item = ChatColor> {
        [
            (self.obfuscated, ChatColor::Obfuscated),
            (self.bold, ChatColor::Bold),
            (self.strikethrough, ChatColor::Strikethrough),
            (self.underlined, ChatColor::Underline),
            (self.italic, ChatColor::Italic),
        ]
        .into_iter()
        .filter_map(|(enabled, code)| enabled.then_some(code))
    }

    fn apply(&mut self, code: ChatColor) {
        match code {
            ChatColor::Reset => *self = Style::default(),
            ChatColor::Obfuscated => self.obfuscated = true,
            ChatColor::Bold => self.bold = true,
            ChatColor::Strikethrough => self.strikethrough = true,
            ChatColor::Underline => self.underlined = true,
            ChatColor::Italic => self.italic = true,
            color => {
                *self = Style {
                    color: Some(color),
                    ..Style::default()
                }
            }
        }
    }

    fn to_component(self, text: String) -> Component {
        let flag = |enabled: bool| enabled.then_some(true);
        Component {
            text,
            color: self.color,
            bold: flag(self.bold),
            italic: flag(self.italic),
            underlined: flag(self.underlined),
            strikethrough: flag(self.strikethrough),
            obfuscated: flag(self.obfuscated),
            extra: Vec::new(),
        }
    }
}

impl Component {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ChatColor) -> Self {
        if color.is_color() {
            self.color = Some(color);
        }
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn append(mut self, child: Component) -> Self {
        self.extra.push(child);
        self
    }

    /// True when neither this node nor any child carries text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.extra.iter().all(Component::is_empty)
    }

    /// Parses a section-coded string into a flat component tree. Each run
    /// of text between codes becomes one child carrying the style in effect.
    pub fn from_legacy(text: &str) -> Self {
        let mut children = Vec::new();
        let mut style = Style::default();
        let mut current = String::new();

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == COLOR_CHAR {
                if let Some(code) = chars.peek().and_then(|next| ChatColor::by_char(*next)) {
                    chars.next();
                    if !current.is_empty() {
                        children.push(style.to_component(std::mem::take(&mut current)));
                    }
                    style.apply(code);
                    continue;
                }
            }
            current.push(c);
        }
        if !current.is_empty() {
            children.push(style.to_component(current));
        }

        match children.len() {
            0 => Self::empty(),
            1 => children.remove(0),
            _ => Self {
                extra: children,
                ..Self::default()
            },
        }
    }

    /// Flattens the tree back into a section-coded string
    pub fn to_legacy(&self) -> String {
        let mut output = String::new();
        let mut emitted = Style::default();
        self.write_legacy(&Style::default(), &mut emitted, &mut output);
        output
    }

    fn write_legacy(&self, inherited: &Style, emitted: &mut Style, output: &mut String) {
        let style = inherited.inherit(self);
        if !self.text.is_empty() {
            if style != *emitted {
                if style.extends(emitted) {
                    let already: Vec<ChatColor> = emitted.formats().collect();
                    for format in style.formats().filter(|format| !already.contains(format)) {
                        output.push_str(&format.to_string());
                    }
                } else {
                    match style.color {
                        Some(color) => output.push_str(&color.to_string()),
                        None if !emitted.is_plain() => {
                            output.push_str(&ChatColor::Reset.to_string())
                        }
                        None => {}
                    }
                    for format in style.formats() {
                        output.push_str(&format.to_string());
                    }
                }
                *emitted = style;
            }
            output.push_str(&self.text);
        }
        for child in &self.extra {
            child.write_legacy(&style, emitted, output);
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}
