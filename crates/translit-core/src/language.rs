use std::fmt;

use serde::Serialize;

/// Writing system of the source text for a language choice.
///
/// Cyrillic text is rendered into Latin through the Cyrillic tables; Latin
/// text is respelled through the Latin language tables only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Cyrillic,
    Latin,
}

impl Script {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cyrillic" => Some(Self::Cyrillic),
            "latin" => Some(Self::Latin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cyrillic => "cyrillic",
            Self::Latin => "latin",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable language. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub id: String,
    pub script: Script,
    pub description: String,
}

impl LanguageDescriptor {
    pub fn new(id: impl Into<String>, script: Script, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            script,
            description: description.into(),
        }
    }
}

impl fmt::Display for LanguageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.script)
    }
}
