//! Languages understood by PMD's Copy/Paste Detector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A CPD `--language` value.
///
/// The well-known languages are named variants; anything else is passed
/// through to PMD verbatim so newer PMD releases keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Cpp,
    Cs,
    #[default]
    Java,
    Php,
    Ruby,
    Ecmascript,
    Other(String),
}

impl Language {
    /// The name PMD expects on its command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpp => "cpp",
            Self::Cs => "cs",
            Self::Java => "java",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Ecmascript => "ecmascript",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("language must not be empty".to_string());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!("invalid language: {trimmed}"));
        }
        Ok(match trimmed.to_lowercase().as_str() {
            "cpp" | "c++" => Self::Cpp,
            "cs" | "c#" => Self::Cs,
            "java" => Self::Java,
            "php" => Self::Php,
            "ruby" => Self::Ruby,
            "ecmascript" | "javascript" | "js" => Self::Ecmascript,
            other => Self::Other(other.to_string()),
        })
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_java() {
        assert_eq!(Language::default(), Language::Java);
    }

    #[test]
    fn parses_known_languages_case_insensitively() {
        assert_eq!("ECMAScript".parse::<Language>().unwrap(), Language::Ecmascript);
        assert_eq!("cs".parse::<Language>().unwrap(), Language::Cs);
        assert_eq!("Ruby".parse::<Language>().unwrap(), Language::Ruby);
    }

    #[test]
    fn aliases_map_to_pmd_names() {
        assert_eq!("js".parse::<Language>().unwrap().as_str(), "ecmascript");
        assert_eq!("c++".parse::<Language>().unwrap().as_str(), "cpp");
    }

    #[test]
    fn unknown_language_passes_through() {
        let lang: Language = "kotlin".parse().unwrap();
        assert_eq!(lang, Language::Other("kotlin".to_string()));
        assert_eq!(lang.to_string(), "kotlin");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!("".parse::<Language>().is_err());
        assert!("java script".parse::<Language>().is_err());
    }

    #[test]
    fn serde_uses_pmd_name() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str("language = \"PHP\"").unwrap();
        assert_eq!(parsed.language, Language::Php);
        let out = toml::to_string(&parsed).unwrap();
        assert_eq!(out.trim(), "language = \"php\"");
    }
}
