//! Language preference and the widget's localized strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Bulgarian => "bg",
            Language::English => "en",
        }
    }

    /// Resolve a stored code. Absent or unrecognized codes fall back to `default`.
    pub fn resolve(code: Option<&str>, default: Language) -> Language {
        code.and_then(|c| c.parse().ok()).unwrap_or(default)
    }

    /// Text shown when there is nothing left to do.
    pub fn empty_text(self) -> &'static str {
        match self {
            Language::Bulgarian => "Всичко е наред!",
            Language::English => "All done!",
        }
    }

    /// Widget title for `count` pending tasks.
    ///
    /// Each language picks its own singular/plural form.
    pub fn count_title(self, count: usize) -> String {
        match (self, count) {
            (Language::Bulgarian, 1) => "1 задача за деня".to_string(),
            (Language::Bulgarian, n) => format!("{n} задачи за деня"),
            (Language::English, 1) => "1 task for today".to_string(),
            (Language::English, n) => format!("{n} tasks for today"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bg" => Ok(Language::Bulgarian),
            "en" => Ok(Language::English),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Language::Bulgarian)]
    #[case(Some("en"), Language::English)]
    #[case(Some("EN "), Language::English)]
    #[case(Some("bg"), Language::Bulgarian)]
    #[case(Some("de"), Language::Bulgarian)]
    #[case(Some(""), Language::Bulgarian)]
    fn resolve_falls_back_to_default(#[case] code: Option<&str>, #[case] expected: Language) {
        assert_eq!(Language::resolve(code, Language::Bulgarian), expected);
    }

    #[rstest]
    #[case(Language::English, 1, "1 task for today")]
    #[case(Language::English, 2, "2 tasks for today")]
    #[case(Language::English, 5, "5 tasks for today")]
    #[case(Language::Bulgarian, 1, "1 задача за деня")]
    #[case(Language::Bulgarian, 4, "4 задачи за деня")]
    fn count_title_is_pluralized_per_language(
        #[case] lang: Language,
        #[case] count: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(lang.count_title(count), expected);
    }
}
