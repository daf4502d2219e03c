//! Issue categories and the path-line detector.
//!
//! A category is identified in a report line by a fixed marker substring
//! (the lint rule id). When several markers occur on one line, the first
//! category in [`Category::ALL`] wins.

use serde::{Deserialize, Serialize};

/// File suffixes that make a trimmed line a path line.
pub const PATH_SUFFIXES: &[&str] = &[".ts", ".tsx", ".js", ".jsx"];

/// Issue category a file can be grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `react/no-unescaped-entities`
    UnescapedEntities,
    /// `no-unused-vars`
    UnusedVars,
    /// `no-explicit-any`
    ExplicitAny,
}

impl Category {
    /// All categories, in match priority and output order.
    pub const ALL: [Self; 3] = [Self::UnescapedEntities, Self::UnusedVars, Self::ExplicitAny];

    /// Rule id substring that marks a line as belonging to this category.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::UnescapedEntities => "react/no-unescaped-entities",
            Self::UnusedVars => "no-unused-vars",
            Self::ExplicitAny => "no-explicit-any",
        }
    }

    /// Section header used in text output.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::UnescapedEntities => "Files with unescaped entities:",
            Self::UnusedVars => "Files with unused variables:",
            Self::ExplicitAny => "Files with explicit any:",
        }
    }

    /// Short kebab-case name (e.g., "unused-vars").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnescapedEntities => "unescaped-entities",
            Self::UnusedVars => "unused-vars",
            Self::ExplicitAny => "explicit-any",
        }
    }

    /// Returns the highest-priority category whose marker occurs in `line`.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| line.contains(category.marker()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if the already-trimmed `line` names a source file.
#[must_use]
pub fn is_path_line(line: &str) -> bool {
    PATH_SUFFIXES.iter().any(|suffix| line.ends_with(suffix))
}
