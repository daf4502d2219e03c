//! Result types for a classified lint report.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// What the classifier did with a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming.
    Blank,
    /// A path line; it became the current file.
    Path,
    /// Attributed the current file to a category.
    Marker(Category),
    /// Seen before any path line, so ignored.
    Orphan,
    /// Had a current file but no marker.
    Unmatched,
}

/// Files grouped by category, as produced by a full scan.
///
/// Each category holds a sorted, duplicate-free set of paths. All three
/// categories are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Paths per category.
    pub categories: BTreeMap<Category, BTreeSet<String>>,
    /// Number of lines read, blank lines included.
    pub lines_read: usize,
    /// Number of path lines encountered (repeats counted).
    pub files_seen: usize,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            categories: Category::ALL
                .into_iter()
                .map(|category| (category, BTreeSet::new()))
                .collect(),
            lines_read: 0,
            files_seen: 0,
        }
    }
}

impl Classification {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `file` under `category`. Returns false if it was already there.
    pub fn insert(&mut self, category: Category, file: impl Into<String>) -> bool {
        self.categories
            .entry(category)
            .or_default()
            .insert(file.into())
    }

    /// Files in `category`, in ascending order.
    pub fn files(&self, category: Category) -> impl Iterator<Item = &str> {
        self.categories
            .get(&category)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Number of files in `category`.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, BTreeSet::len)
    }

    /// Returns true if no category holds any file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeSet::is_empty)
    }

    /// Sum of entries across categories. A file listed in two categories
    /// counts twice.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }

    /// Renders the three-section text report.
    ///
    /// Sections appear in [`Category::ALL`] order, each a header followed by
    /// one path per line, with a blank line between sections.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        for (index, category) in Category::ALL.into_iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(category.header());
            output.push('\n');
            for file in self.files(category) {
                output.push_str(file);
                output.push('\n');
            }
        }
        output
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_all_categories_empty() {
        let result = Classification::new();
        assert!(result.is_empty());
        assert_eq!(result.categories.len(), 3);
        for category in Category::ALL {
            assert_eq!(result.len(category), 0);
        }
    }

    #[test]
    fn insert_collapses_duplicates() {
        let mut result = Classification::new();
        assert!(result.insert(Category::UnusedVars, "src/a.ts"));
        assert!(!result.insert(Category::UnusedVars, "src/a.ts"));
        assert_eq!(result.len(Category::UnusedVars), 1);
    }

    #[test]
    fn files_are_sorted() {
        let mut result = Classification::new();
        result.insert(Category::ExplicitAny, "src/z.ts");
        result.insert(Category::ExplicitAny, "src/B.ts");
        result.insert(Category::ExplicitAny, "src/a.ts");
        let files: Vec<&str> = result.files(Category::ExplicitAny).collect();
        assert_eq!(files, ["src/B.ts", "src/a.ts", "src/z.ts"]);
    }

    #[test]
    fn total_entries_counts_each_category() {
        let mut result = Classification::new();
        result.insert(Category::UnusedVars, "src/a.ts");
        result.insert(Category::ExplicitAny, "src/a.ts");
        assert_eq!(result.total_entries(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn render_empty() {
        insta::assert_snapshot!(Classification::new().render_text(), @r"
        Files with unescaped entities:

        Files with unused variables:

        Files with explicit any:
        ");
    }

    #[test]
    fn render_populated() {
        let mut result = Classification::new();
        result.insert(Category::UnescapedEntities, "src/App.tsx");
        result.insert(Category::UnusedVars, "src/b.ts");
        result.insert(Category::UnusedVars, "src/a.ts");

        insta::assert_snapshot!(result.to_string(), @r"
        Files with unescaped entities:
        src/App.tsx

        Files with unused variables:
        src/a.ts
        src/b.ts

        Files with explicit any:
        ");
    }

    #[test]
    fn serializes_with_kebab_case_keys() {
        let mut result = Classification::new();
        result.insert(Category::ExplicitAny, "src/a.ts");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["categories"]["explicit-any"][0], "src/a.ts");
        assert!(json["categories"]["unused-vars"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(json["lines_read"], 0);
    }
}
