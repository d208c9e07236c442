//! Parses free-form indented tree text into a flat, level-annotated
//! entry sequence.
//!
//! Input lines may be decorated with arbitrary mixtures of spaces, tabs and
//! tree-drawing glyphs, as produced by `tree`-style tools, editors, or this
//! crate's own renderer. The parser only extracts `(level, name, kind)`;
//! hierarchy reconstruction happens downstream.

use super::{TreeEntry, DIRECTORY_ICONS, KNOWN_ICONS};

/// What a raw line revealed about an entry before classification ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineHints {
    /// A directory icon (📁/📂) prefixed the name.
    pub had_directory_icon: bool,
    /// A non-directory icon prefixed the name.
    pub had_file_icon: bool,
    /// The name carried a trailing `/` or `\`.
    pub had_trailing_separator: bool,
}

/// Decides whether a stripped name denotes a directory.
pub type ClassificationFn = fn(name: &str, hints: LineHints) -> bool;

/// The default directory/file heuristic.
///
/// Explicit markers always win. An unmarked name is assumed to be a
/// directory when it has no extension-like `.` suffix.
pub fn default_classification(name: &str, hints: LineHints) -> bool {
    if hints.had_directory_icon || hints.had_trailing_separator {
        return true;
    }
    if hints.had_file_icon {
        return false;
    }
    !name.contains('.')
}

/// Tuning knobs for the indented-text parser.
#[derive(Clone, Copy)]
pub struct ParseOptions {
    /// Filler characters per indentation level. A tab always counts as one
    /// full level regardless of this width.
    pub indent_width: usize,
    /// Directory/file classification policy applied to each stripped name.
    pub classify: ClassificationFn,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            classify: default_classification,
        }
    }
}

impl std::fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("indent_width", &self.indent_width)
            .finish_non_exhaustive()
    }
}

/// A utility struct for parsing indented tree text.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TreeTextParser;

impl TreeTextParser {
    /// Parses tree text with default options.
    pub fn parse(text: &str) -> Vec<TreeEntry> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses tree text into entries in source order.
    ///
    /// Source order is significant: it is the depth-first pre-order used for
    /// parent-stack reconstruction by the diagram writer. Blank lines and
    /// lines that reduce to an empty name are discarded.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Vec<TreeEntry> {
        let mut entries = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let (level, raw_name) = Self::split_indentation(line, options.indent_width);
            let (name, hints) = Self::strip_decoration(raw_name);

            if name.is_empty() {
                tracing::debug!("Discarding decoration-only line: {:?}", line);
                continue;
            }

            let is_directory = (options.classify)(&name, hints);
            entries.push(TreeEntry {
                level,
                name,
                is_directory,
            });
        }

        entries
    }

    /// Computes the indentation level of a line and returns the remainder.
    ///
    /// The leading run of filler characters is measured in widths: a tab is
    /// one full indentation unit, every other filler character is width 1.
    fn split_indentation(line: &str, indent_width: usize) -> (usize, &str) {
        let indent_width = indent_width.max(1);
        let mut width = 0;
        let mut name_start = line.len();

        for (idx, c) in line.char_indices() {
            if c == '\t' {
                width += indent_width;
            } else if Self::is_filler(c) {
                width += 1;
            } else {
                name_start = idx;
                break;
            }
        }

        (width / indent_width, line[name_start..].trim())
    }

    /// Strips one optional leading icon and any trailing path separators,
    /// recording what was found for the classification policy.
    fn strip_decoration(raw_name: &str) -> (String, LineHints) {
        let mut hints = LineHints::default();
        let mut name = raw_name;

        if let Some(first) = name.chars().next() {
            if KNOWN_ICONS.contains(&first) {
                if DIRECTORY_ICONS.contains(&first) {
                    hints.had_directory_icon = true;
                } else {
                    hints.had_file_icon = true;
                }
                name = name[first.len_utf8()..].trim_start();
            }
        }

        let stripped = name.trim_end_matches(['/', '\\']);
        if stripped.len() != name.len() {
            hints.had_trailing_separator = true;
        }

        (stripped.trim_end().to_string(), hints)
    }

    /// Indentation filler: whitespace, box-drawing glyphs, and the loose
    /// ASCII decoration some tools emit (`-`, `|`, `+`, backticks, `*`, `/`, `\`).
    fn is_filler(c: char) -> bool {
        c.is_whitespace()
            || ('\u{2500}'..='\u{257F}').contains(&c)
            || matches!(c, '-' | '|' | '+' | '`' | '\'' | '*' | '/' | '\\')
    }
}
