pub mod converter;
pub mod diagram_parser;
pub mod diagram_writer;
pub mod error;
pub mod hierarchy;
pub mod parent_stack;
pub mod text_parser;
pub mod tree_renderer;

use serde::{Deserialize, Serialize};

/// Marker emitted in front of directory names in diagram and icon output.
pub const DIRECTORY_ICON: char = '📁';
/// Marker emitted in front of file names in diagram and icon output.
pub const FILE_ICON: char = '📄';

/// Icons accepted as an explicit directory marker when parsing.
pub(crate) const DIRECTORY_ICONS: &[char] = &['📁', '📂'];

/// Every icon stripped from a display name. Superset of the two markers we
/// emit, so hand-decorated input still yields a clean name.
pub(crate) const KNOWN_ICONS: &[char] = &[
    '📁', '📄', '📂', '📃', '📋', '📊', '📈', '📉', '📌', '📍', '📎', '📏', '📐', '📑', '📒',
    '📓', '📔', '📕', '📖', '📗', '📘', '📙', '📚', '📛', '📜', '📝',
];

/// One entry in a directory tree.
///
/// This is the shared contract between both conversion directions: the text
/// parser and the diagram parser both produce `TreeNode`s, the hierarchy
/// resolver populates `level`, `full_path` and `children`, and the renderer
/// consumes the finished forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Leaf display name, free of indentation glyphs, icons and separators.
    pub name: String,
    pub is_directory: bool,
    /// Depth from the node's root; roots sit at level 0.
    pub level: usize,
    /// Synthetic identifier, unique within one conversion pass only.
    pub id: String,
    /// `/`-joined ancestor chain from the root down to this node.
    pub full_path: String,
    /// Owned child nodes. Empty until the hierarchy resolver has run.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// A single parsed line of indented tree text, before any hierarchy exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub level: usize,
    pub name: String,
    pub is_directory: bool,
}

/// Output layout for rendering a resolved forest back into indented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeFormat {
    /// Classic box-drawing layout (`├── `, `└── `, `│   `).
    Connector,
    /// Fixed indentation with a directory/file icon per line.
    Icons,
}

/// What the lenient parsing stages tolerated and dropped.
///
/// Malformed statements, duplicate child claims and unreachable nodes do not
/// fail a conversion; callers that want strictness inspect this instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Edges discarded because the child was already claimed by another parent.
    pub dropped_edges: Vec<(String, String)>,
    /// Node ids never reached from any root.
    pub unreachable: Vec<String>,
}

impl Diagnostics {
    /// True when nothing was tolerated: every statement was well-formed and
    /// every node made it into the result.
    pub fn is_clean(&self) -> bool {
        self.dropped_edges.is_empty() && self.unreachable.is_empty()
    }
}

pub use converter::{DiagramConversion, DiagramToTree, TreeConversion, TreeToDiagram};
pub use diagram_parser::{DiagramParser, ParsedDiagram};
pub use diagram_writer::DiagramWriter;
pub use error::CoreError;
pub use hierarchy::HierarchyResolver;
pub use text_parser::{default_classification, ClassificationFn, LineHints, ParseOptions, TreeTextParser};
pub use tree_renderer::TreeRenderer;
