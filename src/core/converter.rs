//! The public conversion operations.
//!
//! Everything here is a pure function from input text to output text plus
//! node graph: no shared state, no I/O, safe to call concurrently. Failures
//! surface as [`CoreError`]; tolerated input is reported via
//! [`Diagnostics`] on the successful result.

use serde::Serialize;

use super::diagram_parser::DiagramParser;
use super::diagram_writer::DiagramWriter;
use super::error::CoreError;
use super::hierarchy::HierarchyResolver;
use super::text_parser::{ParseOptions, TreeTextParser};
use super::tree_renderer::TreeRenderer;
use super::{Diagnostics, TreeFormat, TreeNode};

/// Result of converting indented tree text into a diagram.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramConversion {
    /// The `graph TD` diagram text.
    pub diagram: String,
    /// Parsed nodes in source order, with text-derived levels and full
    /// paths. Children are not populated on this side of the conversion.
    pub nodes: Vec<TreeNode>,
    /// Always clean for this direction; present for a uniform result shape.
    pub diagnostics: Diagnostics,
}

/// Result of converting a diagram back into indented tree text.
#[derive(Debug, Clone, Serialize)]
pub struct TreeConversion {
    /// The rendered tree text in the requested layout.
    pub tree_text: String,
    /// The resolved forest, children populated, in declaration order.
    pub roots: Vec<TreeNode>,
    /// What the lenient diagram scan and resolution tolerated.
    pub diagnostics: Diagnostics,
}

impl TreeConversion {
    /// Flat `(level, full_path)`-ordered view of the forest, parents before
    /// children.
    pub fn flat_nodes(&self) -> Vec<&TreeNode> {
        HierarchyResolver::flat_view(&self.roots)
    }
}

/// Converts indented directory-tree text into a Mermaid flowchart.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TreeToDiagram;

impl TreeToDiagram {
    /// Converts tree text with default parse options.
    pub fn convert(tree_text: &str) -> Result<DiagramConversion, CoreError> {
        Self::convert_with(tree_text, &ParseOptions::default())
    }

    /// Converts tree text into a `graph TD` diagram.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyInput`] when the text is empty or whitespace-only,
    /// [`CoreError::NoValidNodes`] when no line yields a node.
    pub fn convert_with(
        tree_text: &str,
        options: &ParseOptions,
    ) -> Result<DiagramConversion, CoreError> {
        if tree_text.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let entries = TreeTextParser::parse_with(tree_text, options);
        if entries.is_empty() {
            return Err(CoreError::NoValidNodes);
        }

        let (diagram, nodes) = DiagramWriter::write(&entries);
        tracing::debug!("Converted {} entries into a diagram", nodes.len());

        Ok(DiagramConversion {
            diagram,
            nodes,
            diagnostics: Diagnostics::default(),
        })
    }
}

/// Converts a Mermaid flowchart back into indented directory-tree text.
///
/// This struct is stateless and provides methods as associated functions.
pub struct DiagramToTree;

impl DiagramToTree {
    /// Converts a diagram into the requested tree layout.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyInput`] when the diagram is empty or
    /// whitespace-only, [`CoreError::NoValidNodes`] when no statement
    /// matches the node or edge grammar.
    pub fn convert(diagram: &str, format: TreeFormat) -> Result<TreeConversion, CoreError> {
        if diagram.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let parsed = DiagramParser::parse(diagram);
        if parsed.nodes.is_empty() {
            return Err(CoreError::NoValidNodes);
        }

        let (roots, diagnostics) = HierarchyResolver::resolve(parsed);
        let tree_text = TreeRenderer::render(&roots, format);

        Ok(TreeConversion {
            tree_text,
            roots,
            diagnostics,
        })
    }

    /// Convenience wrapper for the plain-connector layout.
    pub fn to_connector_tree(diagram: &str) -> Result<TreeConversion, CoreError> {
        Self::convert(diagram, TreeFormat::Connector)
    }

    /// Convenience wrapper for the icon layout.
    pub fn to_icon_tree(diagram: &str) -> Result<TreeConversion, CoreError> {
        Self::convert(diagram, TreeFormat::Icons)
    }
}
