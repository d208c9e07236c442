//! Scans diagram text into a node map and an accepted edge list.
//!
//! Parsing is tolerant: header lines are skipped wherever they appear, and
//! lines matching neither grammar are ignored rather than aborting the scan.

use std::collections::HashMap;

use regex::Regex;

use super::{Diagnostics, TreeNode, DIRECTORY_ICONS, KNOWN_ICONS};

/// Edge statement: `parentId --> childId["display"]`.
const EDGE_PATTERN: &str = r#"(\w+)\s*-->\s*(\w+)\["([^"]+)"\]"#;
/// Bare node declaration: `id["display"]`.
const NODE_PATTERN: &str = r#"(\w+)\["([^"]+)"\]"#;

/// Outcome of scanning one diagram. Levels, full paths and children are not
/// resolved yet; that is the hierarchy resolver's job.
#[derive(Debug, Default)]
pub struct ParsedDiagram {
    /// Declared nodes by id.
    pub nodes: HashMap<String, TreeNode>,
    /// Ids in first-declaration order, so root traversal stays deterministic.
    pub order: Vec<String>,
    /// Accepted parent→child edges in statement order.
    pub edges: Vec<(String, String)>,
    /// Edges dropped during the scan.
    pub diagnostics: Diagnostics,
}

/// A utility struct for scanning diagram text.
///
/// This struct is stateless and provides methods as associated functions.
pub struct DiagramParser;

impl DiagramParser {
    /// Scans diagram statements into nodes and edges.
    ///
    /// The first declaration or edge that introduces an id fixes its name and
    /// kind; later references are link-only. A child claimed by a second
    /// parent keeps its first parent and the later edge is dropped into the
    /// diagnostics.
    pub fn parse(diagram: &str) -> ParsedDiagram {
        // Compiled per call so concurrent conversions share no state.
        let (edge_re, node_re) = match (Regex::new(EDGE_PATTERN), Regex::new(NODE_PATTERN)) {
            (Ok(edge_re), Ok(node_re)) => (edge_re, node_re),
            _ => {
                tracing::error!("Failed to compile diagram grammar patterns");
                return ParsedDiagram::default();
            }
        };

        let mut parsed = ParsedDiagram::default();
        let mut claimed_by: HashMap<String, String> = HashMap::new();

        for line in diagram.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.starts_with("graph")
                || trimmed.starts_with("flowchart")
            {
                continue;
            }

            if let Some(caps) = edge_re.captures(trimmed) {
                let parent_id = &caps[1];
                let child_id = &caps[2];
                Self::declare(&mut parsed, child_id, &caps[3]);

                if let Some(first_parent) = claimed_by.get(child_id) {
                    tracing::warn!(
                        "Dropping edge {} --> {}: child already claimed by {}",
                        parent_id,
                        child_id,
                        first_parent
                    );
                    parsed
                        .diagnostics
                        .dropped_edges
                        .push((parent_id.to_string(), child_id.to_string()));
                } else {
                    claimed_by.insert(child_id.to_string(), parent_id.to_string());
                    parsed
                        .edges
                        .push((parent_id.to_string(), child_id.to_string()));
                }
            } else if let Some(caps) = node_re.captures(trimmed) {
                Self::declare(&mut parsed, &caps[1], &caps[2]);
            } else {
                tracing::debug!("Skipping unrecognized diagram line: {:?}", trimmed);
            }
        }

        parsed
    }

    /// Registers a node the first time its id appears.
    fn declare(parsed: &mut ParsedDiagram, id: &str, display: &str) {
        if parsed.nodes.contains_key(id) {
            return;
        }

        let is_directory = display.trim_start().starts_with(DIRECTORY_ICONS);
        parsed.nodes.insert(
            id.to_string(),
            TreeNode {
                name: Self::display_name(display),
                is_directory,
                level: 0,
                id: id.to_string(),
                full_path: String::new(),
                children: Vec::new(),
            },
        );
        parsed.order.push(id.to_string());
    }

    /// Strips one leading icon glyph and surrounding whitespace from the
    /// quoted display text.
    fn display_name(display: &str) -> String {
        let trimmed = display.trim();
        match trimmed.chars().next() {
            Some(first) if KNOWN_ICONS.contains(&first) => {
                trimmed[first.len_utf8()..].trim().to_string()
            }
            _ => trimmed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declarations_and_edges() {
        let diagram = "graph TD\n    node1[\"📁 project\"]\n    node1 --> node2[\"📄 README.md\"]\n";
        let parsed = DiagramParser::parse(diagram);

        assert_eq!(parsed.order, vec!["node1", "node2"]);
        assert_eq!(parsed.edges, vec![("node1".to_string(), "node2".to_string())]);

        let root = &parsed.nodes["node1"];
        assert_eq!(root.name, "project");
        assert!(root.is_directory);

        let child = &parsed.nodes["node2"];
        assert_eq!(child.name, "README.md");
        assert!(!child.is_directory);
    }

    #[test]
    fn test_first_declaration_fixes_name_and_kind() {
        let diagram = "graph TD\n    a[\"📁 first\"]\n    a[\"📄 second\"]\n";
        let parsed = DiagramParser::parse(diagram);

        assert_eq!(parsed.order, vec!["a"]);
        assert_eq!(parsed.nodes["a"].name, "first");
        assert!(parsed.nodes["a"].is_directory);
    }

    #[test]
    fn test_duplicate_child_claim_keeps_first_parent() {
        let diagram = "graph TD\n    p1[\"📁 p1\"]\n    p2[\"📁 p2\"]\n    p1 --> c[\"📄 c.txt\"]\n    p2 --> c[\"📄 c.txt\"]\n";
        let parsed = DiagramParser::parse(diagram);

        assert_eq!(parsed.edges, vec![("p1".to_string(), "c".to_string())]);
        assert_eq!(
            parsed.diagnostics.dropped_edges,
            vec![("p2".to_string(), "c".to_string())]
        );
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let diagram = "graph TD\n    %% a comment\n    classDef default fill:#fff\n    n1[\"📁 kept\"]\n";
        let parsed = DiagramParser::parse(diagram);

        assert_eq!(parsed.order, vec!["n1"]);
        assert!(parsed.edges.is_empty());
    }

    #[test]
    fn test_headerless_diagram_keeps_first_statement() {
        let parsed = DiagramParser::parse("n1[\"📁 root\"]\nn1 --> n2[\"📄 a.txt\"]\n");
        assert_eq!(parsed.order, vec!["n1", "n2"]);
    }

    #[test]
    fn test_flowchart_header_is_skipped() {
        let parsed = DiagramParser::parse("flowchart TD\n    n1[\"📁 root\"]\n");
        assert_eq!(parsed.order, vec!["n1"]);
    }

    #[test]
    fn test_display_without_icon_is_a_file() {
        let parsed = DiagramParser::parse("graph TD\n    n1[\"plain\"]\n    n2[\"📂 open folder\"]\n");
        assert!(!parsed.nodes["n1"].is_directory);
        assert_eq!(parsed.nodes["n1"].name, "plain");
        assert!(parsed.nodes["n2"].is_directory);
        assert_eq!(parsed.nodes["n2"].name, "open folder");
    }
}
