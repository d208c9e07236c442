//! Renders a resolved forest back into indented tree text.

use std::cmp::Ordering;

use super::{TreeFormat, TreeNode, DIRECTORY_ICON, FILE_ICON};

/// Spaces per level in icon mode. Matches the parser's default indentation
/// unit, so icon output re-parses to the same levels.
const ICON_INDENT: &str = "    ";

/// A utility struct for rendering a resolved forest as indented text.
///
/// This struct is stateless and provides methods as associated functions.
pub struct TreeRenderer;

impl TreeRenderer {
    /// Renders the forest in the requested layout.
    ///
    /// Sibling order is deterministic at every level, roots included:
    /// directories before files, then lexicographic by name.
    pub fn render(roots: &[TreeNode], format: TreeFormat) -> String {
        match format {
            TreeFormat::Connector => Self::render_connector(roots),
            TreeFormat::Icons => Self::render_icons(roots),
        }
    }

    fn render_connector(roots: &[TreeNode]) -> String {
        let mut result = String::new();
        let roots = Self::sorted(roots);
        for (i, root) in roots.iter().enumerate() {
            Self::render_connector_node(root, &mut result, "", i == roots.len() - 1);
        }
        result
    }

    /// Emits `prefix + connector + name`, then recurses with the prefix
    /// extended by a continuation bar (more siblings follow) or blank padding.
    fn render_connector_node(node: &TreeNode, result: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        result.push_str(&format!("{prefix}{connector}{}\n", node.name));

        let children = Self::sorted(&node.children);
        if children.is_empty() {
            return;
        }

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        for (i, child) in children.iter().enumerate() {
            Self::render_connector_node(child, result, &child_prefix, i == children.len() - 1);
        }
    }

    fn render_icons(roots: &[TreeNode]) -> String {
        let mut result = String::new();
        for root in Self::sorted(roots) {
            Self::render_icon_node(root, &mut result, 0);
        }
        result
    }

    fn render_icon_node(node: &TreeNode, result: &mut String, depth: usize) {
        let icon = if node.is_directory {
            DIRECTORY_ICON
        } else {
            FILE_ICON
        };
        result.push_str(&format!(
            "{}{icon} {}\n",
            ICON_INDENT.repeat(depth),
            node.name
        ));

        for child in Self::sorted(&node.children) {
            Self::render_icon_node(child, result, depth + 1);
        }
    }

    /// Directories first, then files, each group lexicographic by name.
    fn sorted(nodes: &[TreeNode]) -> Vec<&TreeNode> {
        let mut sorted: Vec<&TreeNode> = nodes.iter().collect();
        sorted.sort_by(|a, b| match (a.is_directory, b.is_directory) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            is_directory: false,
            level: 0,
            id: String::new(),
            full_path: String::new(),
            children: Vec::new(),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            is_directory: true,
            level: 0,
            id: String::new(),
            full_path: String::new(),
            children,
        }
    }

    #[test]
    fn test_connector_layout() {
        let roots = vec![dir(
            "project",
            vec![
                dir("src", vec![file("main.cs")]),
                file("README.md"),
            ],
        )];
        let rendered = TreeRenderer::render(&roots, TreeFormat::Connector);

        insta::assert_snapshot!(rendered, @r###"
        └── project
            ├── src
            │   └── main.cs
            └── README.md
        "###);
    }

    #[test]
    fn test_continuation_bars_for_open_ancestors() {
        let roots = vec![dir(
            "root",
            vec![
                dir("a", vec![file("deep.txt")]),
                dir("b", vec![]),
            ],
        )];
        let rendered = TreeRenderer::render(&roots, TreeFormat::Connector);

        insta::assert_snapshot!(rendered, @r###"
        └── root
            ├── a
            │   └── deep.txt
            └── b
        "###);
    }

    #[test]
    fn test_directories_sort_before_files() {
        let roots = vec![file("b.txt"), dir("c", vec![]), dir("a", vec![])];
        let rendered = TreeRenderer::render(&roots, TreeFormat::Connector);

        insta::assert_snapshot!(rendered, @r###"
        ├── a
        ├── c
        └── b.txt
        "###);
    }

    #[test]
    fn test_icon_layout() {
        let roots = vec![dir(
            "project",
            vec![dir("src", vec![file("main.cs")]), file("README.md")],
        )];
        let rendered = TreeRenderer::render(&roots, TreeFormat::Icons);

        insta::assert_snapshot!(rendered, @r###"
        📁 project
            📁 src
                📄 main.cs
            📄 README.md
        "###);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let roots = vec![dir("x", vec![file("y.txt")])];
        let first = TreeRenderer::render(&roots, TreeFormat::Connector);
        let second = TreeRenderer::render(&roots, TreeFormat::Connector);
        assert_eq!(first, second);
    }
}
