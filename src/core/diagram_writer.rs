//! Serializes a parsed entry sequence into a top-down Mermaid flowchart.

use super::parent_stack::ParentStack;
use super::{TreeEntry, TreeNode, DIRECTORY_ICON, FILE_ICON};

/// A utility struct for writing diagram text.
///
/// This struct is stateless and provides methods as associated functions.
pub struct DiagramWriter;

impl DiagramWriter {
    /// Writes the `graph TD` diagram for a depth-first entry sequence.
    ///
    /// Each entry becomes one statement: a bare declaration for roots, an
    /// edge from the innermost open ancestor for everything else. Returns
    /// the diagram text together with the flat node list in source order
    /// (levels and full paths as derived from the text, children empty).
    ///
    /// The `node1`, `node2`, … id sequence is local to this call, so
    /// concurrent conversions never share state.
    pub fn write(entries: &[TreeEntry]) -> (String, Vec<TreeNode>) {
        let mut diagram = String::from("graph TD\n");
        let mut nodes = Vec::with_capacity(entries.len());
        let mut stack = ParentStack::new();
        let mut counter = 0usize;

        for entry in entries {
            stack.close_to_level(entry.level);

            counter += 1;
            let id = format!("node{counter}");
            let icon = if entry.is_directory {
                DIRECTORY_ICON
            } else {
                FILE_ICON
            };

            let full_path = match stack.parent() {
                Some(parent) => {
                    diagram.push_str(&format!(
                        "    {} --> {}[\"{} {}\"]\n",
                        parent.id, id, icon, entry.name
                    ));
                    format!("{}/{}", parent.path, entry.name)
                }
                None => {
                    diagram.push_str(&format!("    {}[\"{} {}\"]\n", id, icon, entry.name));
                    entry.name.clone()
                }
            };

            nodes.push(TreeNode {
                name: entry.name.clone(),
                is_directory: entry.is_directory,
                level: entry.level,
                id: id.clone(),
                full_path: full_path.clone(),
                children: Vec::new(),
            });

            // Files cannot have children, so only directories stay open.
            if entry.is_directory {
                stack.open(id, entry.level, full_path);
            }
        }

        (diagram, nodes)
    }
}
