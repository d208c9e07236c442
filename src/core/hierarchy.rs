//! Computes levels, full paths and owned child lists from raw edges.

use std::collections::{HashMap, HashSet, VecDeque};

use super::diagram_parser::ParsedDiagram;
use super::{Diagnostics, TreeNode};

/// A utility struct for resolving a node map and edge list into a forest.
///
/// This struct is stateless and provides methods as associated functions.
pub struct HierarchyResolver;

impl HierarchyResolver {
    /// Resolves a parsed diagram into a forest of rooted trees.
    ///
    /// Roots are the declared ids with no incoming edge. Levels and full
    /// paths propagate breadth-first from all roots simultaneously; each
    /// reached child is attached to its parent's owned child list. Nodes
    /// reachable from no root (including the members of any rootless cycle)
    /// are excluded from the forest and recorded in the returned
    /// diagnostics.
    pub fn resolve(parsed: ParsedDiagram) -> (Vec<TreeNode>, Diagnostics) {
        let ParsedDiagram {
            mut nodes,
            order,
            edges,
            mut diagnostics,
        } = parsed;

        let mut parent_of: HashMap<String, String> = HashMap::new();
        let mut children_of: HashMap<String, Vec<String>> = HashMap::new();
        for (parent_id, child_id) in &edges {
            parent_of.insert(child_id.clone(), parent_id.clone());
            children_of
                .entry(parent_id.clone())
                .or_default()
                .push(child_id.clone());
        }

        let root_ids: Vec<String> = order
            .iter()
            .filter(|id| !parent_of.contains_key(*id))
            .cloned()
            .collect();

        // Pass 1: breadth-first level and full-path propagation.
        let mut queue: VecDeque<String> = VecDeque::new();
        for root_id in &root_ids {
            if let Some(root) = nodes.get_mut(root_id) {
                root.level = 0;
                root.full_path = root.name.clone();
                queue.push_back(root_id.clone());
            }
        }

        let mut visit_order: Vec<String> = Vec::new();
        while let Some(id) = queue.pop_front() {
            let (level, path) = match nodes.get(&id) {
                Some(node) => (node.level, node.full_path.clone()),
                None => continue,
            };
            visit_order.push(id.clone());

            if let Some(child_ids) = children_of.get(&id) {
                for child_id in child_ids {
                    if let Some(child) = nodes.get_mut(child_id) {
                        child.level = level + 1;
                        child.full_path = format!("{}/{}", path, child.name);
                        queue.push_back(child_id.clone());
                    }
                }
            }
        }

        let visited: HashSet<&String> = visit_order.iter().collect();
        for id in &order {
            if !visited.contains(id) {
                tracing::warn!("Node {} is reachable from no root, excluding it", id);
                diagnostics.unreachable.push(id.clone());
            }
        }

        // Pass 2: assemble owned children. Walking the visit order backwards
        // guarantees a node's subtree is complete before the node itself is
        // moved into its parent; the push order is undone by one reversal.
        for id in visit_order.iter().rev() {
            if let Some(parent_id) = parent_of.get(id) {
                if let Some(mut node) = nodes.remove(id) {
                    node.children.reverse();
                    if let Some(parent) = nodes.get_mut(parent_id) {
                        parent.children.push(node);
                    }
                }
            }
        }

        let roots: Vec<TreeNode> = root_ids
            .iter()
            .filter_map(|id| nodes.remove(id))
            .map(|mut root| {
                root.children.reverse();
                root
            })
            .collect();

        (roots, diagnostics)
    }

    /// Flattens a resolved forest into references ordered by
    /// `(level, full_path)`, so parents always precede their children.
    /// Downstream consumers that materialize the tree rely on this order.
    pub fn flat_view(roots: &[TreeNode]) -> Vec<&TreeNode> {
        let mut flat = Vec::new();
        let mut pending: Vec<&TreeNode> = roots.iter().collect();
        while let Some(node) = pending.pop() {
            flat.push(node);
            pending.extend(node.children.iter());
        }

        flat.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.full_path.cmp(&b.full_path)));
        flat
    }
}
