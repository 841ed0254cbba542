//! Hierarchical navigation tree.
//!
//! At most one item is active across the whole tree. Items are addressed
//! by [`TreePath`], the child-index route from the root list down to the
//! item. Filtering is recursive: an item survives when its own label
//! matches or any descendant does.

use serde::{Deserialize, Serialize};

use crate::observers::Observers;

/// Child-index route from the root node list to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreePath(pub Vec<usize>);

impl TreePath {
    /// Creates a path from root-to-item child indices.
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One entry in a node list: an item or a visual separator.
pub enum TreeNode {
    /// A labelled, possibly nested item.
    Item(TreeItem),
    /// A non-interactive divider between items.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A labelled tree item with optional children.
pub struct TreeItem {
    /// Visible item label, also the filter target.
    pub label: String,
    /// Whether this item is the tree's active item.
    pub active: bool,
    /// Whether the item's children are shown.
    pub expanded: bool,
    /// Whether the current filter hides this item.
    pub filtered_out: bool,
    /// Nested entries.
    pub children: Vec<TreeNode>,
}

impl TreeItem {
    /// Creates a collapsed leaf item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
            expanded: false,
            filtered_out: false,
            children: Vec::new(),
        }
    }

    /// Appends a child item.
    pub fn add_child(&mut self, child: TreeItem) -> &mut Self {
        self.children.push(TreeNode::Item(child));
        self
    }

    /// Appends a separator between children.
    pub fn add_separator(&mut self) -> &mut Self {
        self.children.push(TreeNode::Separator);
        self
    }

    fn filter(&mut self, token_lower: &str, auto_expand: bool) -> bool {
        let self_match = self.label.to_lowercase().contains(token_lower);
        let mut child_match = false;
        for node in &mut self.children {
            if let TreeNode::Item(child) = node {
                if child.filter(token_lower, auto_expand) {
                    child_match = true;
                }
            }
        }
        if child_match && auto_expand {
            self.expanded = true;
        }
        let matched = self_match || child_match;
        self.filtered_out = !matched;
        matched
    }

    fn clear_filter(&mut self) {
        self.filtered_out = false;
        for node in &mut self.children {
            if let TreeNode::Item(child) = node {
                child.clear_filter();
            }
        }
    }

    fn set_expanded_recursive(&mut self, expanded: bool) {
        self.expanded = expanded;
        for node in &mut self.children {
            if let TreeNode::Item(child) = node {
                child.set_expanded_recursive(expanded);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Plain-data model for the navigation tree.
pub struct TreeState {
    /// Header title shown above the tree.
    pub title: String,
    /// Root-level entries.
    pub nodes: Vec<TreeNode>,
    /// Path of the active item, if any.
    pub active: Option<TreePath>,
    /// Whether activating an item collapses unrelated branches.
    pub auto_collapse: bool,
    /// Whether filtering expands ancestors of matching items.
    pub auto_expand_found: bool,
    /// The filter token currently applied, if any.
    pub active_filter: Option<String>,
}

impl Default for TreeState {
    fn default() -> Self {
        Self {
            title: String::new(),
            nodes: Vec::new(),
            active: None,
            auto_collapse: true,
            auto_expand_found: false,
            active_filter: None,
        }
    }
}

impl TreeState {
    /// Creates an empty tree with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Appends a root-level item.
    pub fn add_tree_item(&mut self, item: TreeItem) -> &mut Self {
        self.nodes.push(TreeNode::Item(item));
        self
    }

    /// Appends a root-level separator.
    pub fn add_separator(&mut self) -> &mut Self {
        self.nodes.push(TreeNode::Separator);
        self
    }

    /// Returns the item at `path`, if the path resolves to one.
    pub fn item(&self, path: &TreePath) -> Option<&TreeItem> {
        let mut nodes = &self.nodes;
        let mut found = None;
        for &index in &path.0 {
            match nodes.get(index)? {
                TreeNode::Item(item) => {
                    found = Some(item);
                    nodes = &item.children;
                }
                TreeNode::Separator => return None,
            }
        }
        found
    }

    fn item_mut(&mut self, path: &TreePath) -> Option<&mut TreeItem> {
        let (last, prefix) = path.0.split_last()?;
        let mut nodes = &mut self.nodes;
        for &index in prefix {
            match nodes.get_mut(index)? {
                TreeNode::Item(item) => nodes = &mut item.children,
                TreeNode::Separator => return None,
            }
        }
        match nodes.get_mut(*last)? {
            TreeNode::Item(item) => Some(item),
            TreeNode::Separator => None,
        }
    }

    /// Activates the item at `path`, deactivating the previous active item
    /// first. With `auto_collapse` set, unrelated branches collapse and the
    /// new item's ancestors expand. Returns `false` and changes nothing
    /// when the path does not resolve to an item.
    pub fn set_active_item(&mut self, path: TreePath) -> bool {
        if self.item(&path).is_none() {
            return false;
        }
        if let Some(previous) = self.active.take() {
            if let Some(item) = self.item_mut(&previous) {
                item.active = false;
            }
        }
        if self.auto_collapse {
            self.set_expanded_all(false);
            for depth in 1..path.0.len() {
                let ancestor = TreePath(path.0[..depth].to_vec());
                if let Some(item) = self.item_mut(&ancestor) {
                    item.expanded = true;
                }
            }
        }
        if let Some(item) = self.item_mut(&path) {
            item.active = true;
        }
        self.active = Some(path);
        true
    }

    /// Applies a filter token: items whose label (or any descendant's
    /// label) contains the token case-insensitively stay visible, the
    /// rest are marked filtered out. An empty token clears the filter.
    pub fn filter(&mut self, token: &str) -> &mut Self {
        if token.is_empty() {
            return self.clear_filter();
        }
        let token_lower = token.to_lowercase();
        let auto_expand = self.auto_expand_found;
        for node in &mut self.nodes {
            if let TreeNode::Item(item) = node {
                item.filter(&token_lower, auto_expand);
            }
        }
        self.active_filter = Some(token.to_owned());
        self
    }

    /// Clears any active filter, making every item visible again.
    pub fn clear_filter(&mut self) -> &mut Self {
        for node in &mut self.nodes {
            if let TreeNode::Item(item) = node {
                item.clear_filter();
            }
        }
        self.active_filter = None;
        self
    }

    /// Expands every item in the tree.
    pub fn expand_all(&mut self) -> &mut Self {
        self.set_expanded_all(true)
    }

    /// Collapses every item in the tree.
    pub fn collapse_all(&mut self) -> &mut Self {
        self.set_expanded_all(false)
    }

    fn set_expanded_all(&mut self, expanded: bool) -> &mut Self {
        for node in &mut self.nodes {
            if let TreeNode::Item(item) = node {
                item.set_expanded_recursive(expanded);
            }
        }
        self
    }

    /// Returns the active item, if any.
    pub fn active_item(&self) -> Option<&TreeItem> {
        self.active.as_ref().and_then(|path| self.item(path))
    }
}

/// Navigation tree component: the state plus activation observers
/// receiving the path of each newly active item.
pub struct Tree {
    state: TreeState,
    activation_observers: Observers<TreePath>,
}

impl Tree {
    /// Creates an empty tree with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            state: TreeState::new(title),
            activation_observers: Observers::new(),
        }
    }

    /// Appends a root-level item.
    pub fn add_tree_item(&mut self, item: TreeItem) -> &mut Self {
        self.state.add_tree_item(item);
        self
    }

    /// Appends a root-level separator.
    pub fn add_separator(&mut self) -> &mut Self {
        self.state.add_separator();
        self
    }

    /// Activates the item at `path`. Unresolvable paths are ignored;
    /// observers fire only after an activation was recorded.
    pub fn set_active_item(&mut self, path: TreePath) -> &mut Self {
        if self.state.set_active_item(path.clone()) {
            self.activation_observers.notify(&path);
        }
        self
    }

    /// Enables ancestor auto-expansion during filtering.
    pub fn auto_expand_found(&mut self, enabled: bool) -> &mut Self {
        self.state.auto_expand_found = enabled;
        self
    }

    /// Controls whether activation collapses unrelated branches.
    pub fn set_auto_collapse(&mut self, enabled: bool) -> &mut Self {
        self.state.auto_collapse = enabled;
        self
    }

    /// Applies a filter token; see [`TreeState::filter`].
    pub fn filter(&mut self, token: &str) -> &mut Self {
        self.state.filter(token);
        self
    }

    /// Clears any active filter.
    pub fn clear_filter(&mut self) -> &mut Self {
        self.state.clear_filter();
        self
    }

    /// Expands every item.
    pub fn expand_all(&mut self) -> &mut Self {
        self.state.expand_all();
        self
    }

    /// Collapses every item.
    pub fn collapse_all(&mut self) -> &mut Self {
        self.state.collapse_all();
        self
    }

    /// Registers an observer for item activation.
    pub fn on_item_activated(&mut self, handler: impl Fn(&TreePath) + 'static) -> &mut Self {
        self.activation_observers.push(handler);
        self
    }

    /// Returns the active item, if any.
    pub fn active_item(&self) -> Option<&TreeItem> {
        self.state.active_item()
    }

    /// The underlying plain-data state.
    pub fn state(&self) -> &TreeState {
        &self.state
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree").field("state", &self.state).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_state() -> TreeState {
        let mut state = TreeState::new("Navigation");
        let mut reports = TreeItem::new("Reports");
        let mut quarterly = TreeItem::new("Quarterly");
        quarterly.add_child(TreeItem::new("Revenue"));
        reports.add_child(quarterly);
        reports.add_child(TreeItem::new("Annual"));
        state.add_tree_item(reports);
        state.add_separator();
        state.add_tree_item(TreeItem::new("Settings"));
        state
    }

    #[test]
    fn at_most_one_item_active_across_the_tree() {
        let mut state = sample_state();

        assert!(state.set_active_item(TreePath::new(vec![0, 0, 0])));
        assert!(state.set_active_item(TreePath::new(vec![2])));

        assert!(!state.item(&TreePath::new(vec![0, 0, 0])).unwrap().active);
        assert!(state.item(&TreePath::new(vec![2])).unwrap().active);
        assert_eq!(state.active, Some(TreePath::new(vec![2])));
    }

    #[test]
    fn unresolvable_paths_are_rejected_without_change() {
        let mut state = sample_state();
        state.set_active_item(TreePath::new(vec![2]));

        assert!(!state.set_active_item(TreePath::new(vec![9])));
        assert!(!state.set_active_item(TreePath::new(vec![1])));

        assert_eq!(state.active, Some(TreePath::new(vec![2])));
        assert!(state.item(&TreePath::new(vec![2])).unwrap().active);
    }

    #[test]
    fn filter_keeps_items_with_matching_descendants() {
        let mut state = sample_state();
        state.filter("revenue");

        assert!(!state.item(&TreePath::new(vec![0])).unwrap().filtered_out);
        assert!(!state.item(&TreePath::new(vec![0, 0])).unwrap().filtered_out);
        assert!(!state
            .item(&TreePath::new(vec![0, 0, 0]))
            .unwrap()
            .filtered_out);
        assert!(state.item(&TreePath::new(vec![0, 1])).unwrap().filtered_out);
        assert!(state.item(&TreePath::new(vec![2])).unwrap().filtered_out);
        assert_eq!(state.active_filter.as_deref(), Some("revenue"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut state = sample_state();
        state.filter("REVen");
        assert!(!state
            .item(&TreePath::new(vec![0, 0, 0]))
            .unwrap()
            .filtered_out);
    }

    #[test]
    fn auto_expand_found_expands_matching_ancestors() {
        let mut state = sample_state();
        state.auto_expand_found = true;
        state.filter("revenue");

        assert!(state.item(&TreePath::new(vec![0])).unwrap().expanded);
        assert!(state.item(&TreePath::new(vec![0, 0])).unwrap().expanded);

        let mut without = sample_state();
        without.filter("revenue");
        assert!(!without.item(&TreePath::new(vec![0])).unwrap().expanded);
    }

    #[test]
    fn clear_filter_restores_visibility() {
        let mut state = sample_state();
        state.filter("revenue");
        state.clear_filter();

        assert!(!state.item(&TreePath::new(vec![2])).unwrap().filtered_out);
        assert_eq!(state.active_filter, None);
    }

    #[test]
    fn empty_token_clears_the_filter() {
        let mut state = sample_state();
        state.filter("revenue");
        state.filter("");
        assert_eq!(state.active_filter, None);
        assert!(!state.item(&TreePath::new(vec![2])).unwrap().filtered_out);
    }

    #[test]
    fn expand_and_collapse_all_recurse() {
        let mut state = sample_state();
        state.expand_all();
        assert!(state.item(&TreePath::new(vec![0, 0])).unwrap().expanded);

        state.collapse_all();
        assert!(!state.item(&TreePath::new(vec![0])).unwrap().expanded);
        assert!(!state.item(&TreePath::new(vec![0, 0])).unwrap().expanded);
    }

    #[test]
    fn activation_collapses_unrelated_branches_and_opens_ancestors() {
        let mut state = sample_state();
        state.expand_all();

        state.set_active_item(TreePath::new(vec![0, 0, 0]));

        assert!(state.item(&TreePath::new(vec![0])).unwrap().expanded);
        assert!(state.item(&TreePath::new(vec![0, 0])).unwrap().expanded);
        assert!(!state.item(&TreePath::new(vec![2])).unwrap().expanded);
        assert!(!state.item(&TreePath::new(vec![0, 1])).unwrap().expanded);
    }

    #[test]
    fn disabling_auto_collapse_preserves_expansion() {
        let mut state = sample_state();
        state.auto_collapse = false;
        state.expand_all();

        state.set_active_item(TreePath::new(vec![2]));

        assert!(state.item(&TreePath::new(vec![0])).unwrap().expanded);
        assert!(state.item(&TreePath::new(vec![0, 0])).unwrap().expanded);
    }

    #[test]
    fn wrapper_observers_receive_activation_paths() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tree = Tree::new("Navigation");
        tree.add_tree_item(TreeItem::new("Reports"));
        let sink = Rc::clone(&seen);
        tree.on_item_activated(move |path| sink.borrow_mut().push(path.clone()));

        tree.set_active_item(TreePath::new(vec![0]));
        tree.set_active_item(TreePath::new(vec![7]));

        assert_eq!(*seen.borrow(), vec![TreePath::new(vec![0])]);
    }
}
