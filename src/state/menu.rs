// Expand/collapse rule for a single category node. Each `MenuItem` keeps
// its own flag; nothing here is shared between siblings.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeToggle {
    pub expanded: bool,
    /// Set when collapsing: any selection made inside the subtree is dropped.
    pub clear_selection: bool,
}

pub fn toggle_node(expanded: bool) -> NodeToggle {
    NodeToggle {
        expanded: !expanded,
        clear_selection: expanded,
    }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "x" } else { "+" }
}
