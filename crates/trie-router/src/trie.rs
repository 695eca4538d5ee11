//! Segment trie used for route lookup.
//!
//! Each HTTP method owns one [`PathTrie`]. A node stands for one path segment
//! and remembers the full pattern of the route that terminates at it, if any.
//!
//! Child selection is greedy: the first child in insertion order that either
//! equals the incoming segment or is a placeholder (`:name` / `*name`) wins,
//! and the walk never backtracks. Overlapping siblings such as `/a/:x/c` and
//! `/a/b/:y` are therefore decided by registration order, not by how specific
//! the literal is.

use crate::path::parse_segments;

/// A single node in a [`PathTrie`].
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    segment: String,
    /// Full pattern of the route ending here. Empty on intermediate nodes.
    pattern: String,
    is_param: bool,
    is_wildcard: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            pattern: String::new(),
            is_param: segment.starts_with(':'),
            is_wildcard: segment.starts_with('*'),
            children: Vec::new(),
        }
    }

    /// The literal or placeholder text of this level. Empty at the root.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// The registered pattern terminating at this node.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        if self.pattern.is_empty() {
            None
        } else {
            Some(&self.pattern)
        }
    }

    /// True for `:name` nodes.
    #[must_use]
    pub const fn is_param(&self) -> bool {
        self.is_param
    }

    /// True for `*name` nodes.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether this node can stand for `segment`.
    fn accepts(&self, segment: &str) -> bool {
        self.segment == segment || self.is_param || self.is_wildcard
    }

    fn matching_child(&self, segment: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.accepts(segment))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

/// Prefix tree over path segments.
#[derive(Debug, Clone, Default)]
pub struct PathTrie {
    root: TrieNode,
}

impl PathTrie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node. Its segment is empty.
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a route pattern.
    ///
    /// A placeholder child absorbs any segment during insertion as well, so
    /// `/a/b` inserted after `/a/:x` lands on the `:x` node. Returns the
    /// pattern previously stored on the terminal node, if there was one.
    pub fn insert(&mut self, pattern: &str) -> Option<String> {
        let mut node = &mut self.root;

        for segment in parse_segments(pattern) {
            let index = match node.children.iter().position(|c| c.accepts(segment)) {
                Some(index) => index,
                None => {
                    node.children.push(TrieNode::new(segment));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }

        let previous = std::mem::replace(&mut node.pattern, pattern.to_string());
        (!previous.is_empty()).then_some(previous)
    }

    /// Finds the node terminating the route that matches `path`.
    ///
    /// `path` is split like a pattern, so nothing after a `*` segment is
    /// looked at. The walk stops once every path segment is consumed or a
    /// wildcard node is reached; the stop node matches only if a pattern ends
    /// there.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&TrieNode> {
        let segments = parse_segments(path);
        let mut node = &self.root;

        for segment in &segments {
            if node.is_wildcard {
                break;
            }
            node = node.matching_child(segment)?;
        }

        node.pattern().is_some().then_some(node)
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
