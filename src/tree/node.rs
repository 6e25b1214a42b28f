//! Tree vertices: questions and guessed animals

use super::{branch::Branch, document::NodeDoc, with_stack};

/// One vertex of the decision tree.
///
/// An internal node holds a yes/no question and a leaf holds an animal name.
/// Each node exclusively owns its subtrees, so the tree has no sharing and
/// no cycles.
///
/// # Examples
///
/// ```
/// use twenty_questions::tree::Node;
///
/// let root = Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"));
/// assert!(!root.is_leaf());
/// assert_eq!(root.animals(), vec!["Dog", "Cat"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Question text for internal nodes, animal name for leaves
    pub value: String,
    /// Subtree followed when the answer is yes
    pub yes: Option<Box<Node>>,
    /// Subtree followed when the answer is no
    pub no: Option<Box<Node>>,
}

impl Node {
    /// Create a leaf
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            yes: None,
            no: None,
        }
    }

    /// Create a node with explicit, possibly absent, children
    pub fn with_children(value: impl Into<String>, yes: Option<Node>, no: Option<Node>) -> Self {
        Self {
            value: value.into(),
            yes: yes.map(Box::new),
            no: no.map(Box::new),
        }
    }

    /// Create a question node with both branches set
    pub fn question(value: impl Into<String>, yes: Node, no: Node) -> Self {
        Self::with_children(value, Some(yes), Some(no))
    }

    /// A node is a leaf iff both children are absent
    pub fn is_leaf(&self) -> bool {
        self.yes.is_none() && self.no.is_none()
    }

    pub fn child(&self, branch: Branch) -> Option<&Node> {
        match branch {
            Branch::Yes => self.yes.as_deref(),
            Branch::No => self.no.as_deref(),
        }
    }

    pub fn child_mut(&mut self, branch: Branch) -> Option<&mut Node> {
        match branch {
            Branch::Yes => self.yes.as_deref_mut(),
            Branch::No => self.no.as_deref_mut(),
        }
    }

    /// Follow `steps` from this node.
    ///
    /// Returns `None` if any step leads into an absent child.
    pub fn node_at(&self, steps: &[Branch]) -> Option<&Node> {
        steps
            .iter()
            .try_fold(self, |node, &branch| node.child(branch))
    }

    /// Mutable counterpart of [`Node::node_at`].
    pub fn node_at_mut(&mut self, steps: &[Branch]) -> Option<&mut Node> {
        let mut node = self;
        for &branch in steps {
            node = node.child_mut(branch)?;
        }
        Some(node)
    }

    /// Encode this subtree as a storage document.
    ///
    /// Every node is written in the full object form; absent children become
    /// explicit nulls.
    pub fn encode(&self) -> NodeDoc {
        with_stack(|| NodeDoc::Branch {
            value: self.value.clone(),
            yes: Box::new(self.yes.as_ref().map_or(NodeDoc::Null, |n| n.encode())),
            no: Box::new(self.no.as_ref().map_or(NodeDoc::Null, |n| n.encode())),
        })
    }

    /// Build a subtree from an already validated document.
    ///
    /// A null document yields `None`; a bare string yields a leaf.
    pub fn decode(doc: &NodeDoc) -> Option<Node> {
        with_stack(|| match doc {
            NodeDoc::Null => None,
            NodeDoc::Leaf(value) => Some(Node::new(value.clone())),
            NodeDoc::Branch { value, yes, no } => Some(Node::with_children(
                value.clone(),
                Node::decode(yes),
                Node::decode(no),
            )),
        })
    }

    /// Number of internal (question) nodes
    pub fn question_count(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }
        1 + self.children().map(Node::question_count).sum::<usize>()
    }

    /// Number of leaves (known animals)
    pub fn animal_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children().map(Node::animal_count).sum()
    }

    /// Length of the longest root-to-leaf path, counted in edges
    pub fn depth(&self) -> usize {
        self.children().map(|c| c.depth() + 1).max().unwrap_or(0)
    }

    /// Leaf labels in yes-before-no order
    pub fn animals(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_animals(&mut out);
        out
    }

    fn collect_animals<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_leaf() {
            out.push(&self.value);
            return;
        }
        for child in self.children() {
            child.collect_animals(out);
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.yes.as_deref().into_iter().chain(self.no.as_deref())
    }
}
