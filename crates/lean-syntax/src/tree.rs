use std::fmt;

use ahash::HashMap;

use crate::span::InputSpan;
use crate::token::TokenKind;

/// Unique identifier for a node in the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-terminal node kinds.
///
/// The annotator only distinguishes definition and attribute-list contexts;
/// everything else is a neutral container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminalKind {
    SourceFile,
    /// A declaration header (`def`, `theorem`, `structure`, ... and its name).
    Definition,
    /// An attribute list (`@[simp, inline]`).
    Attributes,
    /// Any other grouping node.
    Term,
}

/// Data stored for each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxNode {
    Terminal { kind: TokenKind, span: InputSpan },
    NonTerminal { kind: NonTerminalKind },
}

/// A syntax tree with stable child ordering.
///
/// Nodes are stored in an arena and addressed by [`NodeId`]. The tree never
/// owns source text; terminal text is recovered from the original input via
/// [`InputSpan::as_str`].
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    children: HashMap<NodeId, Vec<NodeId>>,
    parent: HashMap<NodeId, NodeId>,
    root: NodeId,
}

impl SyntaxTree {
    /// Creates a tree containing only the given root node.
    pub fn new(root_data: SyntaxNode) -> Self {
        Self {
            nodes: vec![root_data],
            children: HashMap::default(),
            parent: HashMap::default(),
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_data(&self, node: NodeId) -> Option<SyntaxNode> {
        self.nodes.get(node.0).copied()
    }

    /// Appends a child node under `parent` and returns its id.
    pub fn add_node(&mut self, parent: NodeId, data: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        self.children.entry(parent).or_default().push(id);
        self.parent.insert(id, parent);
        id
    }

    /// Appends a terminal child under `parent`.
    pub fn add_terminal(&mut self, parent: NodeId, kind: TokenKind, span: InputSpan) -> NodeId {
        self.add_node(parent, SyntaxNode::Terminal { kind, span })
    }

    /// Appends a non-terminal child under `parent`.
    pub fn add_non_terminal(&mut self, parent: NodeId, kind: NonTerminalKind) -> NodeId {
        self.add_node(parent, SyntaxNode::NonTerminal { kind })
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(&node).copied()
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children
            .get(&node)
            .map(|c| c.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    /// The sibling immediately before `node` under the same parent.
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children.get(&self.parent(node)?)?;
        let index = siblings.iter().position(|&id| id == node)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// The sibling immediately after `node` under the same parent.
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children.get(&self.parent(node)?)?;
        let index = siblings.iter().position(|&id| id == node)?;
        siblings.get(index + 1).copied()
    }

    /// All node ids in document (depth-first, pre-order) order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(children) = self.children.get(&node) {
                stack.extend(children.iter().rev().copied());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new(SyntaxNode::NonTerminal {
            kind: NonTerminalKind::SourceFile,
        })
    }
}
