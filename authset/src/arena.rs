//! Node storage.
//!
//! All nodes of a tree live in a single vector and refer to each other by index. The arena owns
//! every node for the lifetime of the tree; nothing is freed before the tree is dropped.
//!
//! An internal node may refer to the same child in both slots. This is how the last node of an
//! odd-length level is paired with itself.

use authset_core::{Digest, HashFactory, NodeKind};
use std::fmt;

/// The index of a node within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) digest: Digest,
    /// Present on leaves only.
    pub(crate) payload: Option<Vec<u8>>,
    /// `(left, right)`. Present on internal nodes only.
    pub(crate) children: Option<(NodeId, NodeId)>,
    /// Absent only on the root.
    pub(crate) parent: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    nodes: Vec<NodeData>,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push_leaf(&mut self, payload: Vec<u8>, digest: Digest) -> NodeId {
        self.push(NodeData {
            digest,
            payload: Some(payload),
            children: None,
            parent: None,
        })
    }

    /// Push an internal node over two existing nodes and link them to it.
    ///
    /// `left` and `right` may be the same node.
    pub(crate) fn push_internal(&mut self, left: NodeId, right: NodeId, digest: Digest) -> NodeId {
        let id = self.push(NodeData {
            digest,
            payload: None,
            children: Some((left, right)),
            parent: None,
        });
        self.nodes[left.0].parent = Some(id);
        self.nodes[right.0].parent = Some(id);
        id
    }

    fn push(&mut self, node: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// The parent of the node and the other child of that parent. The sibling is the node itself
    /// when the parent holds it in both slots. `None` at the root.
    pub(crate) fn parent_and_sibling(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let parent = self.get(id).parent?;
        let (left, right) = self.get(parent).children?;
        Some((parent, if left == id { right } else { left }))
    }

    /// Recompute the digest of an internal node from the current digests of its children.
    ///
    /// No-op on leaves.
    pub(crate) fn rehash<F: HashFactory>(&mut self, factory: &F, id: NodeId) {
        if let Some((left, right)) = self.get(id).children {
            let digest = factory.hash_pair(&self.get(left).digest, &self.get(right).digest);
            self.get_mut(id).digest = digest;
        }
    }
}

/// A read-only view of a node in a tree.
///
/// Two views are equal if and only if they refer to the same node of the same tree. In particular,
/// `root.left() == root.right()` holds for the tree over a single payload.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a Arena,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(arena: &'a Arena, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn data(&self) -> &'a NodeData {
        self.arena.get(self.id)
    }

    fn at(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef::new(self.arena, id)
    }

    /// The index of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn digest(&self) -> &'a Digest {
        &self.data().digest
    }

    /// The payload of a leaf. `None` for internal nodes.
    pub fn payload(&self) -> Option<&'a [u8]> {
        self.data().payload.as_deref()
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.data().children.map(|(left, _)| self.at(left))
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.data().children.map(|(_, right)| self.at(right))
    }

    /// The parent of this node. `None` at the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|parent| self.at(parent))
    }

    pub fn kind(&self) -> NodeKind {
        if self.data().children.is_some() {
            NodeKind::Internal
        } else {
            NodeKind::Leaf
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NodeRef");
        s.field("id", &self.id.0).field("digest", self.digest());
        if let Some(payload) = self.payload() {
            s.field("payload", &String::from_utf8_lossy(payload));
        }
        s.finish()
    }
}
