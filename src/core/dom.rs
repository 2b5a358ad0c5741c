use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable identity of a page node, assigned by the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Structural description of a node reported by a mutation record.
///
/// Children are carried so a subtree inserted in one operation can be
/// walked without a live page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub id: NodeId,
    pub element_id: Option<String>,
    pub classes: SmallVec<[String; 4]>,
    pub children: Vec<PageNode>,
}

impl PageNode {
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            element_id: None,
            classes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: PageNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|entry| entry == class)
    }

    /// Visits this node and its descendants in document (pre-)order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a PageNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// One batch entry from the page's subtree observer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationRecord {
    pub added: Vec<PageNode>,
    pub removed: Vec<PageNode>,
}

impl MutationRecord {
    #[must_use]
    pub fn added(nodes: Vec<PageNode>) -> Self {
        Self {
            added: nodes,
            removed: Vec::new(),
        }
    }

    #[must_use]
    pub fn removed(nodes: Vec<PageNode>) -> Self {
        Self {
            added: Vec::new(),
            removed: nodes,
        }
    }
}
