//! Defines the decision tree produced by the C4.5 induction.
use serde::{Serialize, Deserialize};


/// A decision tree over categorical features.
/// No node keeps counts or impurities,
/// they only live during the construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree {
    /// A terminal node that predicts a class label.
    Leaf(String),


    /// A node that splits on a feature.
    Branch(BranchNode),
}


/// Represents the branch nodes of decision tree.
/// Each child is keyed by a value of the splitting feature
/// observed in the training records that reached this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) feature: String,
    pub(super) children: Vec<(String, Tree)>,
}


impl BranchNode {
    #[inline]
    pub(super) fn from_raw(
        feature: String,
        children: Vec<(String, Tree)>,
    ) -> Self
    {
        Self { feature, children }
    }


    /// Returns the name of the splitting feature.
    #[inline]
    pub fn feature(&self) -> &str {
        &self.feature
    }


    /// Returns the `(value, subtree)` pairs in construction order.
    #[inline]
    pub fn children(&self) -> &[(String, Tree)] {
        &self.children[..]
    }


    /// Returns the subtree for `value`, if `value` was observed.
    pub fn child(&self, value: &str) -> Option<&Tree> {
        self.children.iter()
            .find(|(v, _)| v == value)
            .map(|(_, tree)| tree)
    }
}


impl Tree {
    /// Construct a leaf that predicts `label`.
    #[inline]
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf(label.into())
    }


    /// Returns `true` if this tree is a single leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Returns the label if this tree is a single leaf.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(label) => Some(label.as_str()),
            Self::Branch(_) => None,
        }
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => branch.children.iter()
                .map(|(_, child)| child.n_leaves())
                .sum(),
        }
    }


    /// Returns the depth, a single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(branch) => 1 + branch.children.iter()
                .map(|(_, child)| child.depth())
                .max()
                .unwrap_or(0),
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Tree::Branch(b) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat}\" ];\n",
                    feat = escape(&b.feature),
                )];

                let mut next_id = id + 1;
                for (value, child) in b.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                        value = escape(value),
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Tree::Leaf(label) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{label}\", \
                     shape = box, \
                     ];\n",
                    label = escape(label),
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Escapes `value` for a double-quoted DOT string.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
