//! Defines the decision tree classifier.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use super::node::*;
use crate::error::{Result, TreeError};


const INDENT: &str = "    ";


/// Decision tree classifier.
/// This struct is a wrapper of [`Tree`]
/// that remembers the feature labels used at training time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Tree,
    feature_labels: Vec<String>,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(root: Tree, feature_labels: Vec<String>)
        -> Self
    {
        Self { root, feature_labels }
    }


    /// Returns the tree.
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.root
    }


    /// Returns the feature labels, in column order.
    #[inline]
    pub fn feature_labels(&self) -> &[String] {
        &self.feature_labels[..]
    }


    /// Consumes `self` and returns the tree.
    #[inline]
    pub fn into_tree(self) -> Tree {
        self.root
    }


    /// Predicts the label of a record.
    /// `features[i]` is the value of the feature column `i`
    /// of the training dataset (no label column).
    ///
    /// Returns `Ok(None)` if the record reaches a node
    /// that never saw its value during training.
    /// Returns [`TreeError::InvalidInput`]
    /// if the record length differs from the number of features.
    pub fn predict<S>(&self, features: &[S]) -> Result<Option<&str>>
        where S: AsRef<str>
    {
        if features.len() != self.feature_labels.len() {
            return Err(TreeError::invalid(format!(
                "got {} feature values, expected {}",
                features.len(),
                self.feature_labels.len()
            )));
        }

        let mut node = &self.root;
        loop {
            let branch = match node {
                Tree::Leaf(label) => return Ok(Some(label.as_str())),
                Tree::Branch(branch) => branch,
            };
            let column = self.feature_labels.iter()
                .position(|name| name == branch.feature())
                .ok_or_else(|| TreeError::invalid(format!(
                    "the tree splits on an unknown feature `{}`",
                    branch.feature()
                )))?;

            match branch.child(features[column].as_ref()) {
                Some(child) => { node = child; },
                None => return Ok(None),
            }
        }
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Returns an indented, colored rendering of the tree.
    /// Feature names are bold blue, leaf labels are green.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        render_node(&self.root, 0, &mut lines);
        lines.join("\n")
    }


    /// Print the tree to the standard output.
    pub fn print_tree(&self) {
        println!("{}", self.render());
    }
}


fn render_node(tree: &Tree, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    match tree {
        Tree::Leaf(label) => {
            lines.push(format!("{indent}{}", label.green()));
        },
        Tree::Branch(branch) => {
            lines.push(format!("{indent}[{}]", branch.feature().bold().blue()));
            for (value, child) in branch.children() {
                match child {
                    Tree::Leaf(label) => {
                        lines.push(format!(
                            "{indent}{INDENT}{value} => {}",
                            label.green()
                        ));
                    },
                    Tree::Branch(_) => {
                        lines.push(format!("{indent}{INDENT}{value} =>"));
                        render_node(child, depth + 2, lines);
                    },
                }
            }
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> DecisionTreeClassifier {
        let temp = BranchNode::from_raw(
            "temp".into(),
            vec![
                ("hot".into(), Tree::leaf("ntpl")),
                ("cool".into(), Tree::leaf("play")),
            ],
        );
        let root = Tree::Branch(BranchNode::from_raw(
            "weather".into(),
            vec![
                ("sunny".into(), Tree::Branch(temp)),
                ("rainy".into(), Tree::leaf("play")),
            ],
        ));
        DecisionTreeClassifier::from_components(
            root, vec!["weather".into(), "temp".into()]
        )
    }


    #[test]
    fn predict_walks_the_tree() {
        let f = classifier();
        assert_eq!(f.predict(&["sunny", "hot"]).unwrap(), Some("ntpl"));
        assert_eq!(f.predict(&["sunny", "cool"]).unwrap(), Some("play"));
        assert_eq!(f.predict(&["rainy", "hot"]).unwrap(), Some("play"));
    }


    #[test]
    fn predict_unseen_value() {
        let f = classifier();
        assert_eq!(f.predict(&["cloudy", "hot"]).unwrap(), None);
    }


    #[test]
    fn predict_rejects_wrong_length() {
        let f = classifier();
        assert!(f.predict(&["sunny"]).unwrap_err().is_invalid_input());
    }


    #[test]
    fn render_lists_every_branch() {
        colored::control::set_override(false);
        let rendered = classifier().render();
        let expected = "\
            [weather]\n\
            \x20   sunny =>\n\
            \x20       [temp]\n\
            \x20           hot => ntpl\n\
            \x20           cool => play\n\
            \x20   rainy => play";
        assert_eq!(rendered, expected);
    }
}
