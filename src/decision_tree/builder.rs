use crate::ValueOrder;
use super::c45_algorithm::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// [`DecisionTreeBuilder`] keeps parameters for constructing [`DecisionTree`].
///
/// # Example
///
/// ```
/// use c45::prelude::*;
///
/// let learner = DecisionTreeBuilder::new()
///     .value_order(ValueOrder::Sorted)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTreeBuilder {
    value_order: ValueOrder,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// value_order: ValueOrder::FirstSeen,
    /// ```
    pub fn new() -> Self {
        Self { value_order: ValueOrder::FirstSeen }
    }


    /// Set the order in which the values of a splitting feature
    /// are visited. This is also the order of the children
    /// of each branch node.
    /// Default value is `ValueOrder::FirstSeen`.
    #[inline]
    pub fn value_order(mut self, order: ValueOrder) -> Self {
        self.value_order = order;
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.value_order)
    }
}
