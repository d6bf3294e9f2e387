//! Shannon entropy of a label distribution.
use std::collections::HashMap;

use crate::Dataset;
use crate::error::{Result, TreeError};


/// Counts the occurrences of each label.
/// The labels appear in the order of their first occurrence,
/// so that every sum over the counts is reproducible.
pub(crate) fn count_labels<'a, S>(labels: &'a [S]) -> Vec<(&'a str, usize)>
    where S: AsRef<str>
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        let label = label.as_ref();
        match index.get(label) {
            Some(&i) => { counts[i].1 += 1; },
            None => {
                index.insert(label, counts.len());
                counts.push((label, 1));
            },
        }
    }
    counts
}


/// Returns the Shannon entropy (base 2) of the label column of `dataset`.
/// The result is `0.0` iff all the records share one label.
///
/// ```
/// use c45::{Dataset, entropy};
///
/// let dataset = Dataset::new(vec![
///     vec!["sunny", "play"],
///     vec!["rainy", "ntpl"],
/// ]).unwrap();
/// assert_eq!(entropy(&dataset), 1.0);
/// ```
pub fn entropy(dataset: &Dataset) -> f64 {
    shannon_entropy(&count_labels(&dataset.labels()), dataset.len())
}


/// Returns the Shannon entropy (base 2) of the given labels.
///
/// Returns [`TreeError::InvalidInput`] for an empty slice
/// since the entropy of an empty distribution is undefined.
pub fn entropy_of<S>(labels: &[S]) -> Result<f64>
    where S: AsRef<str>
{
    if labels.is_empty() {
        return Err(TreeError::invalid(
            "the entropy of an empty label set is undefined"
        ));
    }
    Ok(shannon_entropy(&count_labels(labels), labels.len()))
}


#[inline]
fn shannon_entropy(counts: &[(&str, usize)], total: usize) -> f64 {
    let total = total as f64;
    let h = counts.iter()
        .map(|&(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();

    // A single label yields `-0.0`, report it as `+0.0`.
    if h <= 0f64 { 0f64 } else { h }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn counts_keep_first_seen_order() {
        let counts = count_labels(&["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }


    #[test]
    fn single_label_has_zero_entropy() {
        let h = entropy_of(&["play", "play", "play"]).unwrap();
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }


    #[test]
    fn pure_dataset_has_positive_zero_entropy() {
        let dataset = Dataset::new(vec![
            vec!["a", "x"],
            vec!["b", "x"],
        ]).unwrap();
        let h = entropy(&dataset);
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());

        let h = entropy_of(&["p"]).unwrap();
        assert!(h.is_sign_positive());
    }


    #[test]
    fn uniform_over_four_labels() {
        let h = entropy_of(&["a", "b", "c", "d"]).unwrap();
        assert_abs_diff_eq!(h, 2.0, epsilon = 1e-12);
    }


    #[test]
    fn skewed_distribution() {
        // p = (1/4, 3/4)
        let h = entropy_of(&["a", "b", "b", "b"]).unwrap();
        let expected = -(0.25f64 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert_abs_diff_eq!(h, expected, epsilon = 1e-12);
    }


    #[test]
    fn empty_labels_are_rejected() {
        let labels: [&str; 0] = [];
        assert!(entropy_of(&labels).unwrap_err().is_invalid_input());
    }
}
