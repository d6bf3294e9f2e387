use super::entropy::count_labels;
use crate::error::{Result, TreeError};


/// Returns the most frequent label.
/// If several labels share the highest count,
/// the one that occurs first in `labels` wins.
///
/// Returns [`TreeError::InvalidInput`] for an empty slice.
///
/// ```
/// use c45::majority;
///
/// let label = majority(&["ntpl", "play", "play", "ntpl", "play"]).unwrap();
/// assert_eq!(label, "play");
/// ```
pub fn majority<S>(labels: &[S]) -> Result<&str>
    where S: AsRef<str>
{
    let mut counts = count_labels(labels);

    // Stable sort, so the first-seen label survives a tie.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.first()
        .map(|&(label, _)| label)
        .ok_or_else(|| TreeError::invalid("no label to vote on"))
}
