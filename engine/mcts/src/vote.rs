//! Root-level vote across independent replica trees.
//!
//! Every replica expands the same root with the same deterministic move
//! order, so child `i` means the same move in every tree. Visit counts are
//! summed per position and the position with the largest total wins.

use engine_core::SearchError;
use rand::Rng;

use crate::tree::MctsTree;

/// Sum root-child visit counts position by position across replicas.
///
/// Fails with [`SearchError::ReplicaMismatch`] if a replica disagrees with
/// the first one about how many children the root has.
pub fn tally<S>(trees: &[MctsTree<S>]) -> Result<Vec<u64>, SearchError> {
    let Some(first) = trees.first() else {
        return Ok(Vec::new());
    };
    let expected = first.root_children().len();
    let mut totals = vec![0u64; expected];

    for tree in trees {
        let visits = tree.root_child_visits();
        if visits.len() != expected {
            return Err(SearchError::ReplicaMismatch {
                expected,
                actual: visits.len(),
            });
        }
        for (total, v) in totals.iter_mut().zip(visits) {
            *total += u64::from(v);
        }
    }

    Ok(totals)
}

/// Index of the largest total.
///
/// A strictly larger total replaces the running best. An exact tie replaces
/// it on a fair coin flip, so two tied positions are each picked about half
/// the time. With more than two tied positions the later ones are favoured.
pub fn pick_most_visited<R: Rng + ?Sized>(totals: &[u64], rng: &mut R) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;

    for (index, &total) in totals.iter().enumerate() {
        best = match best {
            None => Some((index, total)),
            Some((_, best_total)) if total > best_total => Some((index, total)),
            Some((_, best_total)) if total == best_total && rng.gen_bool(0.5) => {
                Some((index, total))
            }
            keep => keep,
        };
    }

    best.map(|(index, _)| index)
}
