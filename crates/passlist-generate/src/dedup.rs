use std::collections::HashSet;

/// Removes exact duplicates, keeping the first occurrence of each candidate.
pub fn dedup_preserving_order(candidates: Vec<String>) -> Vec<String> {
    let first_seen: Vec<bool> = {
        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .iter()
            .map(|candidate| seen.insert(candidate.as_str()))
            .collect()
    };

    candidates
        .into_iter()
        .zip(first_seen)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect()
}
