//! Sequence-similarity ratio for fuzzy FAQ matching.
//!
//! The metric is the longest-matching-blocks ratio `2·M / T`, where `M` is
//! the total length of all matching blocks between the two character
//! sequences and `T` is the combined length. Blocks are found by repeatedly
//! taking the longest common substring and recursing into the unmatched
//! pieces on either side. The FAQ acceptance threshold was tuned against
//! this metric, so an edit-distance metric is not a drop-in replacement:
//! it would shift which near-miss phrasings clear the cutoff.

use std::collections::HashMap;

/// Similarity ratio between `a` and `b` in `[0.0, 1.0]`.
///
/// Returns `1.0` when both strings are empty.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut matched = 0;
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k > 0 {
            matched += k;
            pending.push((alo, i, blo, j));
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, k)` such that `a[i..i + k] == b[j..j + k]`, preferring
/// the earliest `i` and then the earliest `j` among maximal blocks.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
    for j in blo..bhi {
        b_index.entry(b[j]).or_default().push(j);
    }

    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    // run_len[j] = length of the common run ending at a[i], b[j].
    let mut run_len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_run_len = HashMap::new();
        if let Some(positions) = b_index.get(&a[i]) {
            for &j in positions {
                let k = match j.checked_sub(1) {
                    Some(prev) => run_len.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_run_len.insert(j, k);
                if k > best_len {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_len = k;
                }
            }
        }
        run_len = next_run_len;
    }
    (best_i, best_j, best_len)
}
