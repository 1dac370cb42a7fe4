use super::types::Score;

/// Minimax over a perfect binary tree whose leaves are `scores`.
///
/// Node `index` at `depth` has children `2 * index` and `2 * index + 1`; a node
/// at `depth == height` is the leaf `scores[index]`. Start from
/// `minimax_abstract(0, 0, true, scores, height)`. Indices past the end of
/// `scores` panic, so `scores.len()` must be `2^height`.
pub fn minimax_abstract(
    depth: usize,
    index: usize,
    is_maximizing: bool,
    scores: &[Score],
    height: usize,
) -> Score {
    if depth == height {
        return scores[index];
    }

    let left = minimax_abstract(depth + 1, index * 2, !is_maximizing, scores, height);
    let right = minimax_abstract(depth + 1, index * 2 + 1, !is_maximizing, scores, height);

    if is_maximizing {
        left.max(right)
    } else {
        left.min(right)
    }
}

/// log2 of the leaf count, or `None` when it is not a power of two.
pub fn tree_height(leaf_count: usize) -> Option<usize> {
    if leaf_count.is_power_of_two() {
        Some(leaf_count.trailing_zeros() as usize)
    } else {
        None
    }
}
