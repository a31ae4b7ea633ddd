use std::cmp::Ordering;

/// A token ID paired with its logit value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenLogit {
    pub token_id: u32,
    pub logit: f32,
}

/// Highest score first, lower token id first among equal scores.
///
/// NaN of either sign ranks above everything else so it is always visible.
fn by_rank(a: &TokenLogit, b: &TokenLogit) -> Ordering {
    let score = match (a.logit.is_nan(), b.logit.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.logit.total_cmp(&a.logit),
    };
    score.then_with(|| a.token_id.cmp(&b.token_id))
}

/// Returns the `k` highest-scoring entries of `row`, best first.
///
/// `k` is clamped to the row length. Only the selected prefix is sorted, so
/// the cost is a linear partition plus `k log k`.
pub fn select_top_k(row: &[f32], k: usize) -> Vec<TokenLogit> {
    let k = k.min(row.len());
    if k == 0 {
        return Vec::new();
    }

    let mut pairs: Vec<TokenLogit> = row
        .iter()
        .enumerate()
        .map(|(i, &logit)| TokenLogit {
            token_id: i as u32,
            logit,
        })
        .collect();

    if k < pairs.len() {
        pairs.select_nth_unstable_by(k - 1, by_rank);
        pairs.truncate(k);
    }
    pairs.sort_unstable_by(by_rank);
    pairs
}
