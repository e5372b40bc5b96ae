use rand::seq::index;
use rand::Rng;

use crate::WortError;

/// Draw `n` distinct words uniformly at random without replacement.
///
/// Output order is arbitrary. Fails with
/// [`WortError::InsufficientCandidates`] when `n` exceeds the number of
/// candidates.
pub fn sample<R: Rng + ?Sized>(
    words: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>, WortError> {
    if n > words.len() {
        return Err(WortError::InsufficientCandidates {
            requested: n,
            available: words.len(),
        });
    }
    Ok(index::sample(rng, words.len(), n)
        .into_iter()
        .map(|i| words[i].clone())
        .collect())
}

/// Check a user supplied batch size against `1..=max`.
pub fn validate_count(n: usize, max: usize) -> Result<usize, WortError> {
    if n == 0 || n > max {
        return Err(WortError::InvalidCount { requested: n, max });
    }
    Ok(n)
}
