/*!
# Edge Weights

Weights are signed integers. Absent edges and unreached vertices carry the sentinel
[`INFINITE_WEIGHT`], a fixed large constant rather than a true infinity, so that
relaxation arithmetic never needs a separate reachability check.
*/

/// Edge weights may be negative unless an algorithm states otherwise
pub type Weight = i64;

/// Sentinel standing in for "no edge" / "unreachable".
///
/// Chosen well below `Weight::MAX` so that adding two finite weights never overflows.
pub const INFINITE_WEIGHT: Weight = Weight::MAX / 4;

/// Adds two weights while keeping the sentinel absorbing:
/// `INFINITE_WEIGHT + x == INFINITE_WEIGHT` for every `x`, and finite sums are clamped
/// to the sentinel instead of overflowing.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// assert_eq!(weight_add(3, -5), -2);
/// assert_eq!(weight_add(INFINITE_WEIGHT, -5), INFINITE_WEIGHT);
/// assert_eq!(weight_add(-7, INFINITE_WEIGHT), INFINITE_WEIGHT);
/// ```
#[inline]
pub fn weight_add(a: Weight, b: Weight) -> Weight {
    if is_infinite(a) || is_infinite(b) {
        INFINITE_WEIGHT
    } else {
        a.saturating_add(b).min(INFINITE_WEIGHT)
    }
}

/// Returns *true* if `w` is the sentinel (or beyond it)
#[inline]
pub fn is_infinite(w: Weight) -> bool {
    w >= INFINITE_WEIGHT
}

/// Maps the sentinel to `None`
#[inline]
pub fn finite_weight(w: Weight) -> Option<Weight> {
    (!is_infinite(w)).then_some(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_absorbs() {
        assert_eq!(weight_add(INFINITE_WEIGHT, INFINITE_WEIGHT), INFINITE_WEIGHT);
        assert_eq!(weight_add(INFINITE_WEIGHT, Weight::MIN / 4), INFINITE_WEIGHT);
        assert_eq!(weight_add(INFINITE_WEIGHT - 1, 10), INFINITE_WEIGHT);
        assert_eq!(weight_add(-4, 7), 3);
    }

    #[test]
    fn finite() {
        assert_eq!(finite_weight(0), Some(0));
        assert_eq!(finite_weight(-12), Some(-12));
        assert_eq!(finite_weight(INFINITE_WEIGHT), None);
    }
}
