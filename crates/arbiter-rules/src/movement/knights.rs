//! Knight geometry.

use arbiter_core::Square;

/// Return `true` if `to` is one of the eight L-shaped jumps from `from`.
///
/// Knights jump, so nothing in between is examined.
#[inline]
pub(super) fn reachable(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}
