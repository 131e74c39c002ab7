/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Push `value` away from `other` by `delta`.
///
/// The endpoint that sits lower moves down and the other one moves up, so a
/// selection `[start, end]` grows by `delta` on both sides whatever its order.
pub fn widen_away_from(value: f64, other: f64, delta: f64) -> f64 {
    if value < other { value - delta } else { value + delta }
}
