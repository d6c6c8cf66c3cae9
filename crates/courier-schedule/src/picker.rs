use rand::Rng;

/// Uniformly choose one element of `items`.
///
/// Panics on an empty slice. Callers gate on the message store's non-empty
/// invariant, so hitting the panic is a bug, not a runtime condition.
/// Consecutive calls may return the same element; no repeat-avoidance is
/// performed.
pub fn pick<T>(items: &[T]) -> &T {
    assert!(!items.is_empty(), "pick requires a non-empty slice");
    let idx = rand::rng().random_range(0..items.len());
    &items[idx]
}
