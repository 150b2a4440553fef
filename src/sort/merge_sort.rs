use std::cmp::Ordering;

/// Sorts a sequence in ascending order with a top-down merge sort.
///
/// The input is consumed and a new vector is returned. Sequences of length
/// zero or one are returned as-is without allocating.
///
/// Equal elements are not guaranteed to keep their input order: the merge
/// step emits the right-hand element first on ties (see [`merge`]).
///
/// # Examples
/// ```
/// use route_sort::merge_sort;
///
/// assert_eq!(merge_sort(vec![3, 4, 0, 1]), vec![0, 1, 3, 4]);
/// ```
pub fn merge_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Sorts a sequence with a caller-supplied total order.
///
/// `compare` must be a valid total order; inconsistent comparisons still
/// terminate but the output order is unspecified.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare)
}

/// Sorts a sequence by the key extracted from each element.
pub fn merge_sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(items, |a, b| key(a).cmp(&key(b)))
}

/// Merges two ascending sequences into one ascending sequence.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    merge_by(left, right, T::cmp)
}

/// Merges two sequences already sorted by `compare`.
///
/// The left front is taken only when it compares strictly less than the
/// right front. On a tie the right element goes first. Once either side runs
/// out, the rest of the other side is appended in order.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Less,
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    // At most one of these still has elements
    merged.extend(left);
    merged.extend(right);
    merged
}

fn sort_recursive<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mid = items.len() / 2;
    let right = items.split_off(mid);

    let left = sort_recursive(items, compare);
    let right = sort_recursive(right, compare);

    merge_by(left, right, compare)
}
