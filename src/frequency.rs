use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SelectError;
use crate::heap::OrderedHeap;

/// A value with its occurrence count and the index of its first sighting.
struct Ranked<'a, T> {
    value: &'a T,
    count: u64,
    first_seen: usize,
}

/// Returns the `k` most frequent values in `items`, most frequent first.
///
/// Equal counts break by first occurrence: the value seen earliest in the
/// input ranks higher. The tie-break index is recorded while counting, so
/// the result never depends on hash-map iteration order.
pub fn top_k_frequent<T>(items: &[T], k: usize) -> Result<Vec<T>, SelectError>
where
    T: Eq + Hash + Clone,
{
    if k == 0 {
        return Err(SelectError::InvalidArgument(
            "k must be positive".to_string(),
        ));
    }

    let mut counts: HashMap<&T, (u64, usize)> = HashMap::new();
    for (index, value) in items.iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    if k > counts.len() {
        return Err(SelectError::InvalidArgument(format!(
            "k ({}) exceeds the number of distinct values ({})",
            k,
            counts.len()
        )));
    }

    let mut heap = OrderedHeap::with_capacity(counts.len(), |a: &Ranked<T>, b: &Ranked<T>| {
        b.count
            .cmp(&a.count)
            .then(a.first_seen.cmp(&b.first_seen))
    });
    for (value, (count, first_seen)) in counts {
        heap.push(Ranked {
            value,
            count,
            first_seen,
        });
    }

    let mut result = Vec::with_capacity(k);
    for _ in 0..k {
        result.push(heap.pop()?.value.clone());
    }
    Ok(result)
}
