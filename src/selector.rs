use std::cmp::Ordering;

use crate::error::SelectError;
use crate::heap::OrderedHeap;
use crate::types::Point;

/// A heap with a fixed maximum capacity that keeps the k best elements.
///
/// The selector efficiently tracks the k best items in a stream by:
/// 1. Maintaining a heap of at most k elements whose root is the *worst*
///    of the currently retained items
/// 2. Inserting every incoming item
/// 3. Evicting the root whenever the size exceeds k
///
/// `worst_first` decides what "best" means: it must order so that the
/// element to evict first compares least. An ascending relation keeps the
/// k largest; a descending-by-distance relation keeps the k closest.
///
/// Complexity:
/// - Push: O(log k)
/// - Memory: O(k) instead of O(total items)
pub struct BoundedSelector<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    heap: OrderedHeap<T, F>,
    capacity: usize,
}

impl<T, F> BoundedSelector<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a selector retaining at most `capacity` elements.
    pub fn new(capacity: usize, worst_first: F) -> Result<Self, SelectError> {
        if capacity == 0 {
            return Err(SelectError::InvalidArgument(
                "selector capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            heap: OrderedHeap::with_capacity(capacity + 1, worst_first),
            capacity,
        })
    }

    /// Offers an item, evicting the current worst if capacity is exceeded.
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        if self.heap.len() > self.capacity {
            // len > capacity >= 1, so the root exists
            let _ = self.heap.pop();
        }
    }

    /// Returns the worst retained element, the "k-th best" seen so far.
    pub fn worst(&self) -> Result<&T, SelectError> {
        self.heap.peek()
    }

    /// Consumes the selector and returns the worst retained element.
    pub fn into_worst(mut self) -> Result<T, SelectError> {
        self.heap.pop()
    }

    /// Returns the number of retained elements, never more than capacity.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the selector and returns the retained elements, best first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut items = self.heap.into_sorted_vec();
        items.reverse();
        items
    }
}

/// Returns the k-th largest element of `items`.
///
/// `k` greater than the input length is not an error: the selector retains
/// every element and the result is the overall minimum.
pub fn kth_largest<T>(items: &[T], k: usize) -> Result<T, SelectError>
where
    T: Ord + Clone,
{
    if k == 0 {
        return Err(SelectError::InvalidArgument(
            "k must be positive".to_string(),
        ));
    }
    if items.is_empty() {
        return Err(SelectError::InvalidArgument(
            "input sequence is empty".to_string(),
        ));
    }

    let mut selector = BoundedSelector::new(k, |a: &T, b: &T| a.cmp(b))?;
    for item in items {
        selector.push(item.clone());
    }

    selector.into_worst()
}

/// Returns the k points of `points` closest to the origin, nearest first.
///
/// Distance comparisons use the squared Euclidean distance. The retained
/// set is what the algorithm guarantees; sorting nearest-first is a
/// deterministic finishing step over that set (points at equal distance
/// keep no particular relative order). `k` greater than the input length
/// retains all points.
pub fn k_closest_points(points: &[Point], k: usize) -> Result<Vec<Point>, SelectError> {
    if k == 0 {
        return Err(SelectError::InvalidArgument(
            "k must be positive".to_string(),
        ));
    }

    // Farthest retained point at the root: descending distance relation.
    let mut selector = BoundedSelector::new(k, |a: &Point, b: &Point| {
        b.squared_distance().cmp(&a.squared_distance())
    })?;
    for point in points {
        selector.push(*point);
    }

    Ok(selector.into_sorted_vec())
}
