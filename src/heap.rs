use crate::error::{priority_from, HeapError};
use crate::item::{HeapItem, Kind};
use num::ToPrimitive;
use ordered_float::OrderedFloat;

/// Index of the left child of `i`.
#[inline]
pub const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of `i`.
#[inline]
pub const fn right(i: usize) -> usize {
    2 * (i + 1)
}

/// Index of the parent of `i`. The root has no parent, so `i` must be non-zero.
#[inline]
pub const fn parent(i: usize) -> usize {
    debug_assert!(i != 0);
    (i - 1) / 2
}

#[inline]
fn key<T: HeapItem>(item: &T) -> OrderedFloat<f64> {
    OrderedFloat(item.priority())
}

/// O(log n)
fn sift_up<T: HeapItem>(data: &mut [T], mut node: usize) {
    while node != 0 {
        let parent = parent(node);

        if key(&data[parent]) < key(&data[node]) {
            data.swap(parent, node);
            node = parent;
        } else {
            break;
        }
    }
}

/// Walks down to a leaf, swapping with the larger child whenever it's larger.
///
/// O(log n)
fn sift_down<T: HeapItem>(data: &mut [T], mut node: usize) {
    loop {
        let left = left(node);
        if data.len() <= left {
            break;
        }

        let right = right(node);
        let child = if right < data.len() && key(&data[left]) < key(&data[right]) {
            right
        } else {
            left
        };

        if key(&data[node]) < key(&data[child]) {
            data.swap(node, child);
        }
        node = child;
    }
}

/// Rearranges `items` into a max-heap.
///
/// O(n)
pub fn build_heap<T: HeapItem>(mut items: Vec<T>) -> Vec<T> {
    for i in (0..items.len() / 2).rev() {
        sift_down(&mut items, i);
    }
    items
}

/// Sorts a max-heap in ascending order.
///
/// `items` has to satisfy the heap property already (see [`build_heap`]), otherwise the output
/// isn't sorted.
///
/// O(n log n)
pub fn heap_sort<T: HeapItem>(mut items: Vec<T>) -> Vec<T> {
    for end in (1..items.len()).rev() {
        items.swap(0, end);
        sift_down(&mut items[..end], 0);
    }
    items
}

/// Checks that every element is no greater than its parent.
pub fn is_heap<T: HeapItem>(items: &[T]) -> bool {
    (1..items.len()).all(|i| key(&items[i]) <= key(&items[parent(i)]))
}

/// A binary max-heap of numbers or [`Entry`](crate::Entry)s, ordered by priority.
///
/// The heap's [`Kind`] is taken from the first element inserted and never changes. With
/// `MaxHeap<f64>` or `MaxHeap<Entry<T>>` that's a given; a `MaxHeap<HeapElement<T>>` rejects
/// elements of the other kind with [`HeapError::ModeConflict`].
#[derive(Clone, Debug)]
pub struct MaxHeap<T: HeapItem> {
    data: Vec<T>,
    mode: Option<Kind>,
}

impl<T: HeapItem> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HeapItem> MaxHeap<T> {
    /// O(1)
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            mode: None,
        }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            mode: None,
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The kind of element this heap holds, or `None` before the first insertion.
    #[inline]
    pub fn mode(&self) -> Option<Kind> {
        self.mode
    }

    /// O(1)
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// The elements in storage order: index `i` has children `2i+1` and `2i+2`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<T> {
        heap_sort(self.data)
    }

    /// O(1)
    #[inline]
    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts `item`, unless its kind differs from the heap's or its priority is NaN. A
    /// rejected item leaves the heap as it was.
    ///
    /// O(log n)
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        let kind = item.kind();
        match self.mode {
            Some(mode) if mode != kind => {
                log::warn!("rejected {} insert into {} heap", kind, mode);
                return Err(HeapError::ModeConflict {
                    heap: mode,
                    item: kind,
                });
            }
            _ => {}
        }
        if item.priority().is_nan() {
            return Err(HeapError::InvalidPriority);
        }

        self.mode = Some(kind);
        let last = self.len();
        self.data.push(item);
        sift_up(&mut self.data, last);

        Ok(())
    }

    /// O(log n)
    pub fn extract_max(&mut self) -> Option<T> {
        use std::mem;

        let mut res = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            res = mem::replace(root, res);
            sift_down(&mut self.data, 0);
        }

        Some(res)
    }

    /// Index of the first element whose priority equals `item`'s.
    ///
    /// O(n)
    pub fn position(&self, item: &T) -> Option<usize> {
        let target = key(item);
        self.data.iter().position(|x| key(x) == target)
    }

    /// Changes the priority of the first element equal to `item` (same priority).
    ///
    /// O(n)
    pub fn update_priority<N: ToPrimitive>(
        &mut self,
        item: &T,
        new_priority: N,
    ) -> Result<(), HeapError> {
        match self.position(item) {
            Some(index) => self.update_priority_at(index, new_priority),
            None => {
                log::debug!("no element with priority {} to update", item.priority());
                Err(HeapError::NotFound)
            }
        }
    }

    /// Changes the priority of the element at `index` and moves it to where it now belongs.
    ///
    /// Both the index and the priority are checked before anything is written.
    ///
    /// O(log n)
    pub fn update_priority_at<N: ToPrimitive>(
        &mut self,
        index: usize,
        new_priority: N,
    ) -> Result<(), HeapError> {
        let len = self.len();
        if len <= index {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        let priority = priority_from(new_priority)?;

        log::trace!(
            "priority at {}: {} -> {}",
            index,
            self.data[index].priority(),
            priority
        );
        self.data[index].set_priority(priority);

        if index != 0 && key(&self.data[parent(index)]) < key(&self.data[index]) {
            sift_up(&mut self.data, index);
        }

        let current = key(&self.data[index]);
        let smaller_than_child = [left(index), right(index)]
            .iter()
            .any(|&child| child < len && current < key(&self.data[child]));
        if smaller_than_child {
            sift_down(&mut self.data, index);
        }

        Ok(())
    }
}

impl<T: HeapItem + Clone> MaxHeap<T> {
    /// All elements in ascending order. The heap itself is left untouched.
    ///
    /// O(n log n)
    pub fn sorted(&self) -> Vec<T> {
        heap_sort(self.data.clone())
    }
}

impl<T: HeapItem> TryFrom<Vec<T>> for MaxHeap<T> {
    type Error = HeapError;

    /// O(n)
    fn try_from(items: Vec<T>) -> Result<Self, HeapError> {
        let mode = items.first().map(HeapItem::kind);
        for item in items.iter() {
            if let Some(mode) = mode {
                if item.kind() != mode {
                    return Err(HeapError::ModeConflict {
                        heap: mode,
                        item: item.kind(),
                    });
                }
            }
            if item.priority().is_nan() {
                return Err(HeapError::InvalidPriority);
            }
        }

        Ok(Self {
            data: build_heap(items),
            mode,
        })
    }
}

impl<'a, T: HeapItem> IntoIterator for &'a MaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
