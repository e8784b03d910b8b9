use crate::entry::Entry;
use std::fmt;

/// The kind of element a heap holds. A heap's kind is fixed by its first insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Entry,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Number => write!(f, "number"),
            Kind::Entry => write!(f, "entry"),
        }
    }
}

/// Something a [`MaxHeap`](crate::MaxHeap) can order: a readable and writable priority.
pub trait HeapItem {
    fn priority(&self) -> f64;

    fn set_priority(&mut self, priority: f64);

    fn kind(&self) -> Kind;
}

impl HeapItem for f64 {
    #[inline]
    fn priority(&self) -> f64 {
        *self
    }

    #[inline]
    fn set_priority(&mut self, priority: f64) {
        *self = priority;
    }

    #[inline]
    fn kind(&self) -> Kind {
        Kind::Number
    }
}

impl<T> HeapItem for Entry<T> {
    #[inline]
    fn priority(&self) -> f64 {
        Entry::priority(self)
    }

    #[inline]
    fn set_priority(&mut self, priority: f64) {
        Entry::set_priority(self, priority)
    }

    #[inline]
    fn kind(&self) -> Kind {
        Kind::Entry
    }
}

/// Either a bare number or an entry, for heaps whose kind is only known at runtime.
///
/// A `MaxHeap<HeapElement<T>>` takes whichever kind it sees first and rejects the other from
/// then on.
#[derive(Clone, Copy, Debug)]
pub enum HeapElement<T = ()> {
    Number(f64),
    Entry(Entry<T>),
}

impl<T> HeapElement<T> {
    #[inline]
    pub fn as_entry(&self) -> Option<&Entry<T>> {
        match self {
            HeapElement::Entry(entry) => Some(entry),
            HeapElement::Number(_) => None,
        }
    }

    #[inline]
    pub fn into_entry(self) -> Option<Entry<T>> {
        match self {
            HeapElement::Entry(entry) => Some(entry),
            HeapElement::Number(_) => None,
        }
    }
}

impl<T> HeapItem for HeapElement<T> {
    #[inline]
    fn priority(&self) -> f64 {
        match self {
            HeapElement::Number(x) => *x,
            HeapElement::Entry(entry) => entry.priority(),
        }
    }

    #[inline]
    fn set_priority(&mut self, priority: f64) {
        match self {
            HeapElement::Number(x) => *x = priority,
            HeapElement::Entry(entry) => entry.set_priority(priority),
        }
    }

    #[inline]
    fn kind(&self) -> Kind {
        match self {
            HeapElement::Number(_) => Kind::Number,
            HeapElement::Entry(_) => Kind::Entry,
        }
    }
}

impl<T> From<f64> for HeapElement<T> {
    #[inline]
    fn from(x: f64) -> Self {
        HeapElement::Number(x)
    }
}

impl<T> From<Entry<T>> for HeapElement<T> {
    #[inline]
    fn from(entry: Entry<T>) -> Self {
        HeapElement::Entry(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_dispatches_to_variant() {
        let mut number: HeapElement<&str> = 4.0f64.into();
        let mut entry: HeapElement<&str> = Entry::with_payload(2.0, "x").into();

        assert_eq!(number.kind(), Kind::Number);
        assert_eq!(entry.kind(), Kind::Entry);

        number.set_priority(6.0);
        entry.set_priority(7.0);
        assert_eq!(number.priority(), 6.0);
        assert_eq!(entry.priority(), 7.0);

        assert!(number.as_entry().is_none());
        assert_eq!(entry.as_entry().and_then(Entry::payload), Some(&"x"));
        assert_eq!(entry.into_entry().map(|e| e.priority()), Some(7.0));
    }

    #[test]
    fn number_overwrites_itself() {
        let mut x = 1.5f64;
        HeapItem::set_priority(&mut x, -2.0);
        assert_eq!(x, -2.0);
        assert_eq!(x.kind(), Kind::Number);
    }
}
