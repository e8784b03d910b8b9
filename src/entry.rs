use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A priority paired with an optional payload.
///
/// Entries compare by priority alone, so two entries with equal priorities are equal no matter
/// what they carry. The priority can only be rewritten through [`Entry::set_priority`]; once an
/// entry is inside a [`MaxHeap`](crate::MaxHeap) the heap hands out shared references only, so
/// every change goes through the heap and keeps it ordered.
#[derive(Clone, Copy, Debug, Default)]
pub struct Entry<T = ()> {
    priority: f64,
    payload: Option<T>,
}

impl<T> Entry<T> {
    #[inline]
    pub const fn new(priority: f64) -> Self {
        Self {
            priority,
            payload: None,
        }
    }

    #[inline]
    pub const fn with_payload(priority: f64, payload: T) -> Self {
        Self {
            priority,
            payload: Some(payload),
        }
    }

    #[inline]
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Overwrites the priority. Doesn't move anything: repositioning is the heap's job.
    #[inline]
    pub fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    #[inline]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    #[inline]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    #[inline]
    pub fn into_parts(self) -> (f64, Option<T>) {
        (self.priority, self.payload)
    }

    #[inline]
    fn key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.priority)
    }
}

impl<T> PartialEq for Entry<T> {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool {
        self.key() == rhs.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<T> Ord for Entry<T> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.key().cmp(&rhs.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_priority() {
        let a = Entry::with_payload(7.1, "a");
        let b = Entry::with_payload(8.0, "b");
        assert!(b > a);
        assert!(a < b);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn equality_ignores_payload() {
        let a = Entry::with_payload(3.0, "left");
        let b = Entry::with_payload(3.0, "right");
        let c: Entry<&str> = Entry::new(3.0);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, Entry::new(4.0));
    }

    #[test]
    fn set_priority_keeps_payload() {
        let mut entry = Entry::with_payload(1.0, String::from("job"));
        entry.set_priority(9.5);
        assert_eq!(entry.priority(), 9.5);
        assert_eq!(entry.payload().map(String::as_str), Some("job"));

        if let Some(payload) = entry.payload_mut() {
            payload.push_str("-2");
        }
        assert_eq!(entry.into_parts(), (9.5, Some(String::from("job-2"))));
    }

    #[test]
    fn payload_is_optional() {
        let entry: Entry = Entry::new(2.0);
        assert_eq!(entry.payload(), None);
        assert_eq!(entry.into_payload(), None);
    }
}
