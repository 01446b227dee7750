use std::ops::Deref;

/// Growable array whose capacity is fixed at construction.
///
/// The backing buffer is allocated once; pushing beyond the capacity is a
/// logic error and panics instead of reallocating.
#[derive(Clone, Debug)]
pub struct CappedVec<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> CappedVec<T> {
    pub fn new(capacity: usize) -> CappedVec<T> {
        CappedVec {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }
    pub fn push(&mut self, value: T) {
        assert!(
            self.data.len() < self.capacity,
            "CappedVec overflow (capacity {})",
            self.capacity
        );
        self.data.push(value);
    }
    pub fn clear(&mut self) {
        self.data.clear();
    }
    /// Drops the first `n` elements, shifting the rest to the front.
    pub fn remove_front(&mut self, n: usize) {
        self.data.drain(..n);
    }
}

impl<T> Deref for CappedVec<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_vec() {
        let mut vec = CappedVec::new(3);
        assert!(vec.is_empty());
        vec.push(1);
        vec.push(2);
        vec.push(3);
        assert!(vec.is_full());
        assert_eq!(&*vec, &[1, 2, 3]);

        vec.remove_front(2);
        assert_eq!(vec.len(), 1);
        assert_eq!(vec[0], 3);
        vec.push(4);
        vec.push(5);
        assert!(vec.is_full());
        assert_eq!(&*vec, &[3, 4, 5]);

        vec.clear();
        assert!(vec.is_empty());
        vec.push(6);
        assert_eq!(vec.iter().sum::<i32>(), 6);
    }

    #[test]
    #[should_panic]
    fn test_capped_vec_overflow() {
        let mut vec = CappedVec::new(1);
        vec.push(0);
        vec.push(1);
    }
}
