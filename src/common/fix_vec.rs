use std::ops::Index;

/// Stack-allocated vector holding at most `N` elements.
#[derive(Clone, Copy, Debug)]
pub struct FixVec<T: Copy + Default, const N: usize> {
    data: [T; N],
    idx: usize,
}

impl<T: Copy + Default, const N: usize> FixVec<T, N> {
    pub fn new() -> FixVec<T, N> {
        FixVec {
            data: [T::default(); N],
            idx: 0,
        }
    }
    pub fn push(&mut self, e: T) {
        let idx2 = self.idx;
        self.idx += 1;
        self.data[idx2] = e;
    }
    pub fn len(&self) -> usize {
        self.idx
    }
    pub fn is_empty(&self) -> bool {
        self.idx == 0
    }
    pub fn iter(&self) -> ::std::slice::Iter<'_, T> {
        self.data[0..self.idx].iter()
    }
}

impl<T: Copy + Default, const N: usize> Default for FixVec<T, N> {
    fn default() -> FixVec<T, N> {
        FixVec::new()
    }
}
impl<T: Copy + Default, const N: usize> Index<usize> for FixVec<T, N> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[0..self.idx][index]
    }
}
impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a FixVec<T, N> {
    type Item = &'a T;
    type IntoIter = ::std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data[0..self.idx].iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_vec() {
        let mut vec = FixVec::<i32, 4>::new();
        assert!(vec.is_empty());
        vec.push(3);
        vec.push(1);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec[1], 1);
        assert_eq!(vec.iter().cloned().collect::<Vec<_>>(), vec![3, 1]);

        let mut sum = 0;
        for &v in &vec {
            sum += v;
        }
        assert_eq!(sum, 4);
    }

    #[test]
    #[should_panic]
    fn test_fix_vec_index_beyond_len() {
        let mut vec = FixVec::<i32, 4>::new();
        vec.push(0);
        let _ = vec[1];
    }

    #[test]
    #[should_panic]
    fn test_fix_vec_overflow() {
        let mut vec = FixVec::<i32, 2>::new();
        vec.push(0);
        vec.push(0);
        vec.push(0);
    }
}
