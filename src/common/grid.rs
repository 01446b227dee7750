use super::LP;
use std::ops::{Index, IndexMut};

/// Row-major 2D buffer, allocated once.
///
/// A `Grid` laid out on the doubled loop coordinates is addressed by `LP`, or
/// directly by the flat id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T: Clone> {
    height: i32,
    width: i32,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(height: i32, width: i32, default: T) -> Grid<T> {
        Grid {
            height,
            width,
            data: vec![default; (height * width) as usize],
        }
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn is_valid_lp(&self, pos: LP) -> bool {
        0 <= pos.0 && pos.0 < self.height && 0 <= pos.1 && pos.1 < self.width
    }
    pub fn index_lp(&self, pos: LP) -> usize {
        (pos.0 * self.width + pos.1) as usize
    }
    pub fn lp(&self, idx: usize) -> LP {
        let w = self.width as usize;
        LP((idx / w) as i32, (idx % w) as i32)
    }
}

impl<T: Clone> Index<usize> for Grid<T> {
    type Output = T;
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}
impl<T: Clone> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}
impl<T: Clone> Index<LP> for Grid<T> {
    type Output = T;
    fn index(&self, pos: LP) -> &T {
        assert!(self.is_valid_lp(pos), "{:?} is out of the grid", pos);
        let idx = self.index_lp(pos);
        &self.data[idx]
    }
}
impl<T: Clone> IndexMut<LP> for Grid<T> {
    fn index_mut(&mut self, pos: LP) -> &mut T {
        assert!(self.is_valid_lp(pos), "{:?} is out of the grid", pos);
        let idx = self.index_lp(pos);
        &mut self.data[idx]
    }
}
