use std::ops::{Add, Mul, Sub};

mod capped_vec;
mod fix_vec;
mod grid;
mod queue;
mod union_find;

pub use self::capped_vec::*;
pub use self::fix_vec::*;
pub use self::grid::*;
pub use self::queue::*;
pub use self::union_find::*;

/// Cell coordinate `(y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct P(pub i32, pub i32);

/// Coordinate on the doubled grid. For a field of H x W cells it ranges over
/// (2H+1) x (2W+1): both even is a vertex, both odd is a cell, otherwise an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LP(pub i32, pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D(pub i32, pub i32);

pub const FOUR_NEIGHBOURS: [D; 4] = [D(-1, 0), D(0, -1), D(1, 0), D(0, 1)];

impl LP {
    pub fn of_cell(pos: P) -> LP {
        LP(pos.0 * 2 + 1, pos.1 * 2 + 1)
    }
    pub fn is_vertex(self) -> bool {
        self.0 % 2 == 0 && self.1 % 2 == 0
    }
    pub fn is_edge(self) -> bool {
        (self.0 + self.1) % 2 != 0
    }
    pub fn is_cell(self) -> bool {
        self.0 % 2 != 0 && self.1 % 2 != 0
    }
    /// The cell this position belongs to; only meaningful for cells.
    /// Odd coordinates of the cells just outside the field map to -1 / H / W.
    pub fn as_cell(self) -> P {
        P((self.0 - 1).div_euclid(2), (self.1 - 1).div_euclid(2))
    }
    /// The two cells separated by this edge.
    pub fn separated_cells(self) -> (P, P) {
        if self.0 % 2 != 0 {
            ((self + D(0, -1)).as_cell(), (self + D(0, 1)).as_cell())
        } else {
            ((self + D(-1, 0)).as_cell(), (self + D(1, 0)).as_cell())
        }
    }
    /// The two vertices this edge connects.
    pub fn end_vertices(self) -> (LP, LP) {
        if self.0 % 2 != 0 {
            (self + D(-1, 0), self + D(1, 0))
        } else {
            (self + D(0, -1), self + D(0, 1))
        }
    }
}

impl Add<D> for P {
    type Output = P;
    fn add(self, rhs: D) -> P {
        P(self.0 + rhs.0, self.1 + rhs.1)
    }
}
impl Sub<D> for P {
    type Output = P;
    fn sub(self, rhs: D) -> P {
        P(self.0 - rhs.0, self.1 - rhs.1)
    }
}
impl Add<D> for LP {
    type Output = LP;
    fn add(self, rhs: D) -> LP {
        LP(self.0 + rhs.0, self.1 + rhs.1)
    }
}
impl Sub<D> for LP {
    type Output = LP;
    fn sub(self, rhs: D) -> LP {
        LP(self.0 - rhs.0, self.1 - rhs.1)
    }
}
impl Add<D> for D {
    type Output = D;
    fn add(self, rhs: D) -> D {
        D(self.0 + rhs.0, self.1 + rhs.1)
    }
}
impl Sub<D> for D {
    type Output = D;
    fn sub(self, rhs: D) -> D {
        D(self.0 - rhs.0, self.1 - rhs.1)
    }
}
impl Mul<i32> for D {
    type Output = D;
    fn mul(self, rhs: i32) -> D {
        D(self.0 * rhs, self.1 * rhs)
    }
}
