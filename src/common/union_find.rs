/// Disjoint sets over `0..size`.
///
/// `parent[i]` holds the parent of `i`, or `-(size of the set)` if `i` is a root.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<i32>,
}

impl UnionFind {
    pub fn new(size: usize) -> UnionFind {
        UnionFind {
            parent: vec![-1; size],
        }
    }
    pub fn root(&mut self, i: usize) -> usize {
        if self.parent[i] < 0 {
            i
        } else {
            let p = self.parent[i] as usize;
            let ret = self.root(p);
            self.parent[i] = ret as i32;
            ret
        }
    }
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.root(u) == self.root(v)
    }
    /// Merges the sets of `u` and `v`; returns `false` if they were already one set.
    pub fn join(&mut self, u: usize, v: usize) -> bool {
        let mut u = self.root(u);
        let mut v = self.root(v);
        if u == v {
            return false;
        }
        if self.parent[u] > self.parent[v] {
            ::std::mem::swap(&mut u, &mut v);
        }
        self.parent[u] += self.parent[v];
        self.parent[v] = u as i32;
        true
    }
}
