//! Grid graph with hex adjacency.
//!
//! The graph stores one value per cell of an NxN grid in a flat row-major
//! vector. Edges are implicit: every cell is joined to the in-bounds cells at
//! the [`HEX_OFFSETS`]. Connectivity queries only walk through cells holding
//! a given value, which is how a side's chain of stones is traced.

use crate::constants::HEX_OFFSETS;

/// A cell on the grid, as `(row, col)`.
pub type Point = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph<T> {
    size: usize,
    nodes: Vec<T>,
}

impl<T: Copy + PartialEq> AdjacencyGraph<T> {
    /// Create a `size` x `size` graph with every cell set to `value`.
    pub fn new(size: usize, value: T) -> Self {
        Self {
            size,
            nodes: vec![value; size * size],
        }
    }

    /// Number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, (row, col): Point) -> usize {
        assert!(
            row < self.size && col < self.size,
            "point ({row}, {col}) out of bounds for size {}",
            self.size
        );
        row * self.size + col
    }

    #[inline]
    fn point(&self, i: usize) -> Point {
        (i / self.size, i % self.size)
    }

    pub fn get(&self, p: Point) -> T {
        self.nodes[self.idx(p)]
    }

    pub fn set(&mut self, p: Point, value: T) {
        let i = self.idx(p);
        self.nodes[i] = value;
    }

    pub fn is_valid_coordinate(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Flat indices of the hex neighbours of `i` holding `value`.
    fn neighbor_indices(&self, i: usize, value: T) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.point(i);
        HEX_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if !self.is_valid_coordinate(r, c) {
                return None;
            }
            let j = r as usize * self.size + c as usize;
            (self.nodes[j] == value).then_some(j)
        })
    }

    /// Hex neighbours of `p` whose value equals `value`, in offset order.
    ///
    /// # Panics
    /// If `p` is outside the grid.
    pub fn neighbors(&self, p: Point, value: T) -> Vec<Point> {
        self.neighbor_indices(self.idx(p), value)
            .map(|j| self.point(j))
            .collect()
    }

    /// Whether a path of `value` cells joins `source` to `destination`.
    ///
    /// Always false when `source` itself does not hold `value`, including the
    /// case `source == destination`.
    ///
    /// # Panics
    /// If either point is outside the grid.
    pub fn is_connected(&self, source: Point, destination: Point, value: T) -> bool {
        assert!(
            destination.0 < self.size && destination.1 < self.size,
            "point {destination:?} out of bounds"
        );
        self.reaches(std::iter::once(source), |p| p == destination, value)
    }

    /// Whether any of `sources` holding `value` reaches a cell accepted by
    /// `is_target` through `value` cells.
    ///
    /// Sources that do not hold `value` are skipped. One traversal covers
    /// all sources, so this equals "some source is connected to some target".
    pub fn reaches<I, F>(&self, sources: I, is_target: F, value: T) -> bool
    where
        I: IntoIterator<Item = Point>,
        F: Fn(Point) -> bool,
    {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = Vec::with_capacity(self.nodes.len());

        for p in sources {
            let i = self.idx(p);
            if self.nodes[i] == value && !visited[i] {
                visited[i] = true;
                stack.push(i);
            }
        }

        while let Some(u) = stack.pop() {
            if is_target(self.point(u)) {
                return true;
            }
            for v in self.neighbor_indices(u, value) {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        false
    }

    /// Whether any cell holds `value`.
    pub fn has_any(&self, value: T) -> bool {
        self.nodes.iter().any(|&n| n == value)
    }

    /// Row-major iterator over all cells holding `value`.
    pub fn cells_with(&self, value: T) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |&(_, &n)| n == value)
            .map(|(i, _)| self.point(i))
    }
}
