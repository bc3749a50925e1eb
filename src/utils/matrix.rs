/*!
# Dense square matrices

Row-major `n x n` storage backing the adjacency matrix and the all-pairs cost and
predecessor matrices.
*/

use std::{
    fmt::{Debug, Display},
    ops::{Index, IndexMut},
};

use itertools::Itertools;

use crate::prelude::*;

/// A dense `n x n` matrix indexed by `(row, col)` vertex ids.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates a `size x size` matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    /// Panics if some row does not have exactly `rows.len()` entries.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
    {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), size, "matrix must be square");
            data.extend_from_slice(row);
        }
        Self { data, size }
    }
}

impl<T> SquareMatrix<T> {
    /// Creates a matrix whose cell `(i, j)` is `init(i, j)`
    pub fn from_fn<F>(size: usize, mut init: F) -> Self
    where
        F: FnMut(Node, Node) -> T,
    {
        let data = (0..size)
            .cartesian_product(0..size)
            .map(|(i, j)| init(i as Node, j as Node))
            .collect();
        Self { data, size }
    }

    /// Returns the number of rows (= number of columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell `(row, col)` or `None` if out of range
    pub fn get(&self, row: Node, col: Node) -> Option<&T> {
        let (row, col) = (row as usize, col as usize);
        (row < self.size && col < self.size).then(|| &self.data[row * self.size + col])
    }

    /// Returns row `row` as a slice.
    /// ** Panics if `row >= size` **
    pub fn row(&self, row: Node) -> &[T] {
        let beg = row as usize * self.size;
        &self.data[beg..beg + self.size]
    }

    /// Returns an iterator over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.size.max(1))
    }

    /// Returns an iterator over `((row, col), value)` for all cells
    pub fn cells(&self) -> impl Iterator<Item = ((Node, Node), &T)> + '_ {
        self.data.iter().enumerate().map(|(idx, value)| {
            (
                ((idx / self.size) as Node, (idx % self.size) as Node),
                value,
            )
        })
    }

    /// Returns a matrix of the same size with `f` applied to every cell
    pub fn map<U, F>(&self, f: F) -> SquareMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        SquareMatrix {
            data: self.data.iter().map(f).collect(),
            size: self.size,
        }
    }

    /// Returns the transposed matrix
    pub fn transposed(&self) -> Self
    where
        T: Clone,
    {
        Self::from_fn(self.size, |i, j| self[(j, i)].clone())
    }
}

impl<T> Index<(Node, Node)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (Node, Node)) -> &Self::Output {
        debug_assert!((col as usize) < self.size);
        &self.data[row as usize * self.size + col as usize]
    }
}

impl<T> IndexMut<(Node, Node)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (Node, Node)) -> &mut Self::Output {
        debug_assert!((col as usize) < self.size);
        &mut self.data[row as usize * self.size + col as usize]
    }
}

impl<T: Display> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows().take(self.size) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for SquareMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rows().take(self.size))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_rows() {
        let mut m = SquareMatrix::filled(3, 0);
        m[(1, 2)] = 5;
        m[(2, 0)] = -1;
        assert_eq!(m.row(1), &[0, 0, 5]);
        assert_eq!(m.get(2, 0), Some(&-1));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.rows().count(), 3);
    }

    #[test]
    fn transpose_and_from_rows() {
        let m = SquareMatrix::from_rows(&[[1, 2], [3, 4]]);
        assert_eq!(m.transposed(), SquareMatrix::from_rows(&[[1, 3], [2, 4]]));
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }

    #[test]
    fn cells_in_row_major_order() {
        let m = SquareMatrix::from_fn(2, |i, j| i * 10 + j);
        let cells: Vec<_> = m.cells().map(|(pos, v)| (pos, *v)).collect();
        assert_eq!(
            cells,
            vec![((0, 0), 0), ((0, 1), 1), ((1, 0), 10), ((1, 1), 11)]
        );
    }

    #[test]
    fn empty_matrix() {
        let m: SquareMatrix<i64> = SquareMatrix::filled(0, 0);
        assert_eq!(m.size(), 0);
        assert_eq!(m.rows().count(), 0);
    }
}
