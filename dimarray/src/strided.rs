//! Strided addressing over contiguous row-major buffers.
//!
//! This is the index arithmetic behind dimension slicing: a borrowed buffer
//! plus shape, strides, and an offset. Fixing an axis at a position removes
//! that axis and folds the position into the offset; gathering materializes
//! the remaining hyperplane as a new contiguous row-major buffer. No element
//! is touched until `gather` is called.

/// Row-major strides for `shape`: the stride of an axis is the product of
/// the extents of all later axes.
pub(crate) fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

pub(crate) struct StridedSlice<'a, N> {
    values: &'a [N],
    shape: Vec<usize>,
    strides: Vec<usize>,
    offset: usize,
}

impl<'a, N: Copy> StridedSlice<'a, N> {
    pub fn new(values: &'a [N], shape: &[usize]) -> Self {
        Self {
            values,
            shape: shape.to_vec(),
            strides: row_major_strides(shape),
            offset: 0,
        }
    }

    /// Remove `axis`, fixing it at `index`. Remaining axes keep their order
    /// and their strides into the original buffer.
    pub fn fix_axis(mut self, axis: usize, index: usize) -> Self {
        self.offset += index * self.strides[axis];
        self.shape.remove(axis);
        self.strides.remove(axis);
        self
    }

    /// Element count of the remaining hyperplane.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Materialize the remaining hyperplane as a contiguous row-major buffer.
    ///
    /// Walks the remaining axes odometer-style, last axis fastest. A rank-0
    /// slice yields the single element at the offset.
    pub fn gather(&self) -> Vec<N> {
        let total = self.len();
        let mut out = Vec::with_capacity(total);
        let mut index = vec![0; self.shape.len()];
        for _ in 0..total {
            let linear: usize = index
                .iter()
                .zip(&self.strides)
                .map(|(i, stride)| i * stride)
                .sum();
            out.push(self.values[self.offset + linear]);
            for axis in (0..index.len()).rev() {
                index[axis] += 1;
                if index[axis] < self.shape[axis] {
                    break;
                }
                index[axis] = 0;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::{Array, Axis};

    fn cube() -> Vec<i64> {
        (0..24).collect()
    }

    #[test]
    fn test_row_major_strides() {
        assert_eq!(row_major_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(row_major_strides(&[5]), vec![1]);
        assert_eq!(row_major_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_fix_outermost_axis() {
        let values = cube();
        for x in 0..2 {
            let plane = StridedSlice::new(&values, &[2, 3, 4]).fix_axis(0, x);
            assert_eq!(plane.len(), 12);
            let expected = Array::from_iter(values.iter().copied())
                .into_shape((2, 3, 4))
                .unwrap()
                .index_axis(Axis(0), x)
                .iter()
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(plane.gather(), expected);
        }
    }

    #[test]
    fn test_fix_interior_axis() {
        let values = cube();
        for y in 0..3 {
            let plane = StridedSlice::new(&values, &[2, 3, 4]).fix_axis(1, y);
            let expected = Array::from_iter(values.iter().copied())
                .into_shape((2, 3, 4))
                .unwrap()
                .index_axis(Axis(1), y)
                .iter()
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(plane.gather(), expected);
        }
    }

    #[test]
    fn test_fix_innermost_axis() {
        let values = cube();
        for z in 0..4 {
            let plane = StridedSlice::new(&values, &[2, 3, 4]).fix_axis(2, z);
            let expected = Array::from_iter(values.iter().copied())
                .into_shape((2, 3, 4))
                .unwrap()
                .index_axis(Axis(2), z)
                .iter()
                .copied()
                .collect::<Vec<_>>();
            assert_eq!(plane.gather(), expected);
        }
    }

    #[test]
    fn test_fix_two_axes_composes() {
        let values = cube();
        // Fix Z=1 then X=0 on the reduced shape. Expect elements [0][y][1].
        let line = StridedSlice::new(&values, &[2, 3, 4])
            .fix_axis(2, 1)
            .fix_axis(0, 0);
        assert_eq!(line.gather(), vec![1, 5, 9]);
    }

    #[test]
    fn test_rank_zero_gather() {
        let values = vec![7, 8, 9];
        let scalar = StridedSlice::new(&values, &[3]).fix_axis(0, 2);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar.gather(), vec![9]);
    }
}
