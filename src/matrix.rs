//! Generic multi-dimensional container with shape-preserving mapping.
//!
//! This module provides [`Matrix<T>`], a dense row-major n-dimensional
//! collection. It is the structured counterpart to `Vec<Value>`: where an
//! array is an ordered sequence of arbitrary depth, a matrix carries an
//! explicit shape that operations must preserve.
//!
//! ## Why an explicit shape?
//!
//! Element-wise operations such as [`to_text`](crate::to_text) promise to
//! return a container of *identical* shape. With `Matrix<T>` that promise
//! holds by construction: [`Matrix::map`] reuses the input's shape for the
//! output, so no operation can accidentally produce a container of different
//! dimensions.
//!
//! ## Examples
//!
//! ```rust
//! use valtext::Matrix;
//!
//! let m = Matrix::new(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap();
//! assert_eq!(m.shape(), &[2, 3]);
//! assert_eq!(m.get(&[1, 2]), Some(&6));
//!
//! let doubled = m.map(|x| x * 2);
//! assert_eq!(doubled.shape(), m.shape());
//! assert_eq!(doubled.get(&[0, 1]), Some(&4));
//! ```

use crate::error::{Error, Result};
use crate::Value;

/// A dense n-dimensional collection stored in row-major order.
///
/// The element count always equals the product of the dimensions in
/// [`shape`](Matrix::shape); the fallible constructors enforce this, and
/// every transforming operation preserves it.
///
/// # Examples
///
/// ```rust
/// use valtext::Matrix;
///
/// // 2 x 2 matrix from rows
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(m.shape(), &[2, 2]);
///
/// // 1-D vector
/// let v = Matrix::from_vec(vec![1, 2, 3]);
/// assert_eq!(v.ndim(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from flat row-major data and an explicit shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the data length does not equal
    /// the product of the dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Matrix;
    ///
    /// let m = Matrix::new(vec![1, 2, 3, 4], vec![2, 2]).unwrap();
    /// assert_eq!(m.len(), 4);
    ///
    /// assert!(Matrix::new(vec![1, 2, 3], vec![2, 2]).is_err());
    /// ```
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Creates a 1-dimensional matrix from a vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Matrix;
    ///
    /// let v = Matrix::from_vec(vec!["a", "b"]);
    /// assert_eq!(v.shape(), &[2]);
    /// ```
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = vec![data.len()];
        Matrix { data, shape }
    }

    /// Creates a 2-dimensional matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] when the rows have uneven lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.shape(), &[2, 2]);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::RaggedRows {
                    row: row_index,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            data,
            shape: vec![nrows, ncols],
        })
    }

    /// Returns the dimensions of this matrix.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[inline]
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at the given index, one coordinate
    /// per dimension, or `None` when the index is out of bounds or has the
    /// wrong number of coordinates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.get(&[1, 0]), Some(&3));
    /// assert_eq!(m.get(&[2, 0]), None);
    /// assert_eq!(m.get(&[0]), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (coord, dim) in index.iter().zip(&self.shape) {
            if coord >= dim {
                return None;
            }
            offset = offset * dim + coord;
        }
        self.data.get(offset)
    }

    /// Returns an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Applies `f` to every element and returns a new matrix of the same
    /// shape.
    ///
    /// The output reuses the input's shape, so shape preservation holds by
    /// construction regardless of what `f` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// let text = m.map(|x| x.to_string());
    /// assert_eq!(text.shape(), m.shape());
    /// assert_eq!(text.get(&[1, 1]).map(String::as_str), Some("4"));
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
        }
    }

    /// Consumes the matrix and returns its flat row-major data.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            data: Vec::new(),
            shape: vec![0],
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Matrix<Value> {
    /// Converts this matrix into nested [`Value::Array`]s, one nesting level
    /// per dimension.
    ///
    /// Used for display and serialization, where matrices render the same
    /// way as the equivalent nested arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtext::{value, Matrix, Value};
    ///
    /// let m = Matrix::from_rows(vec![
    ///     vec![Value::from(1), Value::from(2)],
    ///     vec![Value::from(3), Value::from(4)],
    /// ]).unwrap();
    ///
    /// assert_eq!(m.to_nested(), value!([[1, 2], [3, 4]]));
    /// ```
    #[must_use]
    pub fn to_nested(&self) -> Value {
        fn build(data: &[Value], shape: &[usize]) -> Value {
            match shape.split_first() {
                None => data.first().cloned().unwrap_or_default(),
                Some((&dim, rest)) => {
                    let stride = rest.iter().product::<usize>();
                    let items = (0..dim)
                        .map(|i| build(&data[i * stride..(i + 1) * stride], rest))
                        .collect();
                    Value::Array(items)
                }
            }
        }
        build(&self.data, &self.shape)
    }
}
