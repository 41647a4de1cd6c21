//! Dense vector type for 1D numeric data.

use crate::error::{Result, VectorError};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// An owned, fixed-length sequence of `f64` values.
///
/// The length is set at construction and never changes except through
/// assignment (`clone_from`), which resizes the target to match its source.
///
/// `v[i]` panics when `i` is out of bounds, like slice indexing. Use
/// [`Vector::get`], [`Vector::get_mut`] or [`Vector::set`] for checked access.
///
/// # Examples
///
/// ```
/// use densevec::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.l2_norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Creates an empty vector with no storage.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a vector of `size` zeros.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size],
        }
    }

    /// Creates a vector of `size` ones.
    #[must_use]
    pub fn ones(size: usize) -> Self {
        Self {
            data: vec![1.0; size],
        }
    }

    /// Creates a vector of `size` elements copied from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidArgument`] if `values.len() != size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use densevec::primitives::Vector;
    ///
    /// let v = Vector::from_values(2, &[0.0, 1.0]).expect("length matches size");
    /// assert_eq!(v.as_slice(), &[0.0, 1.0]);
    /// assert!(Vector::from_values(3, &[0.0, 1.0]).is_err());
    /// ```
    pub fn from_values(size: usize, values: &[f64]) -> Result<Self> {
        if values.len() != size {
            return Err(VectorError::invalid_argument(format!(
                "expected {size} values, got {}",
                values.len()
            )));
        }
        Ok(Self::from_slice(values))
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Consumes the vector and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.data.len())
            .ok_or_else(|| VectorError::index_out_of_range(index, self.data.len()))
    }

    /// Returns the element at `index`.
    ///
    /// The index is signed so that negative requests are reported rather
    /// than being unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index < 0 || index >= len`.
    pub fn get(&self, index: isize) -> Result<f64> {
        let i = self.checked_index(index)?;
        Ok(self.data[i])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index < 0 || index >= len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut f64> {
        let i = self.checked_index(index)?;
        Ok(&mut self.data[i])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::IndexOutOfRange`] if `index < 0 || index >= len`.
    pub fn set(&mut self, index: isize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Writes the vector to stdout in its `Display` form.
    pub fn print(&self) {
        println!("{self}");
    }

    fn ensure_same_len(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(VectorError::size_mismatch(
                operation,
                self.len(),
                other.len(),
            ));
        }
        Ok(())
    }

    fn ensure_non_empty(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(VectorError::empty(operation));
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self> {
        self.ensure_same_len(other, operation)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Elementwise addition.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Elementwise (Hadamard) multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if lengths differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "mul", |a, b| a * b)
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.data.iter().map(|x| x * scalar).collect()
    }

    /// Computes the dot product with another vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.ensure_same_len(other, "dot")?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean (L2) norm. Zero for the empty vector.
    ///
    /// Elements are scaled by the largest magnitude before squaring, so the
    /// result neither overflows for huge finite inputs nor underflows to
    /// zero for tiny non-zero ones. NaN elements yield NaN.
    #[must_use]
    pub fn l2_norm(&self) -> f64 {
        let scale = self.data.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        if scale == 0.0 || scale.is_infinite() {
            // all zeros, all NaN, or an infinite element: no scaling possible
            return self.data.iter().map(|x| x * x).sum::<f64>().sqrt();
        }
        let scaled: f64 = self
            .data
            .iter()
            .map(|x| {
                let r = x / scale;
                r * r
            })
            .sum();
        scale * scaled.sqrt()
    }

    /// Sum of absolute values (L1 norm). Zero for the empty vector.
    #[must_use]
    pub fn l1_norm(&self) -> f64 {
        self.data.iter().map(|x| x.abs()).sum()
    }

    /// Maximum absolute value (L∞ norm).
    ///
    /// NaN elements are ignored unless every element is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn linf_norm(&self) -> Result<f64> {
        self.data
            .iter()
            .map(|x| x.abs())
            .reduce(f64::max)
            .ok_or_else(|| VectorError::empty("linf_norm"))
    }

    /// Returns the receiver scaled to unit L2 norm.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if the norm is exactly zero,
    /// which includes the empty vector, and [`VectorError::DegenerateVector`]
    /// if the norm is not finite (an infinite or NaN element).
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.l2_norm();
        if norm == 0.0 {
            return Err(VectorError::DivisionByZero {
                operation: "normalize",
            });
        }
        if !norm.is_finite() {
            return Err(VectorError::DegenerateVector {
                operation: "normalize",
            });
        }
        Ok(self.data.iter().map(|x| x / norm).collect())
    }

    /// Sum of all elements. Zero for the empty vector.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Largest element. NaN elements are ignored unless every element is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn max(&self) -> Result<f64> {
        self.data
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or_else(|| VectorError::empty("max"))
    }

    /// Smallest element. NaN elements are ignored unless every element is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn min(&self) -> Result<f64> {
        self.data
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or_else(|| VectorError::empty("min"))
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn mean(&self) -> Result<f64> {
        self.ensure_non_empty("mean")?;
        Ok(self.sum() / self.len() as f64)
    }

    /// Angle in radians between two vectors, in `[0, π]`.
    ///
    /// Both operands are normalized before the dot product, so huge or tiny
    /// finite inputs do not overflow. The cosine is clamped into `[-1, 1]`
    /// before `acos` so rounding on (anti)parallel inputs cannot yield NaN.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SizeMismatch`] if lengths differ, and
    /// [`VectorError::DegenerateVector`] if either norm is zero or not
    /// finite.
    pub fn angle_between(&self, other: &Self) -> Result<f64> {
        const OP: &str = "angle_between";
        self.ensure_same_len(other, OP)?;

        let degenerate = |_: VectorError| VectorError::DegenerateVector { operation: OP };
        let u = self.normalize().map_err(degenerate)?;
        let v = other.normalize().map_err(degenerate)?;

        let cos = u.dot(&v)?;
        if !cos.is_finite() {
            return Err(VectorError::DegenerateVector { operation: OP });
        }
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Sorts in place, smallest first.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn sort_ascending(&mut self) -> Result<()> {
        self.ensure_non_empty("sort_ascending")?;
        self.data.sort_by(f64::total_cmp);
        Ok(())
    }

    /// Sorts in place, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn sort_descending(&mut self) -> Result<()> {
        self.ensure_non_empty("sort_descending")?;
        self.data.sort_by(|a, b| b.total_cmp(a));
        Ok(())
    }

    /// Reverses element order in place.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyVector`] for the empty vector.
    pub fn invert(&mut self) -> Result<()> {
        self.ensure_non_empty("invert")?;
        let (mut lo, mut hi) = (0, self.data.len() - 1);
        while lo < hi {
            self.data.swap(lo, hi);
            lo += 1;
            hi -= 1;
        }
        Ok(())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for x in &self.data {
            write!(f, " {x:.2}|")?;
        }
        Ok(())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.data[idx]
    }
}

impl Add for &Vector {
    type Output = Result<Vector>;

    fn add(self, other: Self) -> Self::Output {
        self.try_add(other)
    }
}

impl Sub for &Vector {
    type Output = Result<Vector>;

    fn sub(self, other: Self) -> Self::Output {
        self.try_sub(other)
    }
}

impl Mul for &Vector {
    type Output = Result<Vector>;

    fn mul(self, other: Self) -> Self::Output {
        self.try_mul(other)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Self::Output {
        self.mul_scalar(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: f64) -> Self::Output {
        for x in &mut self.data {
            *x *= scalar;
        }
        self
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
