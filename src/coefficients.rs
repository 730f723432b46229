//! Vector-like operands for element-wise approximate equality.

use crate::error::UtestError;

/// A fixed-size sequence of numeric coefficients.
pub trait Coefficients {
    fn size(&self) -> usize;

    fn coefficient(&self, index: usize) -> f64;

    /// Largest absolute coefficient; `0.0` when empty, NaN if any coefficient is NaN.
    fn max_abs(&self) -> f64 {
        max_coefficient((0..self.size()).map(|i| self.coefficient(i).abs()))
    }
}

impl<T: Copy + Into<f64>> Coefficients for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn coefficient(&self, index: usize) -> f64 {
        self[index].into()
    }
}

impl<T: Copy + Into<f64>, const N: usize> Coefficients for [T; N] {
    fn size(&self) -> usize {
        N
    }

    fn coefficient(&self, index: usize) -> f64 {
        self[index].into()
    }
}

impl<T: Copy + Into<f64>> Coefficients for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn coefficient(&self, index: usize) -> f64 {
        self[index].into()
    }
}

impl<C: Coefficients + ?Sized> Coefficients for &C {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn coefficient(&self, index: usize) -> f64 {
        (**self).coefficient(index)
    }
}

/// Largest element-wise absolute difference between two equally sized operands.
pub fn max_abs_difference<L, R>(left: &L, right: &R) -> Result<f64, UtestError>
where
    L: Coefficients + ?Sized,
    R: Coefficients + ?Sized,
{
    if left.size() != right.size() {
        return Err(UtestError::SizeMismatch {
            left: left.size(),
            right: right.size(),
        });
    }
    Ok(max_coefficient(
        (0..left.size()).map(|i| (left.coefficient(i) - right.coefficient(i)).abs()),
    ))
}

// f64::max drops NaN; a NaN coefficient must poison the maximum instead.
fn max_coefficient(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |max, value| {
        if value.is_nan() || value > max {
            value
        } else {
            max
        }
    })
}
