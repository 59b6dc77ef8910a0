//! Two-component vector shared by tile space and pixel space.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Numeric type usable as a viewport coordinate.
pub trait Coordinate:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Integers are always finite; floats reject NaN and infinities.
    fn is_finite(self) -> bool;

    /// Product, or `None` when it overflows the type.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn is_finite(self) -> bool {
                true
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

macro_rules! float_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                let product = self * rhs;
                product.is_finite().then_some(product)
            }
        }
    )*};
}

int_coordinate!(i32, i64);
float_coordinate!(f32, f64);

/// A point or extent in either tile or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coordinate> Vector2<T> {
    #[must_use]
    pub fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }

    /// Component-wise product.
    #[must_use]
    pub fn mul_elem(self, other: Self) -> Self {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    /// Component-wise product, or `None` when either component overflows.
    #[must_use]
    pub fn checked_mul_elem(self, other: Self) -> Option<Self> {
        Some(Self { x: self.x.checked_mul(other.x)?, y: self.y.checked_mul(other.y)? })
    }

    /// Component-wise quotient.
    #[must_use]
    pub fn div_elem(self, other: Self) -> Self {
        Self { x: self.x / other.x, y: self.y / other.y }
    }

    #[must_use]
    pub fn min_elem(self, other: Self) -> Self {
        Self {
            x: if other.x < self.x { other.x } else { self.x },
            y: if other.y < self.y { other.y } else { self.y },
        }
    }

    #[must_use]
    pub fn max_elem(self, other: Self) -> Self {
        Self {
            x: if other.x > self.x { other.x } else { self.x },
            y: if other.y > self.y { other.y } else { self.y },
        }
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Whether both components are finite and strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.is_finite() && self.x > T::ZERO && self.y > T::ZERO
    }
}

impl Vector2<f64> {
    #[must_use]
    pub fn floor(self) -> Self {
        Self { x: self.x.floor(), y: self.y.floor() }
    }
}

impl From<Vector2<i32>> for Vector2<f64> {
    fn from(v: Vector2<i32>) -> Self {
        Self { x: f64::from(v.x), y: f64::from(v.y) }
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Coordinate> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Coordinate> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Coordinate> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: Coordinate> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Coordinate> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl<T: Coordinate> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl<T: Coordinate + Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
