//! Three-component double-precision vector
//!
//! `Vector3` wraps an nalgebra `Vector3<f64>` and exposes exactly the
//! operations the particle integrator and matrix transforms need:
//! arithmetic, dot/cross, magnitude, distance and bounds-checked
//! component access. Equality is exact and component-wise.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};

/// nalgebra backing type
pub type NVec3 = nalgebra::Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3(NVec3);

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NVec3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(NVec3::zeros())
    }

    pub fn x(&self) -> f64 { self.0.x }
    pub fn y(&self) -> f64 { self.0.y }
    pub fn z(&self) -> f64 { self.0.z }

    pub fn set_x(&mut self, x: f64) { self.0.x = x; }
    pub fn set_y(&mut self, y: f64) { self.0.y = y; }
    pub fn set_z(&mut self, z: f64) { self.0.z = z; }

    /// Overwrite all three components
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.0 = NVec3::new(x, y, z);
    }

    /// Component-wise sum
    pub fn add(&self, other: &Vector3) -> Vector3 {
        Self(self.0 + other.0)
    }

    /// Component-wise difference `self - other`
    pub fn subtract(&self, other: &Vector3) -> Vector3 {
        Self(self.0 - other.0)
    }

    /// Multiply every component by `k`
    pub fn scale(&self, k: f64) -> Vector3 {
        Self(self.0 * k)
    }

    /// Element-wise (Hadamard) product
    pub fn component_mul(&self, other: &Vector3) -> Vector3 {
        Self(self.0.component_mul(&other.0))
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product
    /// (ay*bz - az*by, az*bx - ax*bz, ax*by - ay*bx)
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Self(self.0.cross(&other.0))
    }

    /// Euclidean length, always >= 0
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Vector3) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Component `i` (0 = x, 1 = y, 2 = z)
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for any other index.
    pub fn get(&self, i: usize) -> Result<f64> {
        match i {
            0 => Ok(self.0.x),
            1 => Ok(self.0.y),
            2 => Ok(self.0.z),
            _ => Err(Error::OutOfRange { index: i }),
        }
    }

    /// Mutable reference to component `i`; the vector is untouched on error.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut f64> {
        match i {
            0 => Ok(&mut self.0.x),
            1 => Ok(&mut self.0.y),
            2 => Ok(&mut self.0.z),
            _ => Err(Error::OutOfRange { index: i }),
        }
    }

    /// Borrow the nalgebra representation
    pub fn as_nalgebra(&self) -> &NVec3 {
        &self.0
    }
}

// =========================================================================================
// operators
// =========================================================================================

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, k: f64) -> Vector3 {
        Self(self.0 * k)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        Vector3(v.0 * self)
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, k: f64) {
        self.0 *= k;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Self(-self.0)
    }
}

// =========================================================================================
// conversions
// =========================================================================================

impl From<NVec3> for Vector3 {
    fn from(v: NVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3> for NVec3 {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.0.x, v.0.y, v.0.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
