//! Fixed-size square matrices (3x3 and 4x4), row-major
//!
//! Element (r, c) of an `n x n` matrix lives at `data[r * n + c]`.
//! Both sizes share the same slice-level kernels below; `Matrix3`
//! additionally carries the row-vector and column-vector transforms.

use std::ops::{Add, Mul, Sub};

use super::vector::Vector3;

/// nalgebra 3x3 used for interop
pub type NMat3 = nalgebra::Matrix3<f64>;

// =========================================================================================
// shared row-major kernels
// =========================================================================================

fn identity_into(out: &mut [f64], n: usize) {
    out.iter_mut().for_each(|e| *e = 0.0);
    for i in 0..n {
        out[i * n + i] = 1.0;
    }
}

// result[r,c] = sum_k a[r,k] * b[k,c]
fn multiply_into(a: &[f64], b: &[f64], out: &mut [f64], n: usize) {
    for row in 0..n {
        for col in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[row * n + k] * b[k * n + col];
            }
            out[row * n + col] = sum;
        }
    }
}

fn zip_into(a: &[f64], b: &[f64], out: &mut [f64], f: impl Fn(f64, f64) -> f64) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = f(x, y);
    }
}

fn transpose_into(a: &[f64], out: &mut [f64], n: usize) {
    for row in 0..n {
        for col in 0..n {
            out[col * n + row] = a[row * n + col];
        }
    }
}

// =========================================================================================
// Matrix3
// =========================================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub data: [f64; 9], // row-major
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Matrix3 {
    pub fn zeros() -> Self {
        Self { data: [0.0; 9] }
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let mut data = [0.0; 9];
        for (r, row) in rows.iter().enumerate() {
            data[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { data }
    }

    /// Element at row `r`, column `c`. Panics if either is >= 3.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * 3 + c]
    }

    pub fn identity() -> Self {
        let mut m = Self::zeros();
        identity_into(&mut m.data, 3);
        m
    }

    /// Row-by-column product `a * b`
    pub fn multiply(a: &Matrix3, b: &Matrix3) -> Self {
        let mut m = Self::zeros();
        multiply_into(&a.data, &b.data, &mut m.data, 3);
        m
    }

    pub fn add(a: &Matrix3, b: &Matrix3) -> Self {
        let mut m = Self::zeros();
        zip_into(&a.data, &b.data, &mut m.data, |x, y| x + y);
        m
    }

    /// `a - b`
    pub fn subtract(a: &Matrix3, b: &Matrix3) -> Self {
        let mut m = Self::zeros();
        zip_into(&a.data, &b.data, &mut m.data, |x, y| x - y);
        m
    }

    pub fn transpose(a: &Matrix3) -> Self {
        let mut m = Self::zeros();
        transpose_into(&a.data, &mut m.data, 3);
        m
    }

    /// Row-vector transform `v * M`
    pub fn transform_row(v: &Vector3, m: &Matrix3) -> Vector3 {
        let d = &m.data;
        Vector3::new(
            v.x() * d[0] + v.y() * d[3] + v.z() * d[6],
            v.x() * d[1] + v.y() * d[4] + v.z() * d[7],
            v.x() * d[2] + v.y() * d[5] + v.z() * d[8],
        )
    }

    /// Column-vector transform `M * v`
    pub fn transform_column(m: &Matrix3, v: &Vector3) -> Vector3 {
        let d = &m.data;
        Vector3::new(
            d[0] * v.x() + d[1] * v.y() + d[2] * v.z(),
            d[3] * v.x() + d[4] * v.y() + d[5] * v.z(),
            d[6] * v.x() + d[7] * v.y() + d[8] * v.z(),
        )
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;
    fn add(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::add(&self, &rhs)
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;
    fn sub(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::subtract(&self, &rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::multiply(&self, &rhs)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        Matrix3::transform_column(&self, &v)
    }
}

impl Mul<Matrix3> for Vector3 {
    type Output = Vector3;
    fn mul(self, m: Matrix3) -> Vector3 {
        Matrix3::transform_row(&self, &m)
    }
}

impl From<NMat3> for Matrix3 {
    fn from(m: NMat3) -> Self {
        // nalgebra stores columns; the transpose's columns are our rows
        let mut data = [0.0; 9];
        data.copy_from_slice(m.transpose().as_slice());
        Self { data }
    }
}

impl From<Matrix3> for NMat3 {
    fn from(m: Matrix3) -> Self {
        NMat3::from_row_slice(&m.data)
    }
}

// =========================================================================================
// Matrix4
// =========================================================================================

/// 4x4 counterpart of [`Matrix3`], reserved for homogeneous transforms.
/// The integrator does not use it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub data: [f64; 16], // row-major
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Matrix4 {
    pub fn zeros() -> Self {
        Self { data: [0.0; 16] }
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * 4 + c]
    }

    pub fn identity() -> Self {
        let mut m = Self::zeros();
        identity_into(&mut m.data, 4);
        m
    }

    pub fn multiply(a: &Matrix4, b: &Matrix4) -> Self {
        let mut m = Self::zeros();
        multiply_into(&a.data, &b.data, &mut m.data, 4);
        m
    }

    pub fn add(a: &Matrix4, b: &Matrix4) -> Self {
        let mut m = Self::zeros();
        zip_into(&a.data, &b.data, &mut m.data, |x, y| x + y);
        m
    }

    pub fn subtract(a: &Matrix4, b: &Matrix4) -> Self {
        let mut m = Self::zeros();
        zip_into(&a.data, &b.data, &mut m.data, |x, y| x - y);
        m
    }

    pub fn transpose(a: &Matrix4) -> Self {
        let mut m = Self::zeros();
        transpose_into(&a.data, &mut m.data, 4);
        m
    }
}
