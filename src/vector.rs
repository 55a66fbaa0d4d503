//! 2D vector arithmetic
//!
//! Every operation comes as a free function. The ones with an `i` prefix
//! (`iadd`, `isub`, `imul`, `inorm`) update their first argument in place
//! and hand the same reference back, the rest return a new [`Vector`].
//!
//! Degenerate input is not an error: normalizing a zero vector yields NaN
//! components, like any other IEEE-754 division by zero.

use float_cmp::{ApproxEq, F64Margin};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// mathmatic vector, either a point or a displacement
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    pub fn zero() -> Self {
        Vector::new(0.0, 0.0)
    }

    pub fn one() -> Self {
        Vector::new(1.0, 1.0)
    }
}

/// new (0, 0) vector
pub fn zero() -> Vector {
    Vector::zero()
}

/// new (1, 1) vector
pub fn one() -> Vector {
    Vector::one()
}

/// sum of `v1` and `v2` as a new vector
pub fn add(v1: &Vector, v2: &Vector) -> Vector {
    Vector {
        x: v1.x + v2.x,
        y: v1.y + v2.y,
    }
}

/// in place add, `v1` becomes `v1 + v2`
pub fn iadd<'a>(v1: &'a mut Vector, v2: &Vector) -> &'a mut Vector {
    v1.x += v2.x;
    v1.y += v2.y;
    v1
}

/// difference `v1 - v2` as a new vector
pub fn sub(v1: &Vector, v2: &Vector) -> Vector {
    Vector {
        x: v1.x - v2.x,
        y: v1.y - v2.y,
    }
}

/// in place sub, `v1` becomes `v1 - v2`
pub fn isub<'a>(v1: &'a mut Vector, v2: &Vector) -> &'a mut Vector {
    v1.x -= v2.x;
    v1.y -= v2.y;
    v1
}

pub fn mul(v1: &Vector, scaler: f64) -> Vector {
    Vector {
        x: v1.x * scaler,
        y: v1.y * scaler,
    }
}

pub fn imul(v1: &mut Vector, scaler: f64) -> &mut Vector {
    v1.x *= scaler;
    v1.y *= scaler;
    v1
}

pub fn dot(v1: &Vector, v2: &Vector) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// euclidean length of `v1`
pub fn mag(v1: &Vector) -> f64 {
    dot(v1, v1).sqrt()
}

/// unit vector in the direction of `v1`
///
/// a zero vector has no direction, the result is (NaN, NaN)
pub fn norm(v1: &Vector) -> Vector {
    mul(v1, 1.0 / mag(v1))
}

/// in place version of [`norm`]
pub fn inorm(v1: &mut Vector) -> &mut Vector {
    let scaler = 1.0 / mag(v1);
    imul(v1, scaler)
}

/// Angle in radians at `pivot` between the rays `pivot -> p1` and `pivot -> p2`.
///
/// Result lies in `[0, π]`. If either ray has zero length the result is NaN.
///
/// The cosine is clamped to `[-1, 1]` first, so two parallel rays give exactly
/// `0` rather than NaN from rounding.
pub fn angle_between(p1: &Vector, p2: &Vector, pivot: &Vector) -> f64 {
    // move both points so pivot sits at origin
    let mut v1 = sub(p1, pivot);
    let mut v2 = sub(p2, pivot);

    dot(inorm(&mut v1), inorm(&mut v2)).clamp(-1.0, 1.0).acos()
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        add(&self, &rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        iadd(self, &rhs);
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        sub(&self, &rhs)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        isub(self, &rhs);
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        mul(&self, rhs)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        imul(self, rhs);
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        mul(&self, -1.0)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}
