use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::ops::Operand;

pub trait Scalar:
    Debug
    + Display
    + Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Neg<Output = Self>
    + PartialEq
    + PartialOrd
    + Into<Operand<Self>>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn recip(self) -> Self;
    fn from_f64(v: f64) -> Self;
    fn as_f64(self) -> f64;
    /// Rounds to `digits` decimal places. Display-time only; stored values
    /// keep full precision.
    fn round_to(self, digits: i32) -> Self;
}

impl Scalar for f32 {
    fn zero() -> f32 { 0.0f32 }
    fn one() -> f32 { 1.0f32 }
    fn recip(self) -> f32 { self.recip() }
    fn from_f64(v: f64) -> f32 { v as f32 }
    fn as_f64(self) -> f64 { self as f64 }
    fn round_to(self, digits: i32) -> f32 {
        let scale = 10.0f32.powi(digits);
        (self * scale).round() / scale
    }
}

impl Scalar for f64 {
    fn zero() -> f64 { 0.0f64 }
    fn one() -> f64 { 1.0f64 }
    fn recip(self) -> f64 { self.recip() }
    fn from_f64(v: f64) -> f64 { v }
    fn as_f64(self) -> f64 { self }
    fn round_to(self, digits: i32) -> f64 {
        let scale = 10.0f64.powi(digits);
        (self * scale).round() / scale
    }
}
