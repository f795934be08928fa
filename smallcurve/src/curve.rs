//! Curve parameters bundled with their field modulus.

use crate::{AffinePoint, Error, ProjectivePoint, Result};
use core::fmt;
use smallfield::modular::{check_modulus, reduce};

/// Short Weierstrass curve `y² = x³ + ax + b` over the prime field `ℤ/pℤ`.
///
/// Only the modulus is validated (`p ≥ 2`). Primality of `p` and
/// non-singularity of the curve (`4a³ + 27b² ≢ 0`) are the caller's
/// responsibility; group law results on a singular curve are meaningless.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Curve {
    a: i64,
    b: i64,
    modulus: i64,
}

impl Curve {
    /// Create a curve from its coefficients and field modulus.
    ///
    /// `a` and `b` are reduced into `[0, p)`.
    pub fn new(a: i64, b: i64, modulus: i64) -> Result<Self> {
        let modulus = check_modulus(modulus)?;

        Ok(Self {
            a: reduce(a, modulus),
            b: reduce(b, modulus),
            modulus,
        })
    }

    /// Coefficient `a` in the curve equation.
    pub const fn a(&self) -> i64 {
        self.a
    }

    /// Coefficient `b` in the curve equation.
    pub const fn b(&self) -> i64 {
        self.b
    }

    /// Field modulus `p`.
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Create an affine point, checking that it lies on this curve.
    pub fn point(&self, x: i64, y: i64) -> Result<AffinePoint> {
        let point = AffinePoint::new(x, y, self.modulus);

        if !point.is_on_curve(self.a, self.b, self.modulus) {
            return Err(Error::NotOnCurve { x, y });
        }

        Ok(point)
    }

    /// Is `point` an element of the group, i.e. the identity or an affine
    /// point satisfying the curve equation?
    pub fn contains(&self, point: &AffinePoint) -> bool {
        point.is_identity() || point.is_on_curve(self.a, self.b, self.modulus)
    }

    /// Returns `-point`.
    pub fn neg(&self, point: &AffinePoint) -> AffinePoint {
        point.neg(self.modulus)
    }

    /// Returns `lhs + rhs`.
    pub fn add(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        lhs.add(rhs, self.a, self.modulus)
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        point.double(self.a, self.modulus)
    }

    /// Returns `lhs - rhs`.
    pub fn sub(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        lhs.sub(rhs, self.a, self.modulus)
    }

    /// Returns `[n] point`.
    pub fn mul(&self, point: &AffinePoint, n: i64) -> AffinePoint {
        point.mul(n, self.a, self.modulus)
    }

    /// Returns `[n] point`, computed in projective coordinates and converted
    /// back to affine form once at the end.
    pub fn mul_projective(&self, point: &AffinePoint, n: i64) -> AffinePoint {
        ProjectivePoint::from(point)
            .mul(n, self.a, self.modulus)
            .to_affine(self.modulus)
    }

    /// Iterate over every affine point on the curve, ordered by `x` then `y`.
    ///
    /// Enumeration is brute force over all `p²` coordinate pairs, so this is
    /// only practical for small moduli.
    pub fn points(&self) -> impl Iterator<Item = AffinePoint> + use<> {
        let Self { a, b, modulus } = *self;

        (0..modulus).flat_map(move |x| {
            (0..modulus)
                .map(move |y| AffinePoint::new(x, y, modulus))
                .filter(move |point| point.is_on_curve(a, b, modulus))
        })
    }

    /// Number of elements of the group, including the point at infinity.
    pub fn order(&self) -> u64 {
        self.points().count() as u64 + 1
    }

    /// Smallest `k ≥ 1` such that `[k] point` is the identity.
    ///
    /// Computed by repeated addition. Returns an error if `point` is not an
    /// element of the group.
    pub fn point_order(&self, point: &AffinePoint) -> Result<u64> {
        if !self.contains(point) {
            let (x, y) = point.coordinates().unwrap_or_default();
            return Err(Error::NotOnCurve { x, y });
        }

        let mut acc = *point;
        let mut k = 1;

        while !acc.is_identity() {
            acc = self.add(&acc, point);
            k += 1;
        }

        Ok(k)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} (mod {})",
            self.a, self.b, self.modulus
        )
    }
}
