//! Affine curve points.

use core::fmt;
use smallfield::{FieldElement, modular::reduce};

/// Point on a short Weierstrass curve `y² = x³ + ax + b` in affine
/// coordinates, or the point at infinity.
///
/// Coordinates are stored as canonical residues in `[0, p)`. The curve
/// coefficients and the modulus are not stored in the point; they are passed
/// to each operation (see [`Curve`](crate::Curve) for a bundled alternative).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AffinePoint {
    inner: Coordinates,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
enum Coordinates {
    #[default]
    Identity,
    Affine {
        x: i64,
        y: i64,
    },
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        inner: Coordinates::Identity,
    };

    /// Returns the point at infinity.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create an affine point, reducing both coordinates modulo `p`.
    ///
    /// Curve membership is not checked; see [`Curve::point`](crate::Curve::point).
    pub const fn new(x: i64, y: i64, p: i64) -> Self {
        Self {
            inner: Coordinates::Affine {
                x: reduce(x, p),
                y: reduce(y, p),
            },
        }
    }

    /// Is this point the point at infinity?
    #[inline]
    pub const fn is_identity(&self) -> bool {
        matches!(self.inner, Coordinates::Identity)
    }

    /// Affine coordinates `(x, y)`, or `None` for the point at infinity.
    #[inline]
    pub const fn coordinates(&self) -> Option<(i64, i64)> {
        match self.inner {
            Coordinates::Identity => None,
            Coordinates::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub const fn x(&self) -> Option<i64> {
        match self.inner {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub const fn y(&self) -> Option<i64> {
        match self.inner {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Does this point satisfy `y² ≡ x³ + ax + b (mod p)`?
    ///
    /// The point at infinity has no affine coordinates and is reported as not
    /// satisfying the equation. Use [`Curve::contains`](crate::Curve::contains)
    /// for group membership, which includes the identity.
    pub fn is_on_curve(&self, a: i64, b: i64, p: i64) -> bool {
        let Some((x, y)) = self.field_coordinates(p) else {
            return false;
        };

        let a = FieldElement::new(a, p);
        let b = FieldElement::new(b, p);
        let lhs = y.square();
        let rhs = (x.square() + a) * x + b;
        lhs == rhs
    }

    /// Equality of points after reducing their coordinates modulo `p`.
    ///
    /// Two points at infinity are equal; the point at infinity never equals
    /// an affine point.
    pub fn eq_mod(&self, other: &Self, p: i64) -> bool {
        match (self.field_coordinates(p), other.field_coordinates(p)) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    /// Returns `-self`: the reflection `(x, -y)`, or the identity unchanged.
    pub fn neg(&self, p: i64) -> Self {
        match self.inner {
            Coordinates::Identity => Self::IDENTITY,
            Coordinates::Affine { x, y } => Self::new(x, -y, p),
        }
    }

    /// Returns `self + other` under the chord-and-tangent group law.
    pub fn add(&self, other: &Self, a: i64, p: i64) -> Self {
        let (Some((x1, y1)), Some((x2, y2))) =
            (self.field_coordinates(p), other.field_coordinates(p))
        else {
            // Identity is the neutral element on either side.
            return if self.is_identity() { *other } else { *self };
        };

        if x1 == x2 && (y1 != y2 || (y1 + y2).is_zero()) {
            // Vertical line: P + (-P), including doubling a point with y = 0.
            // Points sharing x with an unrelated y are off the curve and
            // take the same branch.
            return Self::IDENTITY;
        }

        let slope = if x1 == x2 {
            // Tangent line at P.
            let numerator = x1.square().mul_int(3) + FieldElement::new(a, p);
            numerator.div(&y1.double())
        } else {
            // Chord through P and Q.
            (y2 - y1).div(&(x2 - x1))
        };

        // A zero denominator can only show up with a composite modulus, in
        // which case the line is treated as vertical.
        let Ok(slope) = slope else {
            return Self::IDENTITY;
        };

        let x3 = slope.square() - x1 - x2;
        let y3 = slope * (x1 - x3) - y1;
        Self::from_field(x3, y3)
    }

    /// Returns `self + self`.
    pub fn double(&self, a: i64, p: i64) -> Self {
        self.add(self, a, p)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self, a: i64, p: i64) -> Self {
        self.add(&other.neg(p), a, p)
    }

    /// Returns `[n] self` using binary double-and-add.
    ///
    /// Negative `n` multiplies the negated point; `n = 0` gives the identity.
    pub fn mul(&self, n: i64, a: i64, p: i64) -> Self {
        let base = if n < 0 { self.neg(p) } else { *self };
        let k = n.unsigned_abs();

        let mut acc = Self::IDENTITY;

        for i in (0..u64::BITS - k.leading_zeros()).rev() {
            acc = acc.double(a, p);

            if (k >> i) & 1 == 1 {
                acc = acc.add(&base, a, p);
            }
        }

        acc
    }

    /// Coordinates lifted into the field of modulus `p`.
    fn field_coordinates(&self, p: i64) -> Option<(FieldElement, FieldElement)> {
        self.coordinates()
            .map(|(x, y)| (FieldElement::new(x, p), FieldElement::new(y, p)))
    }

    pub(crate) fn from_field(x: FieldElement, y: FieldElement) -> Self {
        Self {
            inner: Coordinates::Affine {
                x: x.value(),
                y: y.value(),
            },
        }
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Coordinates::Identity => write!(f, "Infinity"),
            Coordinates::Affine { x, y } => write!(f, "({x},{y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AffinePoint;

    const P: i64 = 7;
    const A: i64 = 2;
    const B: i64 = 1;

    #[test]
    fn construction_reduces_coordinates() {
        let point = AffinePoint::new(8, -5, P);
        assert_eq!(point.coordinates(), Some((1, 2)));
        assert_eq!(point, AffinePoint::new(1, 2, P));
    }

    #[test]
    fn identity_has_no_coordinates() {
        assert!(AffinePoint::IDENTITY.is_identity());
        assert_eq!(AffinePoint::identity().coordinates(), None);
        assert_eq!(AffinePoint::default(), AffinePoint::IDENTITY);
        assert!(!AffinePoint::IDENTITY.is_on_curve(A, B, P));
    }

    #[test]
    fn doubling_two_torsion_point() {
        // (0, 0) lies on y² = x³ + x and has order 2
        let point = AffinePoint::new(0, 0, 5);
        assert!(point.is_on_curve(1, 0, 5));
        assert!(point.double(1, 5).is_identity());
    }

    #[test]
    fn shared_x_with_unrelated_y_is_identity() {
        let lhs = AffinePoint::new(1, 2, P);
        let rhs = AffinePoint::new(1, 3, P);

        assert!(lhs.add(&rhs, A, P).is_identity());
        assert!(rhs.add(&lhs, A, P).is_identity());
        assert_ne!(lhs.add(&rhs, A, P), lhs.double(A, P));
    }

    #[test]
    fn mul_extreme_scalars() {
        let point = AffinePoint::new(1, 2, P);
        // the group generated by (1, 2) has order 5
        assert_eq!(point.mul(i64::MIN, A, P), point.mul(i64::MIN % 5, A, P));
        assert_eq!(point.mul(i64::MAX, A, P), point.mul(i64::MAX % 5, A, P));
    }
}
