//! Projective curve points.

use crate::AffinePoint;
use core::fmt;
use smallfield::FieldElement;

/// Point on a short Weierstrass curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
///
/// Any point with `Z ≡ 0` is the point at infinity. Group operations never
/// invert field elements; the only inversion happens in
/// [`ProjectivePoint::to_affine`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ProjectivePoint {
    x: i64,
    y: i64,
    z: i64,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self { x: 0, y: 1, z: 0 };

    /// Create a projective point, reducing all coordinates modulo `p`.
    ///
    /// `(0 : 0 : 0)` names no point of the projective plane and is mapped to
    /// [`ProjectivePoint::IDENTITY`].
    pub const fn new(x: i64, y: i64, z: i64, p: i64) -> Self {
        let x = smallfield::reduce(x, p);
        let y = smallfield::reduce(y, p);
        let z = smallfield::reduce(z, p);

        if x == 0 && y == 0 && z == 0 {
            return Self::IDENTITY;
        }

        Self { x, y, z }
    }

    /// Is this point the point at infinity?
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.z == 0
    }

    /// Raw homogeneous coordinates `(X, Y, Z)`.
    pub const fn coordinates(&self) -> (i64, i64, i64) {
        (self.x, self.y, self.z)
    }

    /// Does this point satisfy `Y²Z ≡ X³ + aXZ² + bZ³ (mod p)`?
    ///
    /// At infinity the equation reduces to `X³ ≡ 0`, so a point with `Z ≡ 0`
    /// is on the curve exactly when it is a multiple of `(0 : 1 : 0)`.
    pub fn is_on_curve(&self, a: i64, b: i64, p: i64) -> bool {
        let (x, y, z) = self.field_coordinates(p);

        if z.is_zero() {
            return x.is_zero() && !y.is_zero();
        }

        let a = FieldElement::new(a, p);
        let b = FieldElement::new(b, p);
        let zz = z.square();
        let lhs = y.square() * z;
        let rhs = x.square() * x + a * x * zz + b * zz * z;
        lhs == rhs
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self, p: i64) -> AffinePoint {
        let (x, y, z) = self.field_coordinates(p);

        match z.invert() {
            Some(zinv) => AffinePoint::from_field(x * zinv, y * zinv),
            None => AffinePoint::IDENTITY,
        }
    }

    /// Equality up to scaling: `X₁Z₂ = X₂Z₁` and `Y₁Z₂ = Y₂Z₁`.
    pub fn eq_mod(&self, other: &Self, p: i64) -> bool {
        let (x1, y1, z1) = self.field_coordinates(p);
        let (x2, y2, z2) = other.field_coordinates(p);

        match (z1.is_zero(), z2.is_zero()) {
            (true, true) => true,
            (false, false) => x1 * z2 == x2 * z1 && y1 * z2 == y2 * z1,
            _ => false,
        }
    }

    /// Returns `-self`.
    pub fn neg(&self, p: i64) -> Self {
        if self.is_identity() {
            return Self::IDENTITY;
        }

        Self::new(self.x, -self.y, self.z, p)
    }

    /// Returns `self + other`.
    ///
    /// Homogeneous addition (Cohen-Miyaji-Ono 1998), falling back to
    /// [`ProjectivePoint::double`] when both operands are the same point and
    /// to the identity when they are each other's negation.
    pub fn add(&self, other: &Self, a: i64, p: i64) -> Self {
        if self.is_identity() {
            return *other;
        }

        if other.is_identity() {
            return *self;
        }

        let (x1, y1, z1) = self.field_coordinates(p);
        let (x2, y2, z2) = other.field_coordinates(p);

        let y1z2 = y1 * z2;
        let x1z2 = x1 * z2;
        let z1z2 = z1 * z2;
        let u = y2 * z1 - y1z2;
        let v = x2 * z1 - x1z2;

        if v.is_zero() {
            return if u.is_zero() {
                self.double(a, p)
            } else {
                Self::IDENTITY
            };
        }

        let uu = u.square();
        let vv = v.square();
        let vvv = v * vv;
        let r = vv * x1z2;
        let big_a = uu * z1z2 - vvv - r.double();

        Self::from_field(v * big_a, u * (r - big_a) - vvv * y1z2, vvv * z1z2)
    }

    /// Returns `self + self`.
    ///
    /// Bernstein-Lange 2007 doubling; points with `Y ≡ 0` have order two and
    /// double to the identity.
    pub fn double(&self, a: i64, p: i64) -> Self {
        let (x1, y1, z1) = self.field_coordinates(p);

        if z1.is_zero() || y1.is_zero() {
            return Self::IDENTITY;
        }

        let xx = x1.square();
        let zz = z1.square();
        let w = FieldElement::new(a, p) * zz + xx.mul_int(3);
        let s = (y1 * z1).double();
        let ss = s.square();
        let sss = s * ss;
        let r = y1 * s;
        let rr = r.square();
        let b = (x1 + r).square() - xx - rr;
        let h = w.square() - b.double();

        Self::from_field(h * s, w * (b - h) - rr.double(), sss)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self, a: i64, p: i64) -> Self {
        self.add(&other.neg(p), a, p)
    }

    /// Returns `[n] self` using binary double-and-add.
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

    fn field_coordinates(&self, p: i64) -> (FieldElement, FieldElement, FieldElement) {
        (
            FieldElement::new(self.x, p),
            FieldElement::new(self.y, p),
            FieldElement::new(self.z, p),
        )
    }

    fn from_field(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        if z.is_zero() {
            return Self::IDENTITY;
        }

        Self {
            x: x.value(),
            y: y.value(),
            z: z.value(),
        }
    }
}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> ProjectivePoint {
        match p.coordinates() {
            Some((x, y)) => ProjectivePoint { x, y, z: 1 },
            None => ProjectivePoint::IDENTITY,
        }
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::from(*p)
    }
}

impl fmt::Display for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}:{})", self.x, self.y, self.z)
    }
}
