//! Field elements which carry their modulus at runtime.

use crate::{
    Error, Result,
    modular::{add_mod, inverse_mod, mul_mod, neg_mod, pow_mod, reduce, sub_mod},
};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Element of the prime field `ℤ/pℤ` for a word-sized modulus `p`.
///
/// The value is always kept as the canonical representative in `[0, p)`.
/// Binary operations expect both operands to share the same modulus; mixing
/// moduli is a logic error which is caught by debug assertions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FieldElement {
    value: i64,
    modulus: i64,
}

impl FieldElement {
    /// Create a field element from an arbitrary integer, reducing it into
    /// `[0, modulus)`.
    ///
    /// `modulus` must be greater than 1. Use [`FieldElement::try_new`] for a
    /// checked constructor.
    #[inline]
    pub const fn new(value: i64, modulus: i64) -> Self {
        Self {
            value: reduce(value, modulus),
            modulus,
        }
    }

    /// Create a field element, returning an error if `modulus < 2`.
    pub fn try_new(value: i64, modulus: i64) -> Result<Self> {
        crate::modular::check_modulus(modulus).map(|p| Self::new(value, p))
    }

    /// Additive identity.
    #[inline]
    pub const fn zero(modulus: i64) -> Self {
        Self::new(0, modulus)
    }

    /// Multiplicative identity.
    #[inline]
    pub const fn one(modulus: i64) -> Self {
        Self::new(1, modulus)
    }

    /// Canonical representative in `[0, modulus)`.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Modulus of the field this element belongs to.
    #[inline]
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Is this element zero?
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Add elements.
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self {
            value: add_mod(self.value, rhs.value, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self {
            value: sub_mod(self.value, rhs.value, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Multiply elements.
    #[inline]
    pub fn multiply(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self {
            value: mul_mod(self.value, rhs.value, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Multiply by a small integer constant.
    #[inline]
    pub fn mul_int(&self, k: i64) -> Self {
        Self {
            value: mul_mod(self.value, k, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Negate element.
    #[inline]
    pub fn neg(&self) -> Self {
        Self {
            value: neg_mod(self.value, self.modulus),
            modulus: self.modulus,
        }
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Raise to the power `exp`.
    #[must_use]
    pub fn pow(&self, exp: u64) -> Self {
        Self {
            value: pow_mod(self.modulus, self.value, exp),
            modulus: self.modulus,
        }
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// Returns `None` if `self` is zero.
    pub fn invert(&self) -> Option<Self> {
        inverse_mod(self.modulus, self.value).map(|value| Self {
            value,
            modulus: self.modulus,
        })
    }

    /// Compute field division: `self / rhs`.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        debug_assert_eq!(self.modulus, rhs.modulus);
        rhs.invert()
            .map(|inv| self.multiply(&inv))
            .ok_or(Error::NotInvertible {
                value: rhs.value,
                modulus: rhs.modulus,
            })
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<FieldElement> for i64 {
    fn from(fe: FieldElement) -> i64 {
        fe.value
    }
}

macro_rules! field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl $op for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: FieldElement) -> FieldElement {
                FieldElement::$inner_func(&self, &rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner_func(&self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner_func(self, rhs)
            }
        }
    };
}

macro_rules! field_op_assign {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl $op for FieldElement {
            #[inline]
            fn $func(&mut self, rhs: FieldElement) {
                *self = FieldElement::$inner_func(self, &rhs);
            }
        }

        impl $op<&FieldElement> for FieldElement {
            #[inline]
            fn $func(&mut self, rhs: &FieldElement) {
                *self = FieldElement::$inner_func(self, rhs);
            }
        }
    };
}

field_op!(Add, add, add);
field_op!(Sub, sub, sub);
field_op!(Mul, mul, multiply);
field_op_assign!(AddAssign, add_assign, add);
field_op_assign!(SubAssign, sub_assign, sub);
field_op_assign!(MulAssign, mul_assign, multiply);

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}
