//! Core numeric value type for all Rpncalc data.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, Pow, Signed, ToPrimitive, Zero};

use crate::{Error, Result};

/// Core numeric value type for all Rpncalc data.
///
/// Mixed-kind arithmetic coerces to [`Value::Real`] whenever a real operand
/// is present; integer-only operations convert operands with [`Value::to_int`].
#[derive(Clone)]
pub enum Value {
    /// Arbitrary-width signed integer.
    Int(BigInt),
    /// 64-bit floating point.
    Real(f64),
}

impl Value {
    /// Returns true if this value is an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if this value is numerically zero.
    ///
    /// Both `0` and `0.0` count as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns this value as a real, losing precision for very large
    /// integers.
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match self {
            Self::Int(n) => n.to_f64().unwrap_or(f64::NAN),
            Self::Real(r) => *r,
        }
    }

    /// Converts this value to an integer, truncating reals toward zero.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error for NaN or infinite reals.
    pub fn to_int(&self) -> Result<BigInt> {
        match self {
            Self::Int(n) => Ok(n.clone()),
            Self::Real(r) => BigInt::from_f64(r.trunc())
                .ok_or_else(|| Error::out_of_range("cannot convert to integer")),
        }
    }

    /// Adds two values.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => Self::Int(x + y),
            (Self::Real(x), Self::Real(y)) => Self::Real(x + y),
            (Self::Int(x), Self::Real(y)) => Self::Real(big_to_real(x) + y),
            (Self::Real(x), Self::Int(y)) => Self::Real(x + big_to_real(y)),
        }
    }

    /// Subtracts `rhs` from this value.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => Self::Int(x - y),
            (Self::Real(x), Self::Real(y)) => Self::Real(x - y),
            (Self::Int(x), Self::Real(y)) => Self::Real(big_to_real(x) - y),
            (Self::Real(x), Self::Int(y)) => Self::Real(x - big_to_real(y)),
        }
    }

    /// Multiplies two values.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => Self::Int(x * y),
            (Self::Real(x), Self::Real(y)) => Self::Real(x * y),
            (Self::Int(x), Self::Real(y)) => Self::Real(big_to_real(x) * y),
            (Self::Real(x), Self::Int(y)) => Self::Real(x * big_to_real(y)),
        }
    }

    /// Divides this value by `rhs`.
    ///
    /// Integer division truncates; real division follows IEEE semantics
    /// (division by `0.0` yields an infinity, not an error).
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error on integer division by zero.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Int(_), Self::Int(y)) if y.is_zero() => {
                Err(Error::out_of_range("division by zero"))
            }
            (Self::Int(x), Self::Int(y)) => Ok(Self::Int(x / y)),
            _ => Ok(Self::Real(self.as_real() / rhs.as_real())),
        }
    }

    /// Computes this value modulo `rhs`, with the floor-division sign
    /// convention: the result takes the sign of the divisor.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error on integer modulo by zero.
    pub fn modulo(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Int(_), Self::Int(y)) if y.is_zero() => {
                Err(Error::out_of_range("division by zero"))
            }
            (Self::Int(x), Self::Int(y)) => Ok(Self::Int(x.mod_floor(y))),
            _ => {
                let (a, b) = (self.as_real(), rhs.as_real());
                Ok(Self::Real(a - b * (a / b).floor()))
            }
        }
    }

    /// Raises this value to the given exponent.
    ///
    /// Non-negative integer exponents stay exact; anything else goes
    /// through real exponentiation.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error when an integer exponent is too
    /// large to materialize.
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        match (self, exponent) {
            (Self::Int(x), Self::Int(y)) if !y.is_negative() => {
                let exp = y
                    .to_u32()
                    .ok_or_else(|| Error::out_of_range("exponent out of range"))?;
                Ok(Self::Int(Pow::pow(x, exp)))
            }
            _ => Ok(Self::Real(self.as_real().powf(exponent.as_real()))),
        }
    }

    /// Negates this value.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::Int(n) => Self::Int(-n),
            Self::Real(r) => Self::Real(-r),
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Int(n) => Self::Int(n.abs()),
            Self::Real(r) => Self::Real(r.abs()),
        }
    }
}

/// Lossy widening used by the mixed-kind coercion arms.
fn big_to_real(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(f64::NAN)
}

impl FromStr for Value {
    type Err = Error;

    /// Parses a token: anything containing a decimal point is a real
    /// (a trailing point reads as `.0`); everything else is an integer.
    fn from_str(s: &str) -> Result<Self> {
        let unparseable = || Error::parse(format!("\"{s}\" unparseable"));
        if s.contains('.') {
            let normalized = if s.ends_with('.') {
                format!("{s}0")
            } else {
                s.to_string()
            };
            normalized
                .parse::<f64>()
                .map(Self::Real)
                .map_err(|_| unparseable())
        } else {
            s.parse::<BigInt>().map(Self::Int).map_err(|_| unparseable())
        }
    }
}

// Manual PartialEq: reals compare by bits so equality stays reflexive.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // a whole real keeps its decimal point so the kind stays visible
            Self::Real(r) if r.fract() == 0.0 => write!(f, "{r}.0"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(BigInt::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(BigInt::from(n))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Self::Real(r)
    }
}
