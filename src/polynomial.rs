use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::PolyError;

/// A polynomial in one variable with integer coefficients.
///
/// Only non-zero terms are stored, as `(degree, coefficient)` pairs kept in
/// insertion order. Equality ignores the order; display does not.
/// Coefficients are arbitrary precision, so arithmetic never overflows.
#[derive(Debug, Clone, Default)]
pub struct Poly {
    terms: Vec<(u32, BigInt)>,
}

impl Poly {
    /// Builds a polynomial from `(degree, coefficient)` pairs.
    ///
    /// Repeated degrees are summed and zero coefficients dropped.
    pub fn new<C: Into<BigInt>>(terms: impl IntoIterator<Item = (u32, C)>) -> Self {
        let mut poly = Poly::zero();
        for (degree, coeff) in terms {
            poly.accumulate(degree, coeff.into());
        }
        poly
    }

    pub fn zero() -> Self {
        Poly { terms: Vec::new() }
    }

    pub fn one() -> Self {
        Poly::constant(1)
    }

    pub fn constant(c: impl Into<BigInt>) -> Self {
        Poly::monomial(0, c)
    }

    /// `coeff * x^degree`
    pub fn monomial(degree: u32, coeff: impl Into<BigInt>) -> Self {
        Poly::new([(degree, coeff.into())])
    }

    pub fn x() -> Self {
        Poly::monomial(1, 1)
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of non-zero terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[(u32, BigInt)] {
        &self.terms
    }

    /// Coefficient of `x^degree`, zero when the term is absent.
    pub fn coeff(&self, degree: u32) -> BigInt {
        self.terms
            .iter()
            .find(|(d, _)| *d == degree)
            .map_or_else(BigInt::zero, |(_, c)| c.clone())
    }

    pub fn constant_term(&self) -> BigInt {
        self.coeff(0)
    }

    pub fn degree(&self) -> Result<u32, PolyError> {
        self.leading_term()
            .map(|(d, _)| d)
            .ok_or(PolyError::InvalidDegree)
    }

    pub fn leading_coeff(&self) -> Result<BigInt, PolyError> {
        self.leading_term()
            .map(|(_, c)| c.clone())
            .ok_or(PolyError::InvalidDegree)
    }

    /// Same polynomial with its terms ordered by descending degree.
    pub fn sorted_by_degree(&self) -> Self {
        let mut terms = self.terms.clone();
        terms.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        Poly { terms }
    }

    pub(crate) fn leading_term(&self) -> Option<(u32, &BigInt)> {
        self.terms
            .iter()
            .max_by_key(|(d, _)| *d)
            .map(|(d, c)| (*d, c))
    }

    // Adds `coeff` to the term of degree `degree`. A term that cancels is
    // removed; a new degree is appended at the end.
    fn accumulate(&mut self, degree: u32, coeff: BigInt) {
        match self.terms.iter().position(|(d, _)| *d == degree) {
            Some(i) => {
                self.terms[i].1 += coeff;
                if self.terms[i].1.is_zero() {
                    self.terms.remove(i);
                }
            }
            None if !coeff.is_zero() => self.terms.push((degree, coeff)),
            None => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn small_terms(&self) -> Vec<(u32, i64)> {
        use num_traits::ToPrimitive;
        self.terms
            .iter()
            .map(|(d, c)| (*d, c.to_i64().expect("coefficient fits in i64")))
            .collect()
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .all(|(d, c)| other.terms.iter().any(|(d2, c2)| d == d2 && c == c2))
    }
}

impl Eq for Poly {}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, other: &Poly) -> Poly {
        let mut sum = self.clone();
        for (d, c) in &other.terms {
            sum.accumulate(*d, c.clone());
        }
        sum
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, other: &Poly) -> Poly {
        let mut diff = self.clone();
        for (d, c) in &other.terms {
            diff.accumulate(*d, -c);
        }
        diff
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, other: &Poly) -> Poly {
        let mut product = Poly::zero();
        for (d1, c1) in &self.terms {
            for (d2, c2) in &other.terms {
                product.accumulate(d1 + d2, c1 * c2);
            }
        }
        product
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(d, c)| (*d, -c)).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp for Poly {
            type Output = Poly;

            fn $method(self, other: Poly) -> Poly {
                (&self).$method(&other)
            }
        }

        impl $imp<&Poly> for Poly {
            type Output = Poly;

            fn $method(self, other: &Poly) -> Poly {
                (&self).$method(other)
            }
        }

        impl $imp<Poly> for &Poly {
            type Output = Poly;

            fn $method(self, other: Poly) -> Poly {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::one()
    }
}

impl Poly {
    /// Integer-only long division.
    ///
    /// Eliminates the leading term of the running remainder while its degree
    /// is at least the divisor's and its coefficient is an exact multiple of
    /// the divisor's leading coefficient. Stops at the first leading term
    /// that fails either test, so the remainder may still have a degree
    /// greater than or equal to the divisor's. `self == q * divisor + r`
    /// holds in every case.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let (div_deg, div_coeff) = divisor.leading_term().ok_or(PolyError::DivisionByZero)?;

        let mut quotient = Poly::zero();
        let mut remainder = self.clone();

        while let Some((deg, coeff)) = remainder.leading_term() {
            if deg < div_deg {
                break;
            }
            if !(coeff % div_coeff).is_zero() {
                debug!(%remainder, %divisor, "leading coefficient not divisible, stopping early");
                break;
            }
            let (q_deg, q_coeff) = (deg - div_deg, coeff / div_coeff);
            let subtrahend = divisor * &Poly::monomial(q_deg, q_coeff.clone());
            remainder = &remainder - &subtrahend;
            quotient.accumulate(q_deg, q_coeff);
        }

        Ok((quotient, remainder))
    }

    pub fn quotient(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn remainder(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

impl Poly {
    /// Evaluates the polynomial at `x`, in the number type of `x`
    /// (`BigInt` or `BigRational`).
    pub fn image<T>(&self, x: T) -> T
    where
        T: Clone + Zero + One + From<BigInt> + Mul<Output = T>,
    {
        self.terms.iter().fold(T::zero(), |acc, (d, c)| {
            acc + num_traits::pow(x.clone(), *d as usize) * T::from(c.clone())
        })
    }
}
