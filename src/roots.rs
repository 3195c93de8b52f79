use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::error::PolyError;
use crate::polynomial::Poly;

/// An exact rational root.
pub type Root = BigRational;

/// Result of [`Poly::roots`].
///
/// `factors` multiply back to the searched polynomial. Every factor but the
/// last is linear; the last one is whatever the search could not split
/// further, and contributes a root only when it is linear too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    pub roots: Vec<Root>,
    pub factors: Vec<Poly>,
}

impl Factorization {
    pub fn product(&self) -> Poly {
        self.factors.iter().fold(Poly::one(), |acc, f| acc * f)
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<String> = self.roots.iter().map(|r| r.to_string()).collect();
        let factors: Vec<String> = self.factors.iter().map(|p| format!("({p})")).collect();
        write!(f, "roots: [{}], factors: {}", roots.join(", "), factors.join(""))
    }
}

impl Poly {
    /// Splits off rational roots one at a time.
    ///
    /// Candidates come from the rational root theorem, tested in divisor
    /// enumeration order. Each accepted root `p/q` is removed by exact
    /// division by `qx - p`. The search ends when the remaining factor is
    /// linear or no candidate is a root of it.
    pub fn roots(&self) -> Result<Factorization, PolyError> {
        let degree = self.degree()?;
        if degree == 0 {
            return Err(PolyError::DegreeTooLow { degree });
        }

        let mut factors = Vec::new();
        let mut remaining = self.clone();

        while remaining.degree()? > 1 {
            let Some(root) = find_root(&remaining) else {
                debug!(%remaining, "no rational root among candidates");
                break;
            };
            let factor = linear_factor(&root);
            let (quotient, rest) = remaining.div_rem(&factor)?;
            debug_assert!(rest.is_zero(), "{factor} must divide {remaining}");
            debug!(%root, %factor, %quotient, "split off root");
            remaining = quotient;
            factors.push(factor);
        }

        let mut roots: Vec<Root> = factors.iter().filter_map(linear_root).collect();
        if let Some(root) = linear_root(&remaining) {
            roots.push(root);
        }
        factors.push(remaining);

        Ok(Factorization { roots, factors })
    }
}

fn find_root(p: &Poly) -> Option<Root> {
    candidates(p).into_iter().find(|c| {
        let value = p.image(c.clone());
        trace!(candidate = %c, %value, "testing candidate");
        value.is_zero()
    })
}

// Rational root theorem candidates: +-i/j for i | constant, j | leading.
// A missing constant term makes 0 the only candidate.
fn candidates(p: &Poly) -> Vec<Root> {
    let constant = p.constant_term();
    if constant.is_zero() {
        return vec![Root::zero()];
    }
    let Ok(leading) = p.leading_coeff() else {
        return Vec::new();
    };

    let numerators = divisors(&constant);
    let denominators = divisors(&leading);
    let mut out = Vec::with_capacity(2 * numerators.len() * denominators.len());
    for i in &numerators {
        for j in &denominators {
            let c = Root::new(i.clone(), j.clone());
            out.push(c.clone());
            out.push(-c);
        }
    }
    out
}

// Positive divisors of |n|: every k in 1..=|n|/2 dividing it, then |n|.
fn divisors(n: &BigInt) -> Vec<BigInt> {
    let n = n.abs();
    if n.is_zero() {
        return Vec::new();
    }
    let half = &n / 2;
    let mut out = Vec::new();
    let mut k = BigInt::one();
    while k <= half {
        if (&n % &k).is_zero() {
            out.push(k.clone());
        }
        k += 1;
    }
    out.push(n);
    out
}

// qx - p for the root p/q; Ratio keeps q positive and the pair coprime.
fn linear_factor(root: &Root) -> Poly {
    Poly::new([(1, root.denom().clone()), (0, -root.numer())])
}

fn linear_root(p: &Poly) -> Option<Root> {
    if p.degree().ok()? != 1 {
        return None;
    }
    Some(Root::new(-p.constant_term(), p.coeff(1)))
}
