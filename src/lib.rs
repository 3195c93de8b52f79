//! Sparse polynomials in one variable with integer coefficients.
//!
//! ```
//! use intpoly::Poly;
//!
//! let f: Poly = "2x + 5".parse().unwrap();
//! let g: Poly = "x - 5".parse().unwrap();
//! let (q, r) = (&f * &f).div_rem(&g).unwrap();
//! assert_eq!(q.to_string(), "4x+40");
//! assert_eq!(r.to_string(), "225");
//! ```

pub mod error;
mod parse;
pub mod polynomial;
pub mod roots;

pub use error::{ParseError, PolyError};
pub use polynomial::Poly;
pub use roots::{Factorization, Root};
