//! Text form of a polynomial: `2x^3 - x + 5`.
//!
//! A term is an optional sign, an optional decimal coefficient, an optional
//! `x` and, after `x`, an optional `^exponent`. Whitespace is ignored and
//! every term after the first carries its own sign.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::error::ParseError;
use crate::polynomial::Poly;

impl FromStr for Poly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut terms = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let (term, next) = read_term(&text, pos)?;
            terms.push(term);
            pos = next;
        }
        Ok(Poly::new(terms))
    }
}

// Reads one term starting at `start`, returning it with the position
// just past it.
fn read_term(text: &[char], start: usize) -> Result<((u32, BigInt), usize), ParseError> {
    let mut pos = start;
    let negative = match text[pos] {
        '+' => {
            pos += 1;
            false
        }
        '-' => {
            pos += 1;
            true
        }
        ch if start > 0 => {
            return Err(if ch.is_ascii_digit() || ch == 'x' {
                ParseError::MissingSign { pos }
            } else {
                ParseError::UnexpectedChar { ch, pos }
            });
        }
        _ => false,
    };

    let digits_start = pos;
    pos = skip_digits(text, pos);
    let magnitude: String = text[digits_start..pos].iter().collect();

    let has_x = text.get(pos) == Some(&'x');
    if has_x {
        pos += 1;
    }

    let mut degree = u32::from(has_x);
    if text.get(pos) == Some(&'^') {
        if !has_x {
            return Err(ParseError::DanglingExponent { pos });
        }
        let exp_start = pos + 1;
        pos = skip_digits(text, exp_start);
        let literal: String = text[exp_start..pos].iter().collect();
        degree = literal
            .parse()
            .map_err(|_| ParseError::InvalidNumber { literal, pos: exp_start })?;
    }

    if magnitude.is_empty() && !has_x {
        return Err(match text.get(pos) {
            Some(&ch) => ParseError::UnexpectedChar { ch, pos },
            None => ParseError::EmptyTerm { pos: start },
        });
    }

    let coeff = if magnitude.is_empty() {
        BigInt::one()
    } else {
        magnitude.parse::<BigInt>().map_err(|_| ParseError::InvalidNumber {
            literal: magnitude,
            pos: digits_start,
        })?
    };
    let coeff = if negative { -coeff } else { coeff };

    Ok(((degree, coeff), pos))
}

fn skip_digits(text: &[char], mut pos: usize) -> usize {
    while text.get(pos).is_some_and(|c| c.is_ascii_digit()) {
        pos += 1;
    }
    pos
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (degree, c)) in self.terms().iter().enumerate() {
            if c.is_positive() && i > 0 {
                write!(f, "+")?;
            }
            let coeff = if *degree == 0 {
                c.to_string()
            } else if c.is_one() {
                String::new()
            } else if c.is_negative() && c.magnitude().is_one() {
                "-".to_string()
            } else {
                c.to_string()
            };
            match *degree {
                0 => write!(f, "{coeff}")?,
                1 => write!(f, "{coeff}x")?,
                _ => write!(f, "{coeff}x^{degree}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn parse(s: &str) -> Poly {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_linear() {
        let p = parse("2x + 5");
        assert_eq!(p.small_terms(), vec![(1, 2), (0, 5)]);
    }

    #[test]
    fn test_parse_signs_and_exponents() {
        assert_eq!(parse("-x^3+4x-1").small_terms(), vec![(3, -1), (1, 4), (0, -1)]);
        assert_eq!(parse("x").small_terms(), vec![(1, 1)]);
        assert_eq!(parse("-x").small_terms(), vec![(1, -1)]);
        assert_eq!(parse("+x^2").small_terms(), vec![(2, 1)]);
        assert_eq!(parse("-12").small_terms(), vec![(0, -12)]);
        assert_eq!(parse("3x^0").small_terms(), vec![(0, 3)]);
        assert_eq!(parse(" x ^ 10 - 7 x ").small_terms(), vec![(10, 1), (1, -7)]);
    }

    #[test]
    fn test_parse_prunes_and_merges() {
        assert!(parse("0").is_zero());
        assert!(parse("0x^4 + 0").is_zero());
        assert!(parse("x - x").is_zero());
        assert_eq!(parse("x + 2 + 3x").small_terms(), vec![(1, 4), (0, 2)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Poly>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<Poly>(), Err(ParseError::Empty));
        assert_eq!("2x3".parse::<Poly>(), Err(ParseError::MissingSign { pos: 2 }));
        assert_eq!("2y".parse::<Poly>(), Err(ParseError::UnexpectedChar { ch: 'y', pos: 1 }));
        assert_eq!("y".parse::<Poly>(), Err(ParseError::UnexpectedChar { ch: 'y', pos: 0 }));
        assert_eq!("x+".parse::<Poly>(), Err(ParseError::EmptyTerm { pos: 1 }));
        assert_eq!("x+-1".parse::<Poly>(), Err(ParseError::UnexpectedChar { ch: '-', pos: 2 }));
        assert_eq!("2^3".parse::<Poly>(), Err(ParseError::DanglingExponent { pos: 1 }));
        assert_eq!(
            "x^".parse::<Poly>(),
            Err(ParseError::InvalidNumber { literal: String::new(), pos: 2 })
        );
        assert_eq!(
            "x^99999999999".parse::<Poly>(),
            Err(ParseError::InvalidNumber { literal: "99999999999".to_string(), pos: 2 })
        );
    }

    #[test]
    fn test_parse_extreme_coefficient() {
        assert_eq!(parse("-9223372036854775808").small_terms(), vec![(0, i64::MIN)]);
        assert_eq!(parse("9223372036854775807x").small_terms(), vec![(1, i64::MAX)]);

        let wide = parse("-99999999999999999999x + 1");
        let expected: BigInt = "-99999999999999999999".parse().unwrap();
        assert_eq!(wide.coeff(1), expected);
        assert_eq!(wide.to_string(), "-99999999999999999999x+1");
        assert_eq!(parse(&wide.to_string()), wide);
    }

    #[test]
    fn test_display() {
        assert_eq!(parse("2x + 5").to_string(), "2x+5");
        assert_eq!(parse("-x^3+4x-1").to_string(), "-x^3+4x-1");
        assert_eq!(parse("x^2 - 1").to_string(), "x^2-1");
        assert_eq!(parse("-1x + 1").to_string(), "-x+1");
        assert_eq!(parse("-5").to_string(), "-5");
        assert_eq!(Poly::zero().to_string(), "0");
        assert_eq!(Poly::one().to_string(), "1");
        assert_eq!(Poly::x().to_string(), "x");
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        let p = Poly::new([(0, 5), (1, 2), (3, -4)]);
        assert_eq!(p.to_string(), "5+2x-4x^3");
        assert_eq!(p.sorted_by_degree().to_string(), "-4x^3+2x+5");
    }

    #[test]
    fn test_display_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..300 {
            let n = rng.random_range(0..6);
            let p = Poly::new((0..n).map(|_| (rng.random_range(0..8), rng.random_range(-30..=30))));
            let text = p.to_string();
            let back: Poly = text.parse().unwrap();
            assert_eq!(back, p, "{text}");
            assert_eq!(back.terms(), p.terms());
        }
    }
}
