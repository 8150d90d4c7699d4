// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Weights of classical Lie algebras and their textual form.

use crate::entry::{classify, EntryKind};
use crate::error::{malformed, unsupported, OrbitError, OrbitResult};
use lt_tableau::HollowBoxKind;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classical families handled by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LieType {
    A,
    B,
    C,
    D,
}

impl LieType {
    pub const ALL: [LieType; 4] = [LieType::A, LieType::B, LieType::C, LieType::D];

    /// Hollow-box family matching the type itself.
    pub fn hollow_box_kind(self) -> HollowBoxKind {
        match self {
            LieType::A => HollowBoxKind::A,
            LieType::B => HollowBoxKind::B,
            LieType::C => HollowBoxKind::C,
            LieType::D => HollowBoxKind::D,
        }
    }

    /// Hollow-box family used for the half-integral part: type B weights are
    /// repaired as type D, everything else as metaplectic.
    pub fn half_integral_kind(self) -> HollowBoxKind {
        match self {
            LieType::B => HollowBoxKind::D,
            LieType::A | LieType::C | LieType::D => HollowBoxKind::Metaplectic,
        }
    }
}

impl fmt::Display for LieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LieType::A => "A",
            LieType::B => "B",
            LieType::C => "C",
            LieType::D => "D",
        };
        f.write_str(tag)
    }
}

impl FromStr for LieType {
    type Err = OrbitError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(LieType::A),
            "B" => Ok(LieType::B),
            "C" => Ok(LieType::C),
            "D" => Ok(LieType::D),
            _ => Err(unsupported(raw.trim())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Real,
    Complex,
}

/// Coarse shape of a weight's entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightKind {
    Empty,
    Integral,
    HalfIntegral,
    Congruent,
    Mixed,
}

/// Ordered weight coordinates tagged with a Lie type.
///
/// Real weights store a zero imaginary part. Transforms never mutate the
/// receiver; they return new weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    coords: Vec<Complex64>,
    lie_type: LieType,
    domain: Domain,
}

impl Weight {
    /// Fails on NaN or infinite entries.
    pub fn real(entries: Vec<f64>, lie_type: LieType) -> OrbitResult<Self> {
        let coords = entries.into_iter().map(|re| Complex64::new(re, 0.0)).collect();
        Self::checked(coords, lie_type, Domain::Real)
    }

    pub fn complex(coords: Vec<Complex64>, lie_type: LieType) -> OrbitResult<Self> {
        Self::checked(coords, lie_type, Domain::Complex)
    }

    fn checked(coords: Vec<Complex64>, lie_type: LieType, domain: Domain) -> OrbitResult<Self> {
        if let Some(index) = coords.iter().position(|z| !z.is_finite()) {
            return Err(malformed(format!(
                "coordinate {index} is not finite: {}",
                coords[index]
            )));
        }
        Ok(Self {
            coords,
            lie_type,
            domain,
        })
    }

    /// Builds a complex weight from separate real and imaginary halves.
    pub fn from_parts(real: &[f64], imag: &[f64], lie_type: LieType) -> OrbitResult<Self> {
        if real.len() != imag.len() {
            return Err(malformed(format!(
                "real part has {} entries but imaginary part has {}",
                real.len(),
                imag.len()
            )));
        }
        let coords = real
            .iter()
            .zip(imag)
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect();
        Self::complex(coords, lie_type)
    }

    /// Same type and domain, different coordinates.
    pub(crate) fn with_coords(&self, coords: Vec<Complex64>) -> Self {
        Self {
            coords,
            lie_type: self.lie_type,
            domain: self.domain,
        }
    }

    /// Same coordinates reinterpreted under another type.
    pub fn with_type(&self, lie_type: LieType) -> Self {
        Self {
            coords: self.coords.clone(),
            lie_type,
            domain: self.domain,
        }
    }

    pub fn coords(&self) -> &[Complex64] {
        &self.coords
    }

    pub fn lie_type(&self) -> LieType {
        self.lie_type
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of coordinates.
    pub fn n(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn real_parts(&self) -> Vec<f64> {
        self.coords.iter().map(|z| z.re).collect()
    }

    pub fn imag_parts(&self) -> Vec<f64> {
        self.coords.iter().map(|z| z.im).collect()
    }

    /// Flat entry list: the real parts, followed by the imaginary parts for
    /// complex weights.
    pub fn entry(&self) -> Vec<f64> {
        let mut flat = self.real_parts();
        if self.domain == Domain::Complex {
            flat.extend(self.imag_parts());
        }
        flat
    }

    /// Classifies a single coordinate; a non-zero imaginary part is never
    /// integral or half-integral.
    pub fn coord_kind(z: Complex64, tolerance: f64) -> EntryKind {
        if z.im.abs() >= tolerance {
            EntryKind::Other
        } else {
            classify(z.re, tolerance)
        }
    }

    pub fn weight_kind(&self, tolerance: f64) -> WeightKind {
        let Some(&first) = self.coords.first() else {
            return WeightKind::Empty;
        };
        let kinds: Vec<EntryKind> = self
            .coords
            .iter()
            .map(|&z| Self::coord_kind(z, tolerance))
            .collect();
        if kinds.iter().all(|&k| k == EntryKind::Integer) {
            return WeightKind::Integral;
        }
        if kinds.iter().all(|&k| k == EntryKind::HalfInteger) {
            return WeightKind::HalfIntegral;
        }
        let congruent = self.coords.iter().all(|&z| congruent_to(z, first, tolerance));
        if congruent {
            WeightKind::Congruent
        } else {
            WeightKind::Mixed
        }
    }
}

/// Signed integral congruence between coordinates with matching imaginary parts.
pub(crate) fn congruent_to(z: Complex64, anchor: Complex64, tolerance: f64) -> bool {
    (z.im - anchor.im).abs() < tolerance
        && crate::entry::signed_congruent(z.re, anchor.re, tolerance)
}

fn fmt_coord(z: Complex64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if z.im == 0.0 {
        write!(f, "{}", z.re)
    } else if z.im < 0.0 {
        write!(f, "{}-{}i", z.re, -z.im)
    } else {
        write!(f, "{}+{}i", z.re, z.im)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, &z) in self.coords.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt_coord(z, f)?;
        }
        f.write_str(")")
    }
}

/// Parses a comma or whitespace separated weight. Commas must separate
/// non-empty fields; runs of whitespace count as one separator.
///
/// Real tokens are decimals or fractions `p/q`. Complex tokens take the forms
/// `a+bi`, `a-bi`, `bi`, `i` and `-i`; a single complex token makes the whole
/// weight complex.
pub fn parse_weight(text: &str, type_tag: &str) -> OrbitResult<Weight> {
    let lie_type: LieType = type_tag.parse()?;
    if text.trim().is_empty() {
        return Err(malformed("weight is empty"));
    }
    let mut tokens = Vec::new();
    for (index, field) in text.split([',', '，']).enumerate() {
        let field = field.trim();
        if field.is_empty() {
            return Err(malformed(format!("field {index} is empty")));
        }
        tokens.extend(field.split_whitespace());
    }

    let mut coords = Vec::with_capacity(tokens.len());
    let mut complex = false;
    for token in tokens {
        let z = parse_token(token)?;
        complex |= token.ends_with('i');
        coords.push(z);
    }
    if complex {
        Weight::complex(coords, lie_type)
    } else {
        Weight::real(coords.into_iter().map(|z| z.re).collect(), lie_type)
    }
}

fn parse_token(token: &str) -> OrbitResult<Complex64> {
    let Some(body) = token.strip_suffix('i') else {
        return Ok(Complex64::new(parse_real(token)?, 0.0));
    };
    let split = body
        .char_indices()
        .skip(1)
        .filter(|&(pos, c)| {
            (c == '+' || c == '-') && !matches!(body.as_bytes()[pos - 1], b'e' | b'E')
        })
        .map(|(pos, _)| pos)
        .last();
    match split {
        Some(pos) => Ok(Complex64::new(
            parse_real(&body[..pos])?,
            parse_imag(&body[pos..], token)?,
        )),
        None => Ok(Complex64::new(0.0, parse_imag(body, token)?)),
    }
}

fn parse_imag(coefficient: &str, token: &str) -> OrbitResult<f64> {
    match coefficient {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        other => parse_real(other)
            .map_err(|_| malformed(format!("malformed complex entry `{token}`"))),
    }
}

fn parse_real(token: &str) -> OrbitResult<f64> {
    let value = match token.split_once('/') {
        Some((num, den)) => {
            let num = parse_float(num, token)?;
            let den = parse_float(den, token)?;
            if den == 0.0 {
                return Err(malformed(format!("zero denominator in `{token}`")));
            }
            num / den
        }
        None => parse_float(token, token)?,
    };
    Ok(value)
}

fn parse_float(raw: &str, token: &str) -> OrbitResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(format!("cannot parse `{token}` as a number"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    #[test]
    fn lie_type_tags() {
        assert_eq!("b".parse::<LieType>().unwrap(), LieType::B);
        assert_eq!(" D ".parse::<LieType>().unwrap(), LieType::D);
        assert_eq!(
            "E".parse::<LieType>(),
            Err(OrbitError::UnsupportedLieType { tag: "E".into() })
        );
        assert_eq!(LieType::B.half_integral_kind(), HollowBoxKind::D);
        assert_eq!(LieType::C.half_integral_kind(), HollowBoxKind::Metaplectic);
    }

    #[test]
    fn parses_reals_and_fractions() {
        let weight = parse_weight("1, 7，4 2 1/2 -3/2", "B").unwrap();
        assert_eq!(weight.domain(), Domain::Real);
        assert_eq!(weight.real_parts(), vec![1.0, 7.0, 4.0, 2.0, 0.5, -1.5]);
        assert_eq!(weight.to_string(), "(1, 7, 4, 2, 0.5, -1.5)");
    }

    #[test]
    fn parses_complex_tokens() {
        let weight = parse_weight("1+2i, 3-0.5i, 2i, i, -i, 4", "C").unwrap();
        assert_eq!(weight.domain(), Domain::Complex);
        assert_eq!(weight.real_parts(), vec![1.0, 3.0, 0.0, 0.0, 0.0, 4.0]);
        assert_eq!(weight.imag_parts(), vec![2.0, -0.5, 2.0, 1.0, -1.0, 0.0]);
        assert_eq!(weight.entry().len(), 12);
        assert_eq!(weight.to_string(), "(1+2i, 3-0.5i, 0+2i, 0+1i, 0-1i, 4)");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_weight("", "A"),
            Err(OrbitError::MalformedInput { .. })
        ));
        assert!(matches!(
            parse_weight("1, x", "A"),
            Err(OrbitError::MalformedInput { .. })
        ));
        assert!(matches!(
            parse_weight("1+zi", "A"),
            Err(OrbitError::MalformedInput { .. })
        ));
        assert!(matches!(
            parse_weight("1/0", "A"),
            Err(OrbitError::MalformedInput { .. })
        ));
        assert!(matches!(
            parse_weight("1", "G"),
            Err(OrbitError::UnsupportedLieType { .. })
        ));
        for text in ["1,,2", "1,2,", ",1", "1, ,2"] {
            assert!(
                matches!(parse_weight(text, "A"), Err(OrbitError::MalformedInput { .. })),
                "{text:?}"
            );
        }
        assert!(Weight::from_parts(&[1.0], &[], LieType::A).is_err());
    }

    #[test]
    fn whitespace_runs_are_one_separator() {
        let weight = parse_weight("  1   2\t3 ,\n4  ", "A").unwrap();
        assert_eq!(weight.real_parts(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Weight::real(vec![bad, 1.0], LieType::B),
                Err(OrbitError::MalformedInput { .. })
            ));
            assert!(Weight::from_parts(&[1.0, 2.0], &[0.5, bad], LieType::C).is_err());
            assert!(Weight::complex(vec![Complex64::new(bad, 0.0)], LieType::D).is_err());
        }
    }

    #[test]
    fn weight_kinds() {
        let kind = |entries: Vec<f64>| Weight::real(entries, LieType::B).unwrap().weight_kind(TOL);
        assert_eq!(kind(vec![]), WeightKind::Empty);
        assert_eq!(kind(vec![1.0, -3.0]), WeightKind::Integral);
        assert_eq!(kind(vec![0.5, 2.5]), WeightKind::HalfIntegral);
        assert_eq!(kind(vec![0.3, -1.3, 2.3]), WeightKind::Congruent);
        assert_eq!(kind(vec![1.0, 0.5]), WeightKind::Mixed);

        let complex = Weight::from_parts(&[1.0, 2.0], &[0.5, 0.5], LieType::C).unwrap();
        assert_eq!(complex.weight_kind(TOL), WeightKind::Congruent);
        let mixed = Weight::from_parts(&[1.0, 2.0], &[0.5, 0.0], LieType::C).unwrap();
        assert_eq!(mixed.weight_kind(TOL), WeightKind::Mixed);
    }
}
