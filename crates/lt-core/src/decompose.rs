// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Splitting a weight into integral, half-integral and congruence parts.

use crate::entry::{is_integer, EntryKind};
use crate::weight::{congruent_to, LieType, Weight};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Integral part, half-integral part and congruence blocks of a weight.
///
/// The three parts partition the coordinates of the source weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightDecomposition {
    pub integral: Weight,
    pub half_integral: Weight,
    /// Blocks of mutually congruent coordinates, each typed as A.
    pub blocks: Vec<Weight>,
}

impl WeightDecomposition {
    /// All coordinates, part by part.
    pub fn coords(&self) -> Vec<Complex64> {
        let mut all = self.integral.coords().to_vec();
        all.extend_from_slice(self.half_integral.coords());
        for block in &self.blocks {
            all.extend_from_slice(block.coords());
        }
        all
    }
}

/// Decomposition used for types B, C and D.
pub fn decompose(weight: &Weight, tolerance: f64) -> WeightDecomposition {
    let mut integral = Vec::new();
    let mut half = Vec::new();
    let mut remainder = Vec::new();
    for &z in weight.coords() {
        match Weight::coord_kind(z, tolerance) {
            EntryKind::Integer => integral.push(z),
            EntryKind::HalfInteger => half.push(z),
            EntryKind::Other => remainder.push(z),
        }
    }

    let blocks = split_blocks(remainder, |z, anchor| congruent_to(z, anchor, tolerance))
        .into_iter()
        .map(|coords| weight.with_coords(coords).with_type(LieType::A))
        .collect();

    WeightDecomposition {
        integral: weight.with_coords(integral),
        half_integral: weight.with_coords(half),
        blocks,
    }
}

/// Decomposition used for type A: blocks of coordinates differing by integers.
pub fn basic_decomposition(weight: &Weight, tolerance: f64) -> Vec<Weight> {
    split_blocks(weight.coords().to_vec(), |z, anchor| {
        (z.im - anchor.im).abs() < tolerance && is_integer(z.re - anchor.re, tolerance)
    })
    .into_iter()
    .map(|coords| weight.with_coords(coords))
    .collect()
}

fn split_blocks(
    mut remainder: Vec<Complex64>,
    related: impl Fn(Complex64, Complex64) -> bool,
) -> Vec<Vec<Complex64>> {
    let mut blocks = Vec::new();
    while !remainder.is_empty() {
        let anchor = remainder.remove(0);
        let (mut rest_of_block, rest): (Vec<Complex64>, Vec<Complex64>) =
            remainder.into_iter().partition(|&z| related(z, anchor));
        rest_of_block.insert(0, anchor);
        blocks.push(rest_of_block);
        remainder = rest;
    }
    blocks
}

/// `entries ++ reverse(negate(entries))`.
pub fn right_minus(weight: &Weight) -> Weight {
    let coords = weight.coords();
    let mut doubled = coords.to_vec();
    doubled.extend(coords.iter().rev().map(|&z| -z));
    weight.with_coords(doubled)
}

/// Coordinates whose real part differs from the first by an integer, and the rest.
fn self_congruent_split(weight: &Weight, tolerance: f64) -> (Vec<Complex64>, Vec<Complex64>) {
    let Some(first) = weight.coords().first().copied() else {
        return (Vec::new(), Vec::new());
    };
    weight
        .coords()
        .iter()
        .partition(|z| is_integer(z.re - first.re, tolerance))
}

/// Canonical signed representative of a congruence block: the larger of the
/// two sign classes comes first and the smaller one is mirrored after it.
pub fn tilde(weight: &Weight, tolerance: f64) -> Weight {
    let (same, flipped) = self_congruent_split(weight, tolerance);
    let (mut kept, mirrored) = if same.len() >= flipped.len() {
        (same, flipped)
    } else {
        (flipped, same)
    };
    kept.extend(mirrored.iter().rev().map(|&z| -z));
    weight.with_coords(kept)
}

/// Size of the smaller sign class of a congruence block.
pub fn q_negative(weight: &Weight, tolerance: f64) -> usize {
    let (same, flipped) = self_congruent_split(weight, tolerance);
    same.len().min(flipped.len())
}

/// Flips every positive coordinate and sorts ascending.
pub fn antidominant(weight: &Weight) -> Weight {
    let mut coords: Vec<Complex64> = weight
        .coords()
        .iter()
        .map(|&z| if z.re > 0.0 { -z } else { z })
        .collect();
    coords.sort_by(|a, b| a.re.total_cmp(&b.re));
    weight.with_coords(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    fn real(entries: &[f64], lie_type: LieType) -> Weight {
        Weight::real(entries.to_vec(), lie_type).unwrap()
    }

    #[test]
    fn splits_by_entry_kind() {
        let weight = real(&[1.0, 0.5, 0.3, 2.0, -1.3, 0.25, -1.5, 1.75], LieType::C);
        let parts = decompose(&weight, TOL);
        assert_eq!(parts.integral.real_parts(), vec![1.0, 2.0]);
        assert_eq!(parts.half_integral.real_parts(), vec![0.5, -1.5]);
        assert_eq!(parts.blocks.len(), 2);
        assert_eq!(parts.blocks[0].real_parts(), vec![0.3, -1.3]);
        assert_eq!(parts.blocks[1].real_parts(), vec![0.25, 1.75]);
        assert!(parts.blocks.iter().all(|b| b.lie_type() == LieType::A));
        assert_eq!(parts.integral.lie_type(), LieType::C);
    }

    #[test]
    fn complex_blocks_need_matching_imaginary_parts() {
        let weight = Weight::from_parts(&[1.0, 2.0, 3.0], &[0.5, 0.5, -0.5], LieType::B).unwrap();
        let parts = decompose(&weight, TOL);
        assert!(parts.integral.is_empty());
        assert_eq!(parts.blocks.len(), 2);
        assert_eq!(parts.blocks[0].imag_parts(), vec![0.5, 0.5]);
    }

    #[test]
    fn unrelated_anchor_still_leaves_the_remainder() {
        let coords = vec![
            Complex64::new(f64::NAN, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
        ];
        let blocks = split_blocks(coords, |z, anchor| congruent_to(z, anchor, TOL));
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0][0].re.is_nan());
        assert_eq!(blocks[1], vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)]);
    }

    #[test]
    fn basic_decomposition_ignores_sign_symmetry() {
        let weight = real(&[0.3, -0.3, 1.3, 2.0, 0.0], LieType::A);
        let blocks = basic_decomposition(&weight, TOL);
        let parts: Vec<Vec<f64>> = blocks.iter().map(Weight::real_parts).collect();
        assert_eq!(parts, vec![vec![0.3, 1.3], vec![-0.3], vec![2.0, 0.0]]);
    }

    #[test]
    fn mirrored_weights() {
        let weight = real(&[4.0, 3.0, -5.0, 6.0], LieType::D);
        assert_eq!(
            right_minus(&weight).real_parts(),
            vec![4.0, 3.0, -5.0, 6.0, -6.0, 5.0, -3.0, -4.0]
        );
        assert_eq!(
            antidominant(&weight).real_parts(),
            vec![-6.0, -5.0, -4.0, -3.0]
        );
    }

    #[test]
    fn tilde_keeps_the_larger_sign_class_first() {
        let block = real(&[0.3, -1.3, -0.3, 2.3], LieType::A);
        let canonical = tilde(&block, TOL);
        let re = canonical.real_parts();
        assert_eq!(re.len(), 4);
        assert!((re[0] - 0.3).abs() < TOL);
        assert!((re[1] - 2.3).abs() < TOL);
        assert!((re[2] - 0.3).abs() < TOL);
        assert!((re[3] - 1.3).abs() < TOL);
        assert_eq!(q_negative(&block, TOL), 2);

        let minority_first = real(&[0.3, -0.3, -1.3], LieType::A);
        assert_eq!(tilde(&minority_first, TOL).real_parts(), vec![-0.3, -1.3, -0.3]);
        assert_eq!(q_negative(&minority_first, TOL), 1);
        assert_eq!(q_negative(&real(&[], LieType::A), TOL), 0);
    }
}
