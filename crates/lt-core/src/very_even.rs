// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Type I / Type II refinement of very-even type D orbits.
//!
//! Each part of the decomposition casts a verdict. Congruence blocks vote by
//! the parity of their smaller sign class; the integral and half-integral
//! parts vote through the vertical domino count of the signed permutation
//! relating them to their antidominant form.

use crate::decompose::{antidominant, decompose, q_negative, WeightDecomposition};
use crate::error::{OrbitError, OrbitResult};
use crate::weight::Weight;
use lt_tableau::{DominoOracle, SignedPermutation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VeryEvenType {
    I,
    II,
}

impl VeryEvenType {
    pub fn from_parity(even: bool) -> Self {
        if even {
            VeryEvenType::I
        } else {
            VeryEvenType::II
        }
    }
}

impl fmt::Display for VeryEvenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VeryEvenType::I => f.write_str("I"),
            VeryEvenType::II => f.write_str("II"),
        }
    }
}

/// Combines two verdicts. A missing verdict is neutral; equal verdicts give
/// Type I and differing ones Type II.
pub fn combine(left: Option<VeryEvenType>, right: Option<VeryEvenType>) -> Option<VeryEvenType> {
    match (left, right) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(VeryEvenType::from_parity(a == b)),
    }
}

/// Signed permutation relating a weight `lambda` to its antidominant form `mu`.
///
/// Both sequences are mirrored; the second half of the mirrored `mu` is
/// matched right to left against unused entries of the mirrored `lambda`.
/// The result carries `lambda` read backwards onto `mu` read backwards.
pub fn extract_signed_permutation(
    lambda: &[f64],
    mu: &[f64],
    tolerance: f64,
) -> OrbitResult<SignedPermutation> {
    let n = lambda.len();
    if mu.len() != n {
        return Err(lt_tableau::PermutationError::LengthMismatch {
            expected: n,
            got: mu.len(),
        }
        .into());
    }
    let mirror = |values: &[f64]| -> Vec<f64> {
        values
            .iter()
            .copied()
            .chain(values.iter().rev().map(|&v| -v))
            .collect()
    };
    let lambda_m = mirror(lambda);
    let mu_m = mirror(mu);

    let mut used = vec![false; 2 * n];
    let mut entries = Vec::with_capacity(n);
    for i in (n..2 * n).rev() {
        let j = (0..2 * n)
            .rev()
            .find(|&j| !used[j] && (mu_m[i] - lambda_m[j]).abs() < tolerance)
            .ok_or_else(|| OrbitError::InternalInvariantViolation {
                context: "no match while extracting a signed permutation",
                parts: Vec::new(),
            })?;
        used[j] = true;
        let signed = if j < n {
            j as i64 - n as i64
        } else {
            (j - n + 1) as i64
        };
        entries.push(signed);
    }
    entries.reverse();
    Ok(SignedPermutation::new(entries)?)
}

/// Verdict of a single congruence block.
pub fn block_verdict(block: &Weight, tolerance: f64) -> VeryEvenType {
    VeryEvenType::from_parity(q_negative(block, tolerance) % 2 == 0)
}

/// Verdict of the integral or half-integral part; `None` when the part is
/// empty or the vertical domino count is odd.
pub fn domino_verdict<O>(
    part: &Weight,
    oracle: &O,
    tolerance: f64,
) -> OrbitResult<Option<VeryEvenType>>
where
    O: DominoOracle + ?Sized,
{
    if part.is_empty() {
        return Ok(None);
    }
    let lambda = part.real_parts();
    let mu = antidominant(part).real_parts();
    let permutation = extract_signed_permutation(&lambda, &mu, tolerance)?;
    let tableau = oracle.domino_tableau(&permutation);
    let vertical = oracle.vertical_domino_count(&tableau);
    debug!(
        target: "lie_toolbox::very_even",
        %permutation,
        vertical,
        "domino verdict"
    );
    Ok(match vertical % 4 {
        0 => Some(VeryEvenType::I),
        2 => Some(VeryEvenType::II),
        _ => None,
    })
}

/// Per-part verdicts and their combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeryEvenBreakdown {
    pub integral: Option<VeryEvenType>,
    pub half_integral: Option<VeryEvenType>,
    /// Aggregate over all blocks: parity of the summed `q_negative`.
    pub blocks: Option<VeryEvenType>,
    pub block_q_negative: Vec<usize>,
    pub resolved: Option<VeryEvenType>,
}

pub fn resolve_with_trace<O>(
    parts: &WeightDecomposition,
    oracle: &O,
    tolerance: f64,
) -> OrbitResult<VeryEvenBreakdown>
where
    O: DominoOracle + ?Sized,
{
    let integral = domino_verdict(&parts.integral, oracle, tolerance)?;
    let half_integral = domino_verdict(&parts.half_integral, oracle, tolerance)?;
    let block_q_negative: Vec<usize> = parts
        .blocks
        .iter()
        .map(|block| q_negative(block, tolerance))
        .collect();
    let blocks = (!block_q_negative.is_empty())
        .then(|| VeryEvenType::from_parity(block_q_negative.iter().sum::<usize>() % 2 == 0));
    let resolved = combine(combine(integral, half_integral), blocks);
    debug!(
        target: "lie_toolbox::very_even",
        ?integral,
        ?half_integral,
        ?blocks,
        ?resolved,
        "resolved very-even type"
    );
    Ok(VeryEvenBreakdown {
        integral,
        half_integral,
        blocks,
        block_q_negative,
        resolved,
    })
}

/// Resolves the very-even type of a weight directly.
pub fn resolve<O>(
    weight: &Weight,
    oracle: &O,
    tolerance: f64,
) -> OrbitResult<Option<VeryEvenType>>
where
    O: DominoOracle + ?Sized,
{
    Ok(resolve_with_trace(&decompose(weight, tolerance), oracle, tolerance)?.resolved)
}

/// Checks that `permutation` sends reversed `lambda` to reversed `mu`.
pub fn carries(
    permutation: &SignedPermutation,
    lambda: &[f64],
    mu: &[f64],
    tolerance: f64,
) -> bool {
    let reversed = |values: &[f64]| values.iter().rev().copied().collect::<Vec<f64>>();
    match permutation.act(&reversed(lambda)) {
        Ok(image) => {
            image.len() == mu.len()
                && image
                    .iter()
                    .zip(reversed(mu))
                    .all(|(a, b)| (a - b).abs() < tolerance)
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::LieType;
    use lt_tableau::DominoInsertion;
    use VeryEvenType::{I, II};

    const TOL: f64 = 1e-7;

    #[test]
    fn combination_table() {
        assert_eq!(combine(Some(I), Some(I)), Some(I));
        assert_eq!(combine(Some(II), Some(II)), Some(I));
        assert_eq!(combine(Some(I), Some(II)), Some(II));
        assert_eq!(combine(Some(II), Some(I)), Some(II));
        assert_eq!(combine(None, Some(II)), Some(II));
        assert_eq!(combine(Some(I), None), Some(I));
        assert_eq!(combine(None, None), None);
    }

    #[test]
    fn extracts_permutation_to_antidominant_form() {
        let lambda = [4.0, 3.0, -5.0, 6.0];
        let mu = [-6.0, -5.0, -4.0, -3.0];
        let g = extract_signed_permutation(&lambda, &mu, TOL).unwrap();
        assert_eq!(g.entries(), &[-3, -4, 2, -1]);
        assert!(carries(&g, &lambda, &mu, TOL));
    }

    #[test]
    fn repeated_and_zero_entries_stay_bijective() {
        for lambda in [vec![1.0, -1.0], vec![1.0, 1.0], vec![0.0, 0.0, 1.0], vec![0.5, -1.5, 0.5]] {
            let mu = antidominant(&Weight::real(lambda.clone(), LieType::D).unwrap()).real_parts();
            let g = extract_signed_permutation(&lambda, &mu, TOL).unwrap();
            assert!(carries(&g, &lambda, &mu, TOL), "{lambda:?} via {g}");
        }
    }

    #[test]
    fn integral_part_votes_through_dominoes() {
        let weight = Weight::real(vec![4.0, 3.0, -5.0, 6.0], LieType::D).unwrap();
        let verdict = domino_verdict(&weight, &DominoInsertion, TOL).unwrap();
        assert_eq!(verdict, Some(II));
        assert_eq!(resolve(&weight, &DominoInsertion, TOL).unwrap(), Some(II));
    }

    #[test]
    fn blocks_vote_by_sign_class_parity() {
        let block = Weight::real(vec![0.3, -1.3, -0.3, 2.3], LieType::A).unwrap();
        assert_eq!(block_verdict(&block, TOL), I);
        let weight = Weight::real(vec![0.3, -0.3, -1.3], LieType::D).unwrap();
        let breakdown =
            resolve_with_trace(&decompose(&weight, TOL), &DominoInsertion, TOL).unwrap();
        assert_eq!(breakdown.integral, None);
        assert_eq!(breakdown.block_q_negative, vec![1]);
        assert_eq!(breakdown.blocks, Some(II));
        assert_eq!(breakdown.resolved, Some(II));
    }
}
