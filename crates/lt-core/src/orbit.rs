// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Orbit classification for highest-weight modules.
//!
//! Type A weights are cut into integral-difference blocks whose tableau shapes
//! are summed row by row. Types B, C and D run the integral and half-integral
//! parts through the tableau builder and the hollow-box repair, add every
//! congruence block twice, and collapse the union to a special partition.
//! Very-even type D orbits are then refined to Type I or Type II.

use crate::decompose::{basic_decomposition, decompose, right_minus, tilde};
use crate::error::OrbitResult;
use crate::partition::{collapse, union, Partition};
use crate::very_even::{resolve_with_trace, VeryEvenBreakdown, VeryEvenType};
use crate::weight::{LieType, Weight, WeightKind};
use lt_config::classifier::{self, ClassifierSettings};
use lt_tableau::{
    DominoInsertion, DominoOracle, HollowBoxAdjuster, HollowBoxKind, PassThrough,
    RobinsonSchensted, TableauBuilder,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Classified nilpotent orbit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NilpotentOrbit {
    partition: Partition,
    very_even: bool,
    very_even_type: Option<VeryEvenType>,
}

impl NilpotentOrbit {
    pub(crate) fn new(partition: Partition, very_even_type: Option<VeryEvenType>) -> Self {
        let very_even = partition.is_very_even();
        Self {
            partition,
            very_even,
            very_even_type: if very_even { very_even_type } else { None },
        }
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn parts(&self) -> &[usize] {
        self.partition.parts()
    }

    pub fn lie_type(&self) -> LieType {
        self.partition.lie_type()
    }

    pub fn is_very_even(&self) -> bool {
        self.very_even
    }

    /// Type I / II refinement; only very-even orbits carry one.
    pub fn very_even_type(&self) -> Option<VeryEvenType> {
        self.very_even_type
    }
}

impl fmt::Display for NilpotentOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lie_type(), self.partition)?;
        match (self.very_even, self.very_even_type) {
            (true, Some(kind)) => write!(f, " very even, type {kind}"),
            (true, None) => f.write_str(" very even"),
            (false, _) => Ok(()),
        }
    }
}

/// A weight together with the tableau shape computed from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitTrace {
    pub weight: Weight,
    pub partition: Vec<usize>,
}

/// Integral or half-integral part of a B/C/D weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartTrace {
    pub weight: Weight,
    pub kind: HollowBoxKind,
    /// Shape of the mirrored part before repair.
    pub shape: Vec<usize>,
    pub adjusted: Vec<usize>,
    pub label: Vec<usize>,
}

/// Every intermediate artifact of one classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitTrace {
    pub weight: Weight,
    pub n: usize,
    pub weight_kind: WeightKind,
    /// Type A blocks and their shapes.
    pub units: Vec<UnitTrace>,
    pub integral: Option<PartTrace>,
    pub half_integral: Option<PartTrace>,
    /// Canonical congruence blocks and their shapes (types B, C, D).
    pub blocks: Vec<UnitTrace>,
    /// Row-wise union before collapse.
    pub union: Vec<usize>,
    pub orbit: NilpotentOrbit,
    pub very_even: Option<VeryEvenBreakdown>,
}

/// Orbit classifier parameterised by its three collaborators.
///
/// The classifier holds no mutable state; share it freely across threads.
#[derive(Clone, Debug)]
pub struct OrbitClassifier<T = RobinsonSchensted, H = PassThrough, D = DominoInsertion> {
    tableau: T,
    hollow_box: H,
    domino: D,
    settings: ClassifierSettings,
}

impl OrbitClassifier {
    /// Reference collaborators tuned to `settings`.
    pub fn with_settings(settings: ClassifierSettings) -> Self {
        Self::new(
            RobinsonSchensted::new(settings.tolerance),
            PassThrough,
            DominoInsertion,
            settings,
        )
    }
}

impl Default for OrbitClassifier {
    fn default() -> Self {
        Self::with_settings(*classifier::settings())
    }
}

impl<T, H, D> OrbitClassifier<T, H, D>
where
    T: TableauBuilder,
    H: HollowBoxAdjuster,
    D: DominoOracle,
{
    pub fn new(tableau: T, hollow_box: H, domino: D, settings: ClassifierSettings) -> Self {
        Self {
            tableau,
            hollow_box,
            domino,
            settings,
        }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    pub fn tableau(&self) -> &T {
        &self.tableau
    }

    pub fn hollow_box(&self) -> &H {
        &self.hollow_box
    }

    pub fn domino(&self) -> &D {
        &self.domino
    }

    pub fn classify(&self, weight: &Weight) -> OrbitResult<NilpotentOrbit> {
        Ok(self.classify_with_trace(weight)?.orbit)
    }

    pub fn classify_with_trace(&self, weight: &Weight) -> OrbitResult<OrbitTrace> {
        let tolerance = self.settings.tolerance;
        let trace = match weight.lie_type() {
            LieType::A => self.classify_type_a(weight),
            lie_type => self.classify_classical(weight, lie_type)?,
        };
        debug!(
            target: "lie_toolbox::orbit",
            weight = %weight,
            kind = ?weight.weight_kind(tolerance),
            orbit = %trace.orbit,
            "classified weight"
        );
        Ok(trace)
    }

    fn shape(&self, weight: &Weight) -> Vec<usize> {
        self.tableau.shape_of(&weight.real_parts())
    }

    fn classify_type_a(&self, weight: &Weight) -> OrbitTrace {
        let tolerance = self.settings.tolerance;
        let units: Vec<UnitTrace> = basic_decomposition(weight, tolerance)
            .into_iter()
            .map(|block| UnitTrace {
                partition: self.shape(&block),
                weight: block,
            })
            .collect();
        let total = units
            .iter()
            .fold(Vec::new(), |acc, unit| union(&acc, &unit.partition));
        let orbit = NilpotentOrbit::new(Partition::new(total.clone(), LieType::A), None);

        OrbitTrace {
            weight: weight.clone(),
            n: weight.n(),
            weight_kind: weight.weight_kind(tolerance),
            units,
            integral: None,
            half_integral: None,
            blocks: Vec::new(),
            union: total,
            orbit,
            very_even: None,
        }
    }

    fn part_trace(&self, part: Weight, kind: HollowBoxKind) -> PartTrace {
        let shape = self.shape(&right_minus(&part));
        let (adjusted, label) = if shape.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                self.hollow_box.adjust(&shape, kind),
                self.hollow_box.label(&shape, kind),
            )
        };
        debug!(
            target: "lie_toolbox::orbit",
            %kind,
            ?shape,
            ?adjusted,
            "repaired part shape"
        );
        PartTrace {
            weight: part,
            kind,
            shape,
            adjusted,
            label,
        }
    }

    fn classify_classical(&self, weight: &Weight, lie_type: LieType) -> OrbitResult<OrbitTrace> {
        let tolerance = self.settings.tolerance;
        let parts = decompose(weight, tolerance);

        let integral = self.part_trace(parts.integral.clone(), lie_type.hollow_box_kind());
        let half_integral =
            self.part_trace(parts.half_integral.clone(), lie_type.half_integral_kind());
        let blocks: Vec<UnitTrace> = parts
            .blocks
            .iter()
            .map(|block| {
                let canonical = tilde(block, tolerance);
                UnitTrace {
                    partition: self.shape(&canonical),
                    weight: canonical,
                }
            })
            .collect();

        let block_total = blocks
            .iter()
            .fold(Vec::new(), |acc, unit| union(&acc, &unit.partition));
        let total = union(
            &union(&integral.adjusted, &half_integral.adjusted),
            &union(&block_total, &block_total),
        );
        let collapsed = collapse(&total, lie_type, self.settings.collapse_budget)?;
        let partition = Partition::new(collapsed, lie_type);

        let very_even = if partition.is_very_even() {
            Some(resolve_with_trace(&parts, &self.domino, tolerance)?)
        } else {
            None
        };
        let orbit = NilpotentOrbit::new(
            partition,
            very_even.as_ref().and_then(|breakdown| breakdown.resolved),
        );

        Ok(OrbitTrace {
            weight: weight.clone(),
            n: weight.n(),
            weight_kind: weight.weight_kind(tolerance),
            units: Vec::new(),
            integral: Some(integral),
            half_integral: Some(half_integral),
            blocks,
            union: total,
            orbit,
            very_even,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(entries: &[f64], lie_type: LieType) -> NilpotentOrbit {
        OrbitClassifier::with_settings(ClassifierSettings::default())
            .classify(&Weight::real(entries.to_vec(), lie_type).unwrap())
            .unwrap()
    }

    #[test]
    fn type_a_sums_block_shapes() {
        let orbit = classify(&[3.0, 2.0, 5.0, 1.0], LieType::A);
        assert_eq!(orbit.parts(), &[2, 1, 1]);
        assert!(!orbit.is_very_even());

        let split = classify(&[0.5, 1.5, 2.0], LieType::A);
        assert_eq!(split.parts(), &[3]);
    }

    #[test]
    fn integral_weights_collapse_their_mirrored_shape() {
        assert_eq!(
            classify(&[1.0, 7.0, 4.0, 2.0, 5.0, 6.0], LieType::B).parts(),
            &[5, 3, 1, 1, 1, 1, 1]
        );
        assert_eq!(classify(&[1.0, 2.0, 3.0], LieType::C).parts(), &[3, 3]);
    }

    #[test]
    fn congruence_blocks_count_twice() {
        let orbit = classify(&[1.0, 0.5, 0.3, -1.3], LieType::C);
        assert_eq!(orbit.parts(), &[6, 2]);
    }

    #[test]
    fn very_even_orbits_are_refined() {
        let orbit = classify(&[4.0, 3.0, -5.0, 6.0], LieType::D);
        assert_eq!(orbit.parts(), &[2, 2, 2, 2]);
        assert!(orbit.is_very_even());
        assert_eq!(orbit.very_even_type(), Some(VeryEvenType::II));
        assert_eq!(orbit.to_string(), "D [2, 2, 2, 2] very even, type II");

        let dominant = classify(&[1.0, 2.0, 3.0, 4.0], LieType::D);
        assert_eq!(dominant.parts(), &[4, 4]);
        assert_eq!(dominant.very_even_type(), Some(VeryEvenType::I));

        let agreeing = classify(&[1.0, 2.0, 0.5, 1.5], LieType::D);
        assert_eq!(agreeing.parts(), &[4, 4]);
        assert_eq!(agreeing.very_even_type(), Some(VeryEvenType::I));
    }

    #[test]
    fn disagreeing_parts_give_type_two() {
        let classifier = OrbitClassifier::with_settings(ClassifierSettings::default());
        let weight = Weight::real(vec![-3.0, -4.0, 0.5, 1.5], LieType::D).unwrap();
        let trace = classifier.classify_with_trace(&weight).unwrap();
        assert_eq!(trace.orbit.parts(), &[4, 4]);
        assert_eq!(trace.orbit.very_even_type(), Some(VeryEvenType::II));

        let breakdown = trace.very_even.unwrap();
        assert_eq!(breakdown.integral, Some(VeryEvenType::I));
        assert_eq!(breakdown.half_integral, Some(VeryEvenType::II));
        assert_eq!(breakdown.blocks, None);
        assert_eq!(breakdown.resolved, Some(VeryEvenType::II));
    }

    #[test]
    fn trace_records_every_stage() {
        let classifier = OrbitClassifier::with_settings(ClassifierSettings::default());
        let weight = Weight::real(vec![0.3, -0.3, 2.0, 1.0], LieType::D).unwrap();
        let trace = classifier.classify_with_trace(&weight).unwrap();
        let integral = trace.integral.as_ref().unwrap();
        assert_eq!(integral.shape, vec![1, 1, 1, 1]);
        assert_eq!(integral.adjusted, vec![1, 1, 1, 1]);
        assert_eq!(integral.kind, HollowBoxKind::D);
        assert!(trace.half_integral.as_ref().unwrap().shape.is_empty());
        assert_eq!(trace.blocks.len(), 1);
        assert_eq!(trace.blocks[0].partition, vec![2]);
        assert_eq!(trace.union, vec![5, 1, 1, 1]);
        assert_eq!(trace.orbit.parts(), &[5, 1, 1, 1]);
        assert_eq!(trace.weight_kind, WeightKind::Mixed);
        assert!(trace.very_even.is_none());
    }
}
