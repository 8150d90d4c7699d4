// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Gelfand–Kirillov dimension of highest-weight modules.

use crate::error::OrbitResult;
use crate::orbit::{NilpotentOrbit, OrbitClassifier, OrbitTrace, PartTrace};
use crate::partition::{a_function, AFunctionKind};
use crate::weight::{LieType, Weight};
use lt_tableau::{DominoOracle, HollowBoxAdjuster, TableauBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GK dimension together with the quantities it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GkDimensionInfo {
    pub weight: Weight,
    pub lie_type: LieType,
    pub n: usize,
    pub orbit: NilpotentOrbit,
    /// Positive-root count the a-values are subtracted from.
    pub root_count: i64,
    /// Total a-value subtracted from `root_count`.
    pub a_value: i64,
    pub gk_dimension: i64,
}

fn adjusted(part: Option<&PartTrace>) -> &[usize] {
    match part {
        Some(trace) => &trace.adjusted,
        None => &[],
    }
}

/// Reads the GK dimension off a classification trace.
pub fn gk_from_trace(trace: &OrbitTrace) -> GkDimensionInfo {
    let n = trace.n as i64;
    let lie_type = trace.weight.lie_type();
    let half_kind = match lie_type {
        LieType::B => AFunctionKind::B,
        LieType::A | LieType::C | LieType::D => AFunctionKind::D,
    };
    let classical_a = a_function(adjusted(trace.integral.as_ref()), AFunctionKind::B)
        + a_function(adjusted(trace.half_integral.as_ref()), half_kind)
        + trace
            .blocks
            .iter()
            .map(|unit| a_function(&unit.partition, AFunctionKind::A))
            .sum::<i64>();

    let (root_count, a_value) = match lie_type {
        LieType::A => (
            n * (n - 1) / 2,
            trace
                .units
                .iter()
                .map(|unit| a_function(&unit.partition, AFunctionKind::A))
                .sum::<i64>(),
        ),
        LieType::B | LieType::C => (n * n, classical_a),
        LieType::D => (n * n - n, classical_a),
    };

    let gk_dimension = root_count - a_value;
    debug!(
        target: "lie_toolbox::orbit",
        ?lie_type,
        n,
        root_count,
        a_value,
        gk_dimension,
        "gk dimension"
    );
    GkDimensionInfo {
        weight: trace.weight.clone(),
        lie_type,
        n: trace.n,
        orbit: trace.orbit.clone(),
        root_count,
        a_value,
        gk_dimension,
    }
}

impl<T, H, D> OrbitClassifier<T, H, D>
where
    T: TableauBuilder,
    H: HollowBoxAdjuster,
    D: DominoOracle,
{
    /// GK dimension of the module with highest weight `weight`.
    pub fn gk_dimension(&self, weight: &Weight) -> OrbitResult<i64> {
        Ok(self.gk_dimension_info(weight)?.gk_dimension)
    }

    pub fn gk_dimension_info(&self, weight: &Weight) -> OrbitResult<GkDimensionInfo> {
        let trace = self.classify_with_trace(weight)?;
        Ok(gk_from_trace(&trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lt_config::classifier::ClassifierSettings;

    fn gk(entries: &[f64], lie_type: LieType) -> i64 {
        OrbitClassifier::with_settings(ClassifierSettings::default())
            .gk_dimension(&Weight::real(entries.to_vec(), lie_type).unwrap())
            .unwrap()
    }

    #[test]
    fn type_a_subtracts_block_a_values() {
        assert_eq!(gk(&[3.0, 2.0, 5.0, 1.0], LieType::A), 3);
        assert_eq!(gk(&[], LieType::A), 0);
    }

    #[test]
    fn classical_types() {
        assert_eq!(gk(&[1.0, 7.0, 4.0, 2.0, 5.0, 6.0], LieType::B), 26);
        assert_eq!(gk(&[4.0, 3.0, -5.0, 6.0], LieType::D), 6);
        assert_eq!(gk(&[0.5, 1.5, -2.5], LieType::C), 8);
        assert_eq!(gk(&[1.0, 0.5, 0.3, -1.3], LieType::C), 15);
        assert_eq!(gk(&[2.0, 1.0, 1.5], LieType::B), 4);
        assert_eq!(gk(&[], LieType::D), 0);
    }

    #[test]
    fn info_breaks_down_the_subtraction() {
        let classifier = OrbitClassifier::with_settings(ClassifierSettings::default());
        let weight = Weight::real(vec![0.3, -0.3, 2.0, 1.0], LieType::D).unwrap();
        let info = classifier.gk_dimension_info(&weight).unwrap();
        assert_eq!(info.root_count, 12);
        assert_eq!(info.gk_dimension, 8);
        assert_eq!(info.root_count - info.a_value, info.gk_dimension);
        assert_eq!(info.orbit.parts(), &[5, 1, 1, 1]);
    }
}
