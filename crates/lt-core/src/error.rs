// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

use lt_tableau::PermutationError;
use thiserror::Error;

pub type OrbitResult<T> = Result<T, OrbitError>;

/// Failures raised while parsing weights or classifying orbits.
///
/// Every operation is deterministic, so none of these is worth retrying.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrbitError {
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
    #[error("unsupported Lie type `{tag}`")]
    UnsupportedLieType { tag: String },
    #[error("symbol must be made special before converting back to a partition")]
    NonSpecialSymbol,
    #[error("invalid signed permutation: {0}")]
    InvalidPermutation(#[from] PermutationError),
    #[error("internal invariant violated in {context}: parts {parts:?}")]
    InternalInvariantViolation {
        context: &'static str,
        parts: Vec<i64>,
    },
}

pub(crate) fn malformed(reason: impl Into<String>) -> OrbitError {
    OrbitError::MalformedInput {
        reason: reason.into(),
    }
}

pub(crate) fn unsupported(tag: impl ToString) -> OrbitError {
    OrbitError::UnsupportedLieType {
        tag: tag.to_string(),
    }
}

pub(crate) fn invariant(context: &'static str, parts: &[usize]) -> OrbitError {
    OrbitError::InternalInvariantViolation {
        context,
        parts: parts.iter().map(|&p| p as i64).collect(),
    }
}
