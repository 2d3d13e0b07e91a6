//! Interface for the precompiles. It contains the precompile result type,
//! the precompile function type, and the precompile error type.
use core::fmt;
use primitives::Bytes;

/// A precompile operation result type
///
/// Returns either `Ok(encoded_output)` or `Err(error)`.
pub type PrecompileResult = Result<Bytes, PrecompileError>;

/// Precompile function type. Takes the raw call input and returns the precompile result.
pub type PrecompileFn = fn(&[u8]) -> PrecompileResult;

/// Precompile error type.
///
/// The set is closed: every rejected input maps to exactly one of these, and only the
/// first violation found in input order is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// Input length does not match the operation, including empty input and trailing bytes.
    InvalidInputLength,
    /// The 16 padding bytes of an encoded field element are not zero.
    InvalidFieldElementTopBytes,
    /// Encoded field element is not smaller than the field modulus.
    InvalidFieldElement,
    /// G1 point does not satisfy the curve equation.
    G1PointNotOnCurve,
    /// G2 point does not satisfy the curve equation.
    G2PointNotOnCurve,
    /// G1 point is on the curve but not in the prime order subgroup.
    G1PointSubgroupError,
    /// G2 point is on the curve but not in the prime order subgroup.
    G2PointSubgroupError,
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidInputLength => "invalid input length",
            Self::InvalidFieldElementTopBytes => "invalid field element top bytes",
            Self::InvalidFieldElement => "invalid field element",
            Self::G1PointNotOnCurve => "g1 point is not on curve",
            Self::G2PointNotOnCurve => "g2 point is not on curve",
            Self::G1PointSubgroupError => "g1 point is not on correct subgroup",
            Self::G2PointSubgroupError => "g2 point is not on correct subgroup",
        };
        f.write_str(s)
    }
}
