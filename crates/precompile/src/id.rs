//! Identifiers for the nine BLS12-381 precompiles, with their names and addresses.
use core::fmt;

use primitives::Address;

use crate::{bls12_381, bls12_381_const::*, u64_to_address, Precompile};

/// Unique precompile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrecompileId {
    /// Point addition in G1 (curve over base prime field).
    Bls12G1Add,
    /// Scalar multiplication in G1.
    Bls12G1Mul,
    /// Multi-scalar-multiplication in G1.
    Bls12G1MultiExp,
    /// Point addition in G2 (curve over quadratic extension of the base prime field).
    Bls12G2Add,
    /// Scalar multiplication in G2.
    Bls12G2Mul,
    /// Multi-scalar-multiplication in G2.
    Bls12G2MultiExp,
    /// Pairing operations between a set of pairs of (G1, G2) points.
    Bls12Pairing,
    /// Base field element mapping into the G1 point.
    Bls12MapFpToG1,
    /// Extension field element mapping into the G2 point.
    Bls12MapFp2ToG2,
}

impl PrecompileId {
    /// All identifiers, ordered by address.
    pub const ALL: [Self; 9] = [
        Self::Bls12G1Add,
        Self::Bls12G1Mul,
        Self::Bls12G1MultiExp,
        Self::Bls12G2Add,
        Self::Bls12G2Mul,
        Self::Bls12G2MultiExp,
        Self::Bls12Pairing,
        Self::Bls12MapFpToG1,
        Self::Bls12MapFp2ToG2,
    ];

    /// Returns the address the precompile is installed at.
    pub const fn address(&self) -> Address {
        let address = match self {
            Self::Bls12G1Add => G1_ADD_ADDRESS,
            Self::Bls12G1Mul => G1_MUL_ADDRESS,
            Self::Bls12G1MultiExp => G1_MULTIEXP_ADDRESS,
            Self::Bls12G2Add => G2_ADD_ADDRESS,
            Self::Bls12G2Mul => G2_MUL_ADDRESS,
            Self::Bls12G2MultiExp => G2_MULTIEXP_ADDRESS,
            Self::Bls12Pairing => PAIRING_ADDRESS,
            Self::Bls12MapFpToG1 => MAP_FP_TO_G1_ADDRESS,
            Self::Bls12MapFp2ToG2 => MAP_FP2_TO_G2_ADDRESS,
        };
        u64_to_address(address)
    }

    /// Returns the name of the precompile.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bls12G1Add => "BLS12_G1ADD",
            Self::Bls12G1Mul => "BLS12_G1MUL",
            Self::Bls12G1MultiExp => "BLS12_G1MULTIEXP",
            Self::Bls12G2Add => "BLS12_G2ADD",
            Self::Bls12G2Mul => "BLS12_G2MUL",
            Self::Bls12G2MultiExp => "BLS12_G2MULTIEXP",
            Self::Bls12Pairing => "BLS12_PAIRING",
            Self::Bls12MapFpToG1 => "BLS12_MAP_FP_TO_G1",
            Self::Bls12MapFp2ToG2 => "BLS12_MAP_FP2_TO_G2",
        }
    }

    /// Returns the precompile for this identifier.
    pub const fn precompile(&self) -> Precompile {
        match self {
            Self::Bls12G1Add => bls12_381::g1_add::PRECOMPILE,
            Self::Bls12G1Mul => bls12_381::g1_mul::PRECOMPILE,
            Self::Bls12G1MultiExp => bls12_381::g1_msm::PRECOMPILE,
            Self::Bls12G2Add => bls12_381::g2_add::PRECOMPILE,
            Self::Bls12G2Mul => bls12_381::g2_mul::PRECOMPILE,
            Self::Bls12G2MultiExp => bls12_381::g2_msm::PRECOMPILE,
            Self::Bls12Pairing => bls12_381::pairing::PRECOMPILE,
            Self::Bls12MapFpToG1 => bls12_381::map_fp_to_g1::PRECOMPILE,
            Self::Bls12MapFp2ToG2 => bls12_381::map_fp2_to_g2::PRECOMPILE,
        }
    }
}

impl fmt::Display for PrecompileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
