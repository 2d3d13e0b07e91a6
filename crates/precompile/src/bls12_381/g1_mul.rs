//! BLS12-381 G1 mul precompile. More details in [`g1_mul`]
use super::crypto_backend::{encode_g1_point, p1_mul, read_g1, read_scalar};
use super::utils::{pad_g1_point, remove_g1_padding};
use crate::bls12_381_const::{G1_MUL_ADDRESS, G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MUL precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G1Mul, G1_MUL_ADDRESS, g1_mul);

/// G1 multiplication call expects `160` bytes as an input that is interpreted as
/// byte concatenation of encoding of G1 point (`128` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G1 point
/// (`128` bytes).
///
/// The point is checked to be on the curve but not to be in the subgroup, and the scalar
/// may exceed the group order.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiplication>
pub fn g1_mul(input: &[u8]) -> PrecompileResult {
    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let [x, y] = remove_g1_padding(&input[..PADDED_G1_LENGTH])?;
    let point = read_g1(x, y)?;
    let scalar = read_scalar(&input[PADDED_G1_LENGTH..])?;

    let unpadded_result = encode_g1_point(&p1_mul(&point, &scalar));
    Ok(pad_g1_point(&unpadded_result).into())
}
