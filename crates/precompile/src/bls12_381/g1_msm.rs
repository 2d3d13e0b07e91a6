//! BLS12-381 G1 msm precompile. More details in [`g1_msm`]
use super::crypto_backend::{encode_g1_point, p1_msm, read_g1, read_scalar};
use super::utils::{is_zero, pad_g1_point, remove_g1_padding};
use crate::bls12_381_const::{G1_MULTIEXP_ADDRESS, G1_MUL_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MULTIEXP precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G1MultiExp, G1_MULTIEXP_ADDRESS, g1_msm);

/// Implements EIP-2537 G1MULTIEXP precompile.
/// G1 multi-scalar-multiplication call expects `160*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G1 point (`128` bytes) and encoding of a scalar value (`32`
/// bytes).
/// Output is an encoding of multi-scalar-multiplication operation result - single G1
/// point (`128` bytes).
///
/// Records are validated in input order, so the reported error is the one of the first
/// invalid record.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiexponentiation>
pub fn g1_msm(input: &[u8]) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G1_MUL_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = input_len / G1_MUL_INPUT_LENGTH;
    let mut g1_points = Vec::with_capacity(k);
    let mut scalars = Vec::with_capacity(k);
    for record in input.chunks_exact(G1_MUL_INPUT_LENGTH) {
        let (encoded_g1_element, encoded_scalar) = record.split_at(PADDED_G1_LENGTH);

        // Points at infinity do not contribute to the sum.
        if is_zero(encoded_g1_element) {
            continue;
        }

        let [x, y] = remove_g1_padding(encoded_g1_element)?;
        let point = read_g1(x, y)?;

        // Checked after the point, an invalid point with a zero scalar still fails.
        if is_zero(encoded_scalar) {
            continue;
        }

        g1_points.push(point);
        scalars.push(read_scalar(encoded_scalar)?);
    }

    let multiexp = p1_msm(g1_points, scalars);
    Ok(pad_g1_point(&encode_g1_point(&multiexp)).into())
}
