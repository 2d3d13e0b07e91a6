//! BLS12-381 G2 msm precompile. More details in [`g2_msm`]
use super::crypto_backend::{encode_g2_point, p2_msm, read_g2, read_scalar};
use super::utils::{is_zero, pad_g2_point, remove_g2_padding};
use crate::bls12_381_const::{G2_MULTIEXP_ADDRESS, G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MULTIEXP precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G2MultiExp, G2_MULTIEXP_ADDRESS, g2_msm);

/// Implements EIP-2537 G2MULTIEXP precompile logic
///
/// G2 multi-scalar-multiplication call expects `288*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G2 point (`256` bytes) and encoding of a scalar value (`32`
/// bytes).
///
/// Output is an encoding of multi-scalar-multiplication operation result - single G2
/// point (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation>
pub fn g2_msm(input: &[u8]) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G2_MUL_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = input_len / G2_MUL_INPUT_LENGTH;
    let mut g2_points = Vec::with_capacity(k);
    let mut scalars = Vec::with_capacity(k);
    for record in input.chunks_exact(G2_MUL_INPUT_LENGTH) {
        let (encoded_g2_element, encoded_scalar) = record.split_at(PADDED_G2_LENGTH);

        if is_zero(encoded_g2_element) {
            continue;
        }

        let [x_0, x_1, y_0, y_1] = remove_g2_padding(encoded_g2_element)?;
        let point = read_g2(x_0, x_1, y_0, y_1)?;

        if is_zero(encoded_scalar) {
            continue;
        }

        g2_points.push(point);
        scalars.push(read_scalar(encoded_scalar)?);
    }

    let multiexp = p2_msm(g2_points, scalars);
    Ok(pad_g2_point(&encode_g2_point(&multiexp)).into())
}
