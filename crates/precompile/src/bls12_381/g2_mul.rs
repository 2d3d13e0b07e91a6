//! BLS12-381 G2 mul precompile. More details in [`g2_mul`]
use super::crypto_backend::{encode_g2_point, p2_mul, read_g2, read_scalar};
use super::utils::{pad_g2_point, remove_g2_padding};
use crate::bls12_381_const::{G2_MUL_ADDRESS, G2_MUL_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MUL precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G2Mul, G2_MUL_ADDRESS, g2_mul);

/// G2 multiplication call expects `288` bytes as an input that is interpreted as
/// byte concatenation of encoding of G2 point (`256` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G2 point
/// (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiplication>
pub fn g2_mul(input: &[u8]) -> PrecompileResult {
    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let [x_0, x_1, y_0, y_1] = remove_g2_padding(&input[..PADDED_G2_LENGTH])?;
    let point = read_g2(x_0, x_1, y_0, y_1)?;
    let scalar = read_scalar(&input[PADDED_G2_LENGTH..])?;

    let unpadded_result = encode_g2_point(&p2_mul(&point, &scalar));
    Ok(pad_g2_point(&unpadded_result).into())
}
