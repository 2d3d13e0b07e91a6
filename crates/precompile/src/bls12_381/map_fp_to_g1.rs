//! BLS12-381 map fp to g1 precompile. More details in [`map_fp_to_g1`]
use super::{
    crypto_backend::{encode_g1_point, map_fp_to_g1 as map_to_curve, read_fp},
    utils::{pad_g1_point, remove_fp_padding},
};
use crate::bls12_381_const::{MAP_FP_TO_G1_ADDRESS, PADDED_FP_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP_TO_G1 precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12MapFpToG1, MAP_FP_TO_G1_ADDRESS, map_fp_to_g1);

/// Field-to-curve call expects 64 bytes as an input that is interpreted as an
/// element of Fp. Output of this call is 128 bytes and is an encoded G1 point.
///
/// The element is mapped with the simplified SWU map followed by the 11-isogeny and
/// cofactor clearing, so the result always lies in the prime order subgroup.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp-element-to-g1-point>
pub fn map_fp_to_g1(input: &[u8]) -> PrecompileResult {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let input_p0 = remove_fp_padding(input)?;
    let fp = read_fp(input_p0)?;
    let p_aff = map_to_curve(&fp);

    let unpadded_result = encode_g1_point(&p_aff);
    Ok(pad_g1_point(&unpadded_result).into())
}
