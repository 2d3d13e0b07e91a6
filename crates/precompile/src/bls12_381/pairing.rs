//! BLS12-381 pairing precompile. More details in [`pairing`]
use super::crypto_backend::{
    check_g1_subgroup, check_g2_subgroup, pairing_check, read_g1, read_g2,
};
use super::utils::{remove_g1_padding, remove_g2_padding};
use crate::bls12_381_const::{PADDED_G1_LENGTH, PAIRING_ADDRESS, PAIRING_INPUT_LENGTH};
use crate::{Precompile, PrecompileError, PrecompileId, PrecompileResult};
use primitives::B256;
use std::vec::Vec;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING precompile.
pub const PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12Pairing, PAIRING_ADDRESS, pairing);

/// Pairing call expects 384*k (k being a positive integer) bytes as an inputs
/// that is interpreted as byte concatenation of k slices. Each slice has the
/// following structure:
///    * 128 bytes of G1 point encoding
///    * 256 bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order q.
/// Output is 32 bytes where first 31 bytes are equal to 0x00 and the last byte
/// is 0x01 if pairing result is equal to the multiplicative identity in a pairing
/// target field and 0x00 otherwise.
///
/// Each pair is fully decoded before its subgroup checks run, G1 first.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing(input: &[u8]) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % PAIRING_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = input_len / PAIRING_INPUT_LENGTH;
    let mut pairs = Vec::with_capacity(k);
    for encoded_pair in input.chunks_exact(PAIRING_INPUT_LENGTH) {
        let (encoded_g1_element, encoded_g2_element) = encoded_pair.split_at(PADDED_G1_LENGTH);

        let [a_x, a_y] = remove_g1_padding(encoded_g1_element)?;
        let p1_aff = read_g1(a_x, a_y)?;

        let [b_x_0, b_x_1, b_y_0, b_y_1] = remove_g2_padding(encoded_g2_element)?;
        let p2_aff = read_g2(b_x_0, b_x_1, b_y_0, b_y_1)?;

        // NB: Pairings MUST perform a subgroup check.
        check_g1_subgroup(&p1_aff)?;
        check_g2_subgroup(&p2_aff)?;

        pairs.push((p1_aff, p2_aff));
    }

    let result = if pairing_check(&pairs) { 1 } else { 0 };
    Ok(B256::with_last_byte(result).into())
}
