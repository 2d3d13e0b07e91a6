use crate::bls12_381_const::{
    FP_LENGTH, FP_PAD_BY, G1_LENGTH, G2_LENGTH, MODULUS_REPR, PADDED_FP_LENGTH, PADDED_G1_LENGTH,
    PADDED_G2_LENGTH,
};
use crate::PrecompileError;
use core::cmp::Ordering;

/// Removes zeros with which the precompile inputs are left padded to 64 bytes.
///
/// Returns [`PrecompileError::InvalidFieldElementTopBytes`] if any of the padding bytes is set.
pub(super) fn remove_fp_padding(input: &[u8]) -> Result<&[u8; FP_LENGTH], PrecompileError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let (padding, unpadded) = input.split_at(FP_PAD_BY);
    if !padding.iter().all(|&x| x == 0) {
        return Err(PrecompileError::InvalidFieldElementTopBytes);
    }
    unpadded
        .try_into()
        .map_err(|_| PrecompileError::InvalidInputLength)
}

/// Removes the padding of both coordinates of a G1 point, returning `[x, y]`.
///
/// Every coordinate has its top bytes checked before anything else is looked at.
pub(super) fn remove_g1_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 2], PrecompileError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let x = remove_fp_padding(&input[..PADDED_FP_LENGTH])?;
    let y = remove_fp_padding(&input[PADDED_FP_LENGTH..])?;
    Ok([x, y])
}

/// Removes the padding of the four coordinates of a G2 point, returning
/// `[x.c0, x.c1, y.c0, y.c1]`.
pub(super) fn remove_g2_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 4], PrecompileError> {
    if input.len() != PADDED_G2_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let mut coords = [&[0u8; FP_LENGTH]; 4];
    for (i, chunk) in input.chunks_exact(PADDED_FP_LENGTH).enumerate() {
        coords[i] = remove_fp_padding(chunk)?;
    }
    Ok(coords)
}

/// Pads an unpadded G1 point (96 bytes) to the 128 bytes returned by the precompiles.
pub(super) fn pad_g1_point(input: &[u8; G1_LENGTH]) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    for (padded, unpadded) in out
        .chunks_exact_mut(PADDED_FP_LENGTH)
        .zip(input.chunks_exact(FP_LENGTH))
    {
        padded[FP_PAD_BY..].copy_from_slice(unpadded);
    }
    out
}

/// Pads an unpadded G2 point (192 bytes) to the 256 bytes returned by the precompiles.
pub(super) fn pad_g2_point(input: &[u8; G2_LENGTH]) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    for (padded, unpadded) in out
        .chunks_exact_mut(PADDED_FP_LENGTH)
        .zip(input.chunks_exact(FP_LENGTH))
    {
        padded[FP_PAD_BY..].copy_from_slice(unpadded);
    }
    out
}

/// Checks if the input is a valid big-endian representation of a field element.
fn is_valid_be(input: &[u8; FP_LENGTH]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

/// Rejects encodings that are not smaller than the field modulus.
pub(super) fn check_canonical_fp(input: &[u8; FP_LENGTH]) -> Result<(), PrecompileError> {
    if !is_valid_be(input) {
        return Err(PrecompileError::InvalidFieldElement);
    }
    Ok(())
}

/// Returns `true` if every byte of the record is zero.
#[inline]
pub(super) fn is_zero(input: &[u8]) -> bool {
    input.iter().all(|&b| b == 0)
}
