// This module contains a safe wrapper around the blst library.

use super::utils::check_canonical_fp;
use crate::bls12_381_const::{FP_LENGTH, G1_LENGTH, G2_LENGTH, NBITS, SCALAR_LENGTH};
use crate::PrecompileError;
use blst::{
    blst_bendian_from_fp, blst_final_exp, blst_fp, blst_fp12, blst_fp12_is_one, blst_fp12_mul,
    blst_fp2, blst_fp_from_bendian, blst_map_to_g1, blst_map_to_g2, blst_miller_loop, blst_p1,
    blst_p1_add_or_double, blst_p1_add_or_double_affine, blst_p1_affine, blst_p1_affine_in_g1,
    blst_p1_affine_is_inf, blst_p1_affine_on_curve, blst_p1_double, blst_p1_from_affine,
    blst_p1_in_g1, blst_p1_mult, blst_p1_to_affine, blst_p2, blst_p2_add_or_double,
    blst_p2_add_or_double_affine, blst_p2_affine, blst_p2_affine_in_g2, blst_p2_affine_is_inf,
    blst_p2_affine_on_curve, blst_p2_double, blst_p2_from_affine, blst_p2_in_g2, blst_p2_mult,
    blst_p2_to_affine, blst_scalar, blst_scalar_from_bendian, MultiPoint,
};
use std::vec::Vec;

fn p1_to_affine(p: &blst_p1) -> blst_p1_affine {
    let mut p_affine = blst_p1_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_to_affine(&mut p_affine, p) };
    p_affine
}

fn p1_from_affine(p_affine: &blst_p1_affine) -> blst_p1 {
    let mut p = blst_p1::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_from_affine(&mut p, p_affine) };
    p
}

fn p2_to_affine(p: &blst_p2) -> blst_p2_affine {
    let mut p_affine = blst_p2_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_to_affine(&mut p_affine, p) };
    p_affine
}

fn p2_from_affine(p_affine: &blst_p2_affine) -> blst_p2 {
    let mut p = blst_p2::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_from_affine(&mut p, p_affine) };
    p
}

#[inline]
fn is_g1_infinity(p: &blst_p1_affine) -> bool {
    // SAFETY: p is a valid blst type
    unsafe { blst_p1_affine_is_inf(p) }
}

#[inline]
fn is_g2_infinity(p: &blst_p2_affine) -> bool {
    // SAFETY: p is a valid blst type
    unsafe { blst_p2_affine_is_inf(p) }
}

/// Decodes a base field element from its unpadded big-endian encoding.
///
/// Returns [`PrecompileError::InvalidFieldElement`] if the value is not smaller than the
/// modulus.
pub(super) fn read_fp(input: &[u8; FP_LENGTH]) -> Result<blst_fp, PrecompileError> {
    check_canonical_fp(input)?;
    let mut fp = blst_fp::default();
    // SAFETY: input has fixed length, and fp is a blst value.
    unsafe { blst_fp_from_bendian(&mut fp, input.as_ptr()) };
    Ok(fp)
}

/// Decodes an fp2 element from its `c0` and `c1` coefficients.
pub(super) fn read_fp2(
    c0: &[u8; FP_LENGTH],
    c1: &[u8; FP_LENGTH],
) -> Result<blst_fp2, PrecompileError> {
    Ok(blst_fp2 {
        fp: [read_fp(c0)?, read_fp(c1)?],
    })
}

/// Decodes a G1 point from its unpadded affine coordinates.
///
/// Both coordinates are range checked before the curve equation is evaluated. The all-zero
/// encoding is the point at infinity and skips the curve check.
pub(super) fn read_g1(
    x: &[u8; FP_LENGTH],
    y: &[u8; FP_LENGTH],
) -> Result<blst_p1_affine, PrecompileError> {
    let point = blst_p1_affine {
        x: read_fp(x)?,
        y: read_fp(y)?,
    };
    if is_g1_infinity(&point) {
        return Ok(point);
    }
    // SAFETY: point is a blst value.
    if unsafe { !blst_p1_affine_on_curve(&point) } {
        return Err(PrecompileError::G1PointNotOnCurve);
    }
    Ok(point)
}

/// Decodes a G2 point from its unpadded coordinates `x.c0, x.c1, y.c0, y.c1`.
pub(super) fn read_g2(
    x0: &[u8; FP_LENGTH],
    x1: &[u8; FP_LENGTH],
    y0: &[u8; FP_LENGTH],
    y1: &[u8; FP_LENGTH],
) -> Result<blst_p2_affine, PrecompileError> {
    let point = blst_p2_affine {
        x: read_fp2(x0, x1)?,
        y: read_fp2(y0, y1)?,
    };
    if is_g2_infinity(&point) {
        return Ok(point);
    }
    // SAFETY: point is a blst value.
    if unsafe { !blst_p2_affine_on_curve(&point) } {
        return Err(PrecompileError::G2PointNotOnCurve);
    }
    Ok(point)
}

/// Checks that an on-curve G1 point lies in the prime order subgroup.
pub(super) fn check_g1_subgroup(p: &blst_p1_affine) -> Result<(), PrecompileError> {
    // SAFETY: p is a blst value.
    if is_g1_infinity(p) || unsafe { blst_p1_affine_in_g1(p) } {
        Ok(())
    } else {
        Err(PrecompileError::G1PointSubgroupError)
    }
}

/// Checks that an on-curve G2 point lies in the prime order subgroup.
pub(super) fn check_g2_subgroup(p: &blst_p2_affine) -> Result<(), PrecompileError> {
    // SAFETY: p is a blst value.
    if is_g2_infinity(p) || unsafe { blst_p2_affine_in_g2(p) } {
        Ok(())
    } else {
        Err(PrecompileError::G2PointSubgroupError)
    }
}

/// Reads a 32 byte big-endian scalar.
///
/// The scalar is not required to be smaller than the group order, so `blst_scalar_fr_check`
/// is not applied.
pub(super) fn read_scalar(input: &[u8]) -> Result<blst_scalar, PrecompileError> {
    if input.len() != SCALAR_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let mut out = blst_scalar::default();
    // SAFETY: input length is checked previously, out is a blst value.
    unsafe { blst_scalar_from_bendian(&mut out, input.as_ptr()) };
    Ok(out)
}

/// Adds two G1 points in affine form, returning the result in affine form.
///
/// `a` and `b` may be equal, in which case the point is doubled.
pub(super) fn p1_add_affine(a: &blst_p1_affine, b: &blst_p1_affine) -> blst_p1_affine {
    let a_jacobian = p1_from_affine(a);
    let mut sum = blst_p1::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p1_add_or_double_affine(&mut sum, &a_jacobian, b) };
    p1_to_affine(&sum)
}

/// Adds two G2 points in affine form, returning the result in affine form.
pub(super) fn p2_add_affine(a: &blst_p2_affine, b: &blst_p2_affine) -> blst_p2_affine {
    let a_jacobian = p2_from_affine(a);
    let mut sum = blst_p2::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p2_add_or_double_affine(&mut sum, &a_jacobian, b) };
    p2_to_affine(&sum)
}

/// Half of the scalar width. `blst_p*_mult` only switches to the GLV/GLS endomorphism for
/// scalars wider than 175 bits, so multiplying by halves stays on the plain windowed ladder.
const HALF_NBITS: usize = NBITS / 2;

/// Multiplies a G1 point by a scalar.
///
/// Points outside the prime order subgroup are valid inputs, for them the endomorphism
/// accelerated multiplication of blst gives wrong results.
pub(super) fn p1_mul(p: &blst_p1_affine, scalar: &blst_scalar) -> blst_p1_affine {
    let p = p1_from_affine(p);
    let mut out = blst_p1::default();
    // SAFETY: scalar bytes are little-endian and NBITS long, all inputs are blst values.
    unsafe {
        if blst_p1_in_g1(&p) {
            blst_p1_mult(&mut out, &p, scalar.b.as_ptr(), NBITS);
        } else {
            let (lo, hi) = scalar.b.split_at(HALF_NBITS / 8);
            let mut lo_p = blst_p1::default();
            blst_p1_mult(&mut lo_p, &p, lo.as_ptr(), HALF_NBITS);

            let mut shifted = p;
            let shifted_ptr: *mut blst_p1 = &mut shifted;
            for _ in 0..HALF_NBITS {
                blst_p1_double(shifted_ptr, shifted_ptr);
            }
            let mut hi_p = blst_p1::default();
            blst_p1_mult(&mut hi_p, &shifted, hi.as_ptr(), HALF_NBITS);

            blst_p1_add_or_double(&mut out, &lo_p, &hi_p);
        }
    }
    p1_to_affine(&out)
}

/// Multiplies a G2 point by a scalar. See [`p1_mul`] for points outside the subgroup.
pub(super) fn p2_mul(p: &blst_p2_affine, scalar: &blst_scalar) -> blst_p2_affine {
    let p = p2_from_affine(p);
    let mut out = blst_p2::default();
    // SAFETY: scalar bytes are little-endian and NBITS long, all inputs are blst values.
    unsafe {
        if blst_p2_in_g2(&p) {
            blst_p2_mult(&mut out, &p, scalar.b.as_ptr(), NBITS);
        } else {
            let (lo, hi) = scalar.b.split_at(HALF_NBITS / 8);
            let mut lo_p = blst_p2::default();
            blst_p2_mult(&mut lo_p, &p, lo.as_ptr(), HALF_NBITS);

            let mut shifted = p;
            let shifted_ptr: *mut blst_p2 = &mut shifted;
            for _ in 0..HALF_NBITS {
                blst_p2_double(shifted_ptr, shifted_ptr);
            }
            let mut hi_p = blst_p2::default();
            blst_p2_mult(&mut hi_p, &shifted, hi.as_ptr(), HALF_NBITS);

            blst_p2_add_or_double(&mut out, &lo_p, &hi_p);
        }
    }
    p2_to_affine(&out)
}

/// Performs multi-scalar multiplication (MSM) for G1 points.
///
/// Infinity points and zero scalars must already be filtered out by the caller, blst's
/// Pippenger implementation does not expect them. An empty input yields infinity.
pub(super) fn p1_msm(g1_points: Vec<blst_p1_affine>, scalars: Vec<blst_scalar>) -> blst_p1_affine {
    debug_assert_eq!(g1_points.len(), scalars.len());
    match g1_points.len() {
        0 => blst_p1_affine::default(),
        1 => p1_mul(&g1_points[0], &scalars[0]),
        _ => {
            let scalars_bytes: Vec<u8> = scalars.iter().flat_map(|s| s.b).collect();
            let multiexp = g1_points.mult(&scalars_bytes, NBITS);
            p1_to_affine(&multiexp)
        }
    }
}

/// Performs multi-scalar multiplication (MSM) for G2 points.
pub(super) fn p2_msm(g2_points: Vec<blst_p2_affine>, scalars: Vec<blst_scalar>) -> blst_p2_affine {
    debug_assert_eq!(g2_points.len(), scalars.len());
    match g2_points.len() {
        0 => blst_p2_affine::default(),
        1 => p2_mul(&g2_points[0], &scalars[0]),
        _ => {
            let scalars_bytes: Vec<u8> = scalars.iter().flat_map(|s| s.b).collect();
            let multiexp = g2_points.mult(&scalars_bytes, NBITS);
            p2_to_affine(&multiexp)
        }
    }
}

/// Maps a base field element to a G1 point with the simplified SWU map, clearing the
/// cofactor.
pub(super) fn map_fp_to_g1(fp: &blst_fp) -> blst_p1_affine {
    let mut p = blst_p1::default();
    // SAFETY: `p` and `fp` are blst values
    // Third argument is unused if null
    unsafe { blst_map_to_g1(&mut p, fp, core::ptr::null()) };
    p1_to_affine(&p)
}

/// Maps an fp2 element to a G2 point with the simplified SWU map, clearing the cofactor.
pub(super) fn map_fp2_to_g2(fp2: &blst_fp2) -> blst_p2_affine {
    let mut p = blst_p2::default();
    // SAFETY: `p` and `fp2` are blst values
    // Third argument is unused if null
    unsafe { blst_map_to_g2(&mut p, fp2, core::ptr::null()) };
    p2_to_affine(&p)
}

/// Computes a single miller loop for a given G1, G2 pair
fn compute_miller_loop(g1: &blst_p1_affine, g2: &blst_p2_affine) -> blst_fp12 {
    let mut result = blst_fp12::default();
    // SAFETY: All arguments are valid blst types
    unsafe { blst_miller_loop(&mut result, g2, g1) }
    result
}

/// Performs a pairing check on a list of G1 and G2 point pairs and returns true if the
/// product of the pairings is the identity element.
///
/// Pairs with an infinity operand contribute the identity and are skipped.
pub(super) fn pairing_check(pairs: &[(blst_p1_affine, blst_p2_affine)]) -> bool {
    let mut acc: Option<blst_fp12> = None;
    for (g1, g2) in pairs {
        if is_g1_infinity(g1) || is_g2_infinity(g2) {
            continue;
        }
        let ml = compute_miller_loop(g1, g2);
        acc = Some(match acc {
            None => ml,
            Some(prev) => {
                let mut product = blst_fp12::default();
                // SAFETY: All arguments are valid blst types
                unsafe { blst_fp12_mul(&mut product, &prev, &ml) };
                product
            }
        });
    }

    let Some(acc) = acc else {
        return true;
    };

    let mut result = blst_fp12::default();
    // SAFETY: All arguments are valid blst types
    unsafe {
        blst_final_exp(&mut result, &acc);
        blst_fp12_is_one(&result)
    }
}

/// Encodes a single finite field element into a 48 byte big-endian slice.
fn fp_to_bytes(out: &mut [u8], input: &blst_fp) {
    debug_assert_eq!(out.len(), FP_LENGTH);
    // SAFETY: out is FP_LENGTH bytes long, input is a blst value.
    unsafe { blst_bendian_from_fp(out.as_mut_ptr(), input) };
}

/// Encodes a G1 point into its unpadded form `x || y`. Infinity encodes as zeros.
pub(super) fn encode_g1_point(input: &blst_p1_affine) -> [u8; G1_LENGTH] {
    let mut out = [0u8; G1_LENGTH];
    let (x, y) = out.split_at_mut(FP_LENGTH);
    fp_to_bytes(x, &input.x);
    fp_to_bytes(y, &input.y);
    out
}

/// Encodes a G2 point into its unpadded form `x.c0 || x.c1 || y.c0 || y.c1`.
pub(super) fn encode_g2_point(input: &blst_p2_affine) -> [u8; G2_LENGTH] {
    let mut out = [0u8; G2_LENGTH];
    let coords = [&input.x.fp[0], &input.x.fp[1], &input.y.fp[0], &input.y.fp[1]];
    for (chunk, fp) in out.chunks_exact_mut(FP_LENGTH).zip(coords) {
        fp_to_bytes(chunk, fp);
    }
    out
}
