//! Pure Rust curve operations on top of the arkworks BLS12-381 implementation.
use super::utils::check_canonical_fp;
use crate::bls12_381_const::{FP_LENGTH, G1_LENGTH, G2_LENGTH, SCALAR_LENGTH};
use crate::PrecompileError;
use ark_bls12_381::{
    g1, g2, Bls12_381, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective,
};
use ark_ec::{
    hashing::{curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurve},
    pairing::Pairing,
    short_weierstrass::{Affine, Projective, SWCurveConfig},
    AffineRepr, CurveGroup, VariableBaseMSM,
};
use ark_ff::{BigInt, BigInteger, BitIteratorBE, One, PrimeField, Zero};
use std::vec::Vec;

/// Scalars are read as raw 256 bit integers, they are not reduced modulo the group order.
type Scalar = BigInt<4>;

/// Decodes a base field element from its unpadded big-endian encoding.
#[inline]
pub(super) fn read_fp(input: &[u8; FP_LENGTH]) -> Result<Fq, PrecompileError> {
    check_canonical_fp(input)?;
    // The range check above makes the reduction a no-op.
    Ok(Fq::from_be_bytes_mod_order(input))
}

/// Decodes an fp2 element from its `c0` and `c1` coefficients.
#[inline]
pub(super) fn read_fp2(
    c0: &[u8; FP_LENGTH],
    c1: &[u8; FP_LENGTH],
) -> Result<Fq2, PrecompileError> {
    Ok(Fq2::new(read_fp(c0)?, read_fp(c1)?))
}

/// Decodes a G1 point from its unpadded affine coordinates.
///
/// `(0, 0)` is the point at infinity. `G1Affine` cannot represent it through its
/// coordinates, so it is mapped explicitly.
pub(super) fn read_g1(
    x: &[u8; FP_LENGTH],
    y: &[u8; FP_LENGTH],
) -> Result<G1Affine, PrecompileError> {
    let x = read_fp(x)?;
    let y = read_fp(y)?;
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::zero());
    }
    // `G1Affine::new` would panic on points that are not on the curve.
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
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
) -> Result<G2Affine, PrecompileError> {
    let x = read_fp2(x0, x1)?;
    let y = read_fp2(y0, y1)?;
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::zero());
    }
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(PrecompileError::G2PointNotOnCurve);
    }
    Ok(point)
}

/// Checks that an on-curve G1 point lies in the prime order subgroup.
pub(super) fn check_g1_subgroup(p: &G1Affine) -> Result<(), PrecompileError> {
    if p.is_zero() || p.is_in_correct_subgroup_assuming_on_curve() {
        Ok(())
    } else {
        Err(PrecompileError::G1PointSubgroupError)
    }
}

/// Checks that an on-curve G2 point lies in the prime order subgroup.
pub(super) fn check_g2_subgroup(p: &G2Affine) -> Result<(), PrecompileError> {
    if p.is_zero() || p.is_in_correct_subgroup_assuming_on_curve() {
        Ok(())
    } else {
        Err(PrecompileError::G2PointSubgroupError)
    }
}

/// Reads a 32 byte big-endian scalar into little-endian limbs.
pub(super) fn read_scalar(input: &[u8]) -> Result<Scalar, PrecompileError> {
    if input.len() != SCALAR_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let mut limbs = [0u64; 4];
    for (i, chunk) in input.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        limbs[3 - i] = u64::from_be_bytes(word);
    }
    Ok(BigInt::new(limbs))
}

/// Adds two G1 points.
#[inline]
pub(super) fn p1_add_affine(a: &G1Affine, b: &G1Affine) -> G1Affine {
    (a.into_group() + b).into_affine()
}

/// Adds two G2 points.
#[inline]
pub(super) fn p2_add_affine(a: &G2Affine, b: &G2Affine) -> G2Affine {
    (a.into_group() + b).into_affine()
}

/// Plain double-and-add over the full scalar.
///
/// The curve configs multiply with GLV, which reduces the scalar modulo the group order and is
/// therefore only correct for points inside the prime order subgroup.
fn double_and_add<P: SWCurveConfig>(base: &Affine<P>, scalar: &Scalar) -> Projective<P> {
    let mut acc = Projective::<P>::zero();
    for bit in BitIteratorBE::without_leading_zeros(scalar) {
        acc = acc + acc;
        if bit {
            acc += base;
        }
    }
    acc
}

/// Reduces a scalar modulo the group order. Only valid for points inside the subgroup.
fn reduce(scalar: &Scalar) -> Scalar {
    Fr::from_le_bytes_mod_order(&scalar.to_bytes_le()).into_bigint()
}

/// Multiplies a G1 point by a scalar.
pub(super) fn p1_mul(p: &G1Affine, scalar: &Scalar) -> G1Affine {
    if p.is_in_correct_subgroup_assuming_on_curve() {
        p.mul_bigint(reduce(scalar)).into_affine()
    } else {
        double_and_add(p, scalar).into_affine()
    }
}

/// Multiplies a G2 point by a scalar.
pub(super) fn p2_mul(p: &G2Affine, scalar: &Scalar) -> G2Affine {
    if p.is_in_correct_subgroup_assuming_on_curve() {
        p.mul_bigint(reduce(scalar)).into_affine()
    } else {
        double_and_add(p, scalar).into_affine()
    }
}

/// Performs multi-scalar multiplication (MSM) for G1 points. An empty input yields infinity.
///
/// The bucket method only looks at the bits below the modulus size, so scalars are reduced
/// first. With a point outside the subgroup that is not possible and the products are summed
/// one by one.
pub(super) fn p1_msm(g1_points: Vec<G1Affine>, scalars: Vec<Scalar>) -> G1Affine {
    debug_assert_eq!(g1_points.len(), scalars.len());
    if g1_points
        .iter()
        .all(|p| p.is_in_correct_subgroup_assuming_on_curve())
    {
        let scalars: Vec<Scalar> = scalars.iter().map(reduce).collect();
        G1Projective::msm_bigint(&g1_points, &scalars).into_affine()
    } else {
        g1_points
            .iter()
            .zip(&scalars)
            .map(|(p, s)| double_and_add(p, s))
            .sum::<G1Projective>()
            .into_affine()
    }
}

/// Performs multi-scalar multiplication (MSM) for G2 points. See [`p1_msm`].
pub(super) fn p2_msm(g2_points: Vec<G2Affine>, scalars: Vec<Scalar>) -> G2Affine {
    debug_assert_eq!(g2_points.len(), scalars.len());
    if g2_points
        .iter()
        .all(|p| p.is_in_correct_subgroup_assuming_on_curve())
    {
        let scalars: Vec<Scalar> = scalars.iter().map(reduce).collect();
        G2Projective::msm_bigint(&g2_points, &scalars).into_affine()
    } else {
        g2_points
            .iter()
            .zip(&scalars)
            .map(|(p, s)| double_and_add(p, s))
            .sum::<G2Projective>()
            .into_affine()
    }
}

/// Maps a base field element to a G1 point with the simplified SWU map and the 11-isogeny,
/// clearing the cofactor.
pub(super) fn map_fp_to_g1(fp: &Fq) -> G1Affine {
    WBMap::<g1::Config>::map_to_curve(*fp)
        .expect("SWU map is defined for every field element")
        .clear_cofactor()
}

/// Maps an fp2 element to a G2 point with the simplified SWU map and the 3-isogeny,
/// clearing the cofactor.
pub(super) fn map_fp2_to_g2(fp2: &Fq2) -> G2Affine {
    WBMap::<g2::Config>::map_to_curve(*fp2)
        .expect("SWU map is defined for every field element")
        .clear_cofactor()
}

/// Performs a pairing check on a list of G1 and G2 point pairs and returns true if the
/// product of the pairings is the identity element.
///
/// Pairs with an infinity operand contribute the identity and are skipped.
pub(super) fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    let (g1_points, g2_points): (Vec<G1Affine>, Vec<G2Affine>) = pairs
        .iter()
        .filter(|(g1, g2)| !g1.is_zero() && !g2.is_zero())
        .copied()
        .unzip();
    if g1_points.is_empty() {
        return true;
    }
    Bls12_381::multi_pairing(g1_points, g2_points).0.is_one()
}

/// Encodes a single finite field element as 48 big-endian bytes.
#[inline]
fn fp_to_bytes(out: &mut [u8], fp: &Fq) {
    out.copy_from_slice(&fp.into_bigint().to_bytes_be());
}

/// Encodes a G1 point into its unpadded form `x || y`. Infinity encodes as zeros.
pub(super) fn encode_g1_point(input: &G1Affine) -> [u8; G1_LENGTH] {
    let mut out = [0u8; G1_LENGTH];
    let Some((x, y)) = input.xy() else {
        return out;
    };
    let (out_x, out_y) = out.split_at_mut(FP_LENGTH);
    fp_to_bytes(out_x, &x);
    fp_to_bytes(out_y, &y);
    out
}

/// Encodes a G2 point into its unpadded form `x.c0 || x.c1 || y.c0 || y.c1`.
pub(super) fn encode_g2_point(input: &G2Affine) -> [u8; G2_LENGTH] {
    let mut out = [0u8; G2_LENGTH];
    let Some((x, y)) = input.xy() else {
        return out;
    };
    for (chunk, fp) in out
        .chunks_exact_mut(FP_LENGTH)
        .zip([&x.c0, &x.c1, &y.c0, &y.c1])
    {
        fp_to_bytes(chunk, fp);
    }
    out
}
