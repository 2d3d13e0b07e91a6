//! Known curve points and a boundary-value generator for the precompile tests.
use super::utils::{pad_g1_point, pad_g2_point};
use crate::bls12_381_const::{
    FP_LENGTH, FP_PAD_BY, G1_LENGTH, G2_LENGTH, MODULUS_REPR, PADDED_FP_LENGTH, SCALAR_LENGTH,
};
use primitives::hex;
use std::vec::Vec;

/// Generator of G1.
pub(super) const G1_GENERATOR: [u8; G1_LENGTH] = hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1");

/// `2 * G1_GENERATOR`.
pub(super) const G1_GENERATOR_DOUBLE: [u8; G1_LENGTH] = hex!("0572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28");

/// Point on the G1 curve with `x = 4` that is not in the prime order subgroup.
pub(super) const G1_NOT_IN_SUBGROUP: [u8; G1_LENGTH] = hex!("0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000040a989badd40d6212b33cffc3f3763e9bc760f988c9926b26da9dd85e928483446346b8ed00e1de5d5ea93e354abe706c");

/// Generator of G2.
pub(super) const G2_GENERATOR: [u8; G2_LENGTH] = hex!("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb813e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b828010606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be");

/// `2 * G2_GENERATOR`.
pub(super) const G2_GENERATOR_DOUBLE: [u8; G2_LENGTH] = hex!("1638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a0530a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c335770468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c98990f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf3");

/// Point on the G2 curve with `x = 2 + 0u` that is not in the prime order subgroup.
pub(super) const G2_NOT_IN_SUBGROUP: [u8; G2_LENGTH] = hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000013a59858b6809fca4d9a3b6539246a70051a3c88899964a42bc9a69cf9acdd9dd387cfa9086b894185b9a46a402be7302d27e0ec3356299a346a09ad7dc4ef68a483c3aed53f9139d2f929a3eecebf72082e5e58c6da24ee32e03040c406d4f");

/// `-G1_GENERATOR`.
pub(super) const G1_GENERATOR_NEG: [u8; G1_LENGTH] = hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb114d1d6855d545a8aa7d76c8cf2e21f267816aef1db507c96655b9d5caac42364e6f38ba0ecb751bad54dcd6b939c2ca");

/// `3 * G1_GENERATOR`.
pub(super) const G1_GENERATOR_TIMES_3: [u8; G1_LENGTH] = hex!("09ece308f9d1f0131765212deca99697b112d61f9be9a5f1f3780a51335b3ff981747a0b2ca2179b96d2c0c9024e5224032b80d3a6f5b09f8a84623389c5f80ca69a0cddabc3097f9d9c27310fd43be6e745256c634af45ca3473b0590ae30d1");

/// `6 * G1_GENERATOR`.
pub(super) const G1_GENERATOR_TIMES_6: [u8; G1_LENGTH] = hex!("06e82f6da4520f85c5d27d8f329eccfa05944fd1096b20734c894966d12a9e2a9a9744529d7212d33883113a0cadb90917d81038f7d60bee9110d9c0d6d1102fe2d998c957f28e31ec284cc04134df8e47e8f82ff3af2e60a6d9688a4563477c");

/// `2 * G1_NOT_IN_SUBGROUP`.
pub(super) const G1_NOT_IN_SUBGROUP_DOUBLE: [u8; G1_LENGTH] = hex!("061e5e9176f0eaf720bb36853d02bf41bd493ef21b2e5ec39fcf409e5829a353cafb4b4afc8c3c3c2bc387878787737403dce838b58d784d9e663fdf809f630c630692751c8af8af9b42d50ff90694b2e211bc0c19a333160a1ee6891b38838e");

/// `-G2_GENERATOR`.
pub(super) const G2_GENERATOR_NEG: [u8; G2_LENGTH] = hex!("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb813e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e0d1b3cc2c7027888be51d9ef691d77bcb679afda66c73f17f9ee3837a55024f78c71363275a75d75d86bab79f74782aa13fa4d4a0ad8b1ce186ed5061789213d993923066dddaf1040bc3ff59f825c78df74f2d75467e25e0f55f8a00fa030ed");

/// `3 * G2_GENERATOR`.
pub(super) const G2_GENERATOR_TIMES_3: [u8; G2_LENGTH] = hex!("122915c824a0857e2ee414a3dccb23ae691ae54329781315a0c75df1c04d6d7a50a030fc866f09d516020ef82324afae09380275bbc8e5dcea7dc4dd7e0550ff2ac480905396eda55062650f8d251c96eb480673937cc6d9d6a44aaa56ca66dc0b21da7955969e61010c7a1abc1a6f0136961d1e3b20b1a7326ac738fef5c721479dfd948b52fdf2455e44813ecfd89208f239ba329b3967fe48d718a36cfe5f62a7e42e0bf1c1ed714150a166bfbd6bcf6b3b58b975b9edea56d53f23a0e849");

/// `2 * G2_NOT_IN_SUBGROUP`.
pub(super) const G2_NOT_IN_SUBGROUP_DOUBLE: [u8; G2_LENGTH] = hex!("17675cec66f31c57a9ff4a24095db52840d1c3f7a7f7c412a9abf0c41138dd86e86799986c653332f4324ccccccc7fff1233f2f0c1d987d267c68eff9581c5c9f986b4dd10dd26b92ea22d0a4648ac4c7bdecccbe28799996898e66666662aaa035b0eb3724bb32e1cf10fd99f37e3bf31d8559a665e47343bb0cf3f406ba0c6f7cda4bcb11598161820af48524f265118434e013aaad9566ec74d267b6b5802a7fddd6c8de95fc5991098b930121d983c36315d082c72bcf19888770831a5d5");

/// `CURVE_ORDER * G1_NOT_IN_SUBGROUP`, not the point at infinity.
pub(super) const G1_NOT_IN_SUBGROUP_TIMES_ORDER: [u8; G1_LENGTH] = hex!("0ccd40884cb1834492efbd0149a414535890f30477f9535103082ff438ca13d7f7e36e2f1d15dd8ca30397f12170831a157112d2c2dfffc1f042dd01e9cc104f0609ada5f5fb621f5eb44c9b1b3174267681bbdea41aacc3af76740445774b94");

/// `CURVE_ORDER * G2_NOT_IN_SUBGROUP`.
pub(super) const G2_NOT_IN_SUBGROUP_TIMES_ORDER: [u8; G2_LENGTH] = hex!("0d3925372c636a26a79c89a525225cfbb6c94743eff9bf0898698c82a693c42590ce206cdc937dec55e0cd57aade36020e35f87bd26f0218f1928af3bf7c223b73482e509ae40ca19d3128233c763810135c6cde0296930a95ad34a74ce3b6be1271b4815df332be41bdc06793e3a6d5684ff41f584f7f2a382c5080b2ee410ac49eeecfed2dd94131eb235523f80cc7066132d2968c2d3868d3eebf3d93e6269478c0b2b4c42ca578aff4091c5d0d43ab0e14310cbf0d545d19915b4c743014");

/// `(2^256 - 1) * G1_GENERATOR`.
pub(super) const G1_GENERATOR_TIMES_MAX: [u8; G1_LENGTH] = hex!("16ea601ca88f7d3489479129b258960b4c1df37194d30803627c30c34252679a0ada1a51bc7a4006a4f0564050d31746039e394a6f95c4a2f27bf38f950b2af8d2aa8e0c4a1ffbe9ca518d1bedb573e310fba8f436aec3a3c8f2655fad5e2013");

/// `(2^256 - 1) * G2_GENERATOR`.
pub(super) const G2_GENERATOR_TIMES_MAX: [u8; G2_LENGTH] = hex!("1894914549a2c52cf2780a07ca06db9147bf7b6a8ca3bc54915a6b3173986be41448500d2f103b6b51c59d71cb8ffcff103fce7f3245b093eb614cb59dadb177f3462b162204f785dda90bdc1b5a34bf93ad1b41289bea4a9a944887974cfda20a37200b9f3309d4c123ef920f20424e10d075f130057e3d4e7390b4eaca02d59e46171ef74907370b6277418252ff88170fc445500aeebc2a728d9c10a760f94e4076091493430284434c67e1bd5561516c1ad102430cd7c115fe7903e95e96");

/// `(2^256 - 1) * G1_NOT_IN_SUBGROUP`.
pub(super) const G1_NOT_IN_SUBGROUP_TIMES_MAX: [u8; G1_LENGTH] = hex!("01162780d4319fed67dae9736ea0f74e6d52e9dc3bf87ded524954c911e9b5a16a1eb8e74c85fe01f2227b653813cb650c82de2e1459ae1f4fa0485464f07a8119bd12559aff18e8aac5c55f736117595ac03b7bb987ca83bed5440cfff386f9");

/// Order of the prime order subgroups, big-endian.
pub(super) const CURVE_ORDER: [u8; SCALAR_LENGTH] =
    hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

/// Largest encodable scalar.
pub(super) const MAX_SCALAR: [u8; SCALAR_LENGTH] = [0xff; SCALAR_LENGTH];

/// Padded encoding of a G1 point.
pub(super) fn g1(point: &[u8; G1_LENGTH]) -> Vec<u8> {
    pad_g1_point(point).to_vec()
}

/// Padded encoding of a G2 point.
pub(super) fn g2(point: &[u8; G2_LENGTH]) -> Vec<u8> {
    pad_g2_point(point).to_vec()
}

/// Big-endian scalar encoding of a small integer.
pub(super) fn scalar(value: u64) -> [u8; SCALAR_LENGTH] {
    let mut out = [0u8; SCALAR_LENGTH];
    out[SCALAR_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Single violation injected into an otherwise valid input.
///
/// Offsets point at the first byte of a padded field element, or of a padded point for the
/// subgroup variants.
#[derive(Clone, Copy, Debug)]
pub(super) enum Mutation {
    /// Drops the last byte.
    Truncate,
    /// Appends a zero byte.
    Extend,
    /// Sets a padding byte of the field element.
    TopBytes(usize),
    /// Replaces the field element with the field modulus.
    OutOfRange(usize),
    /// Flips the lowest bit of the field element, moving the point off the curve.
    OffCurve(usize),
    /// Overwrites a G1 point with one outside the prime order subgroup.
    G1OffSubgroup(usize),
    /// Overwrites a G2 point with one outside the prime order subgroup.
    G2OffSubgroup(usize),
}

impl Mutation {
    /// Applies the mutation to a copy of `valid`.
    pub(super) fn apply(self, valid: &[u8]) -> Vec<u8> {
        let mut out = valid.to_vec();
        match self {
            Self::Truncate => {
                out.pop();
            }
            Self::Extend => out.push(0),
            Self::TopBytes(offset) => out[offset + FP_PAD_BY / 2] = 0x01,
            Self::OutOfRange(offset) => {
                out[offset + FP_PAD_BY..offset + PADDED_FP_LENGTH].copy_from_slice(&MODULUS_REPR)
            }
            Self::OffCurve(offset) => out[offset + FP_PAD_BY + FP_LENGTH - 1] ^= 0x01,
            Self::G1OffSubgroup(offset) => {
                let point = g1(&G1_NOT_IN_SUBGROUP);
                out[offset..offset + point.len()].copy_from_slice(&point);
            }
            Self::G2OffSubgroup(offset) => {
                let point = g2(&G2_NOT_IN_SUBGROUP);
                out[offset..offset + point.len()].copy_from_slice(&point);
            }
        }
        out
    }
}
