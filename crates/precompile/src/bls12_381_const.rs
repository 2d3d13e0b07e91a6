//! Constants specifying the precompile addresses and the byte layout of the inputs
//! and outputs of the BLS12-381 precompiles.

/// BLS12_G1ADD precompile address.
pub const G1_ADD_ADDRESS: u64 = 0x0a;
/// BLS12_G1MUL precompile address.
pub const G1_MUL_ADDRESS: u64 = 0x0b;
/// BLS12_G1MULTIEXP precompile address.
pub const G1_MULTIEXP_ADDRESS: u64 = 0x0c;
/// BLS12_G2ADD precompile address.
pub const G2_ADD_ADDRESS: u64 = 0x0d;
/// BLS12_G2MUL precompile address.
pub const G2_MUL_ADDRESS: u64 = 0x0e;
/// BLS12_G2MULTIEXP precompile address.
pub const G2_MULTIEXP_ADDRESS: u64 = 0x0f;
/// BLS12_PAIRING precompile address.
pub const PAIRING_ADDRESS: u64 = 0x10;
/// BLS12_MAP_FP_TO_G1 precompile address.
pub const MAP_FP_TO_G1_ADDRESS: u64 = 0x11;
/// BLS12_MAP_FP2_TO_G2 precompile address.
pub const MAP_FP2_TO_G2_ADDRESS: u64 = 0x12;

/// G1 addition input: two padded G1 points.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// G1 multiplication input, also the length of one G1 multiexp record.
pub const G1_MUL_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;
/// G2 addition input: two padded G2 points.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// G2 multiplication input, also the length of one G2 multiexp record.
pub const G2_MUL_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;
/// Length of one (G1, G2) pairing record.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
/// Output length of the pairing check: a big-endian `uint256` 0 or 1.
pub const PAIRING_OUTPUT_LENGTH: usize = 32;

/// Number of bits used in the scalar multiplication.
pub const NBITS: usize = 256;
/// Finite field element input length.
pub const FP_LENGTH: usize = 48;
/// Finite field element padded input length.
pub const PADDED_FP_LENGTH: usize = 64;
/// Quadratic extension of finite field element input length.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Input elements padding length.
pub const FP_PAD_BY: usize = PADDED_FP_LENGTH - FP_LENGTH;
/// Unpadded G1 point length.
pub const G1_LENGTH: usize = 2 * FP_LENGTH;
/// Padded G1 point length, the width of a G1 point at the call boundary.
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;
/// Unpadded G2 point length.
pub const G2_LENGTH: usize = 4 * FP_LENGTH;
/// Padded G2 point length, the width of a G2 point at the call boundary.
pub const PADDED_G2_LENGTH: usize = 4 * PADDED_FP_LENGTH;
/// Scalar length.
pub const SCALAR_LENGTH: usize = 32;

/// Base field modulus, big-endian non-Montgomery form.
pub const MODULUS_REPR: [u8; FP_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];
