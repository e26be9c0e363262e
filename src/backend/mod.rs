//! Limb-level implementation of the Montgomery multiplication core.
//!
//! The data model fixes limbs at 64 bits: a multi-precision integer is
//! an array of `u64` words in little-endian order, and the Montgomery
//! radix for an L-limb modulus is R = 2^(64*L). All limb arithmetic
//! therefore lives in the `w64` module; there is no 32-bit backend, and
//! the code is portable to 32-bit targets (the widening primitives fall
//! back to `u128` arithmetic where no dedicated intrinsic exists).
//!
//! In general, the following properties apply to the types defined here:
//!
//!  - A [`FieldContext`] instance encapsulates the read-only parameters
//!    of one field: the modulus limbs, the one-word Montgomery constant
//!    n0', and the precomputed residues R mod m and R^2 mod m. It is
//!    created once per field and never mutated afterwards.
//!
//!  - Operands and results of the multiplication kernel are `[u64; L]`
//!    arrays holding canonical residues (values strictly lower than the
//!    modulus). Non-canonical operands are rejected before any
//!    multiply-accumulate work is done.
//!
//!  - When field elements cross a byte boundary, limb `i` occupies bytes
//!    `8*i` to `8*i + 7` in little-endian order; the conversion helpers
//!    [`limbs_from_le_bytes`] and [`limbs_to_le_bytes`] implement that
//!    layout and validate the buffer length (which must be exactly
//!    `8*L` bytes).

pub mod w64;

pub use w64::mont::{FieldContext, limbs_from_le_bytes, limbs_to_le_bytes};
