//! Gfmont is the Montgomery multiplication core of a multi-precision
//! finite-field arithmetic library.
//!
//! This library implements modular multiplication in Montgomery
//! representation for moduli of 1 to 24 limbs of 64 bits (64 to 1536
//! bits). It is meant as the innermost layer of elliptic-curve and
//! pairing implementations: every higher field operation (squaring,
//! exponentiation, inversion) reduces to repeated invocation of the
//! multiply-and-reduce kernel provided here. The kernel itself uses the
//! CIOS (Coarsely Integrated Operand Scanning) algorithm, generalized
//! over the limb count through const generics; instantiating it at a
//! given width yields the same fully unrolled code that hand-written
//! per-width functions would provide.
//!
//! Field parameters are gathered in a [`FieldContext`], which is built
//! once from the modulus limbs and thereafter immutable: it derives the
//! one-word Montgomery constant n0' = -m^-1 mod 2^64, along with R mod m
//! and R^2 mod m (R = 2^(64*L) for an L-limb modulus). A context can be
//! shared freely between threads; every multiplication is a pure
//! function of its inputs and the context, with stack-local scratch
//! only and no allocation.
//!
//! An arbitrary-precision fallback multiplier ([`fallback::BigFieldContext`],
//! available with the `alloc` feature) implements the same contract with
//! the classical SOS (Separated Operand Scanning) algorithm over
//! `num-bigint` integers. It serves widths for which no specialized
//! kernel has been instantiated, and doubles as an independent
//! correctness oracle for the CIOS kernel.
//!
//! # Usage
//!
//! The library is "mostly `no_std`". By default, it compiles against the
//! standard library. It can be compiled in `no_std` mode, in which case
//! all functionality is still available, except the arbitrary-precision
//! fallback multiplier (which needs the `alloc` feature).
//!
//! # Conventions
//!
//! Operands and results are canonical residues: integers strictly lower
//! than the modulus, in little-endian order over 64-bit limbs. All
//! multiplication entry points validate their operands before any
//! arithmetic work and fail with [`FieldError::InvalidOperand`] on a
//! non-canonical input; on success the result is itself canonical. There
//! are no partial writes: a failed call leaves no output.
//!
//! This crate does not claim constant-time execution beyond what the
//! reference algorithm provides. The kernel's arithmetic is branchless
//! in the usual way (masked conditional subtraction), but operand
//! validation takes an early exit and the fallback multiplier uses a
//! general-purpose bignum implementation.

#![no_std]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

macro_rules! static_assert {
    ($condition:expr) => {
        let _ = &[()][1 - ($condition) as usize];
    }
}

pub mod backend;
pub mod field;

#[cfg(feature = "alloc")]
pub mod fallback;

pub use backend::{FieldContext, limbs_from_le_bytes, limbs_to_le_bytes};

/// Error type for field operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// An operand was not a canonical residue (not strictly lower than
    /// the field modulus), or did not have the context's limb count.
    InvalidOperand,

    /// A modulus was rejected at context creation: it must be odd, with
    /// a nonzero top limb.
    InvalidModulus,
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FieldError::InvalidOperand =>
                f.write_str("operand not reduced modulo field"),
            FieldError::InvalidModulus =>
                f.write_str("invalid field modulus"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
