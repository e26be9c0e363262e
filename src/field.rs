//! Field contexts for the supported widths.
//!
//! This module names one [`FieldContext`] instantiation per supported
//! modulus width, from 1 to 24 limbs of 64 bits. These are merely
//! aliases: any `FieldContext<L>` works the same way, and instantiating
//! one at a new width specializes the multiplication kernel for that
//! width. The aliases exist so that the layer selecting a kernel for a
//! given modulus size has the full table in one place.

pub use crate::backend::FieldContext;

/// 64-bit fields (1 limb).
pub type FieldContext64 = FieldContext<1>;
/// 128-bit fields (2 limbs).
pub type FieldContext128 = FieldContext<2>;
/// 192-bit fields (3 limbs).
pub type FieldContext192 = FieldContext<3>;
/// 256-bit fields (4 limbs).
pub type FieldContext256 = FieldContext<4>;
/// 320-bit fields (5 limbs).
pub type FieldContext320 = FieldContext<5>;
/// 384-bit fields (6 limbs).
pub type FieldContext384 = FieldContext<6>;
/// 448-bit fields (7 limbs).
pub type FieldContext448 = FieldContext<7>;
/// 512-bit fields (8 limbs).
pub type FieldContext512 = FieldContext<8>;
/// 576-bit fields (9 limbs).
pub type FieldContext576 = FieldContext<9>;
/// 640-bit fields (10 limbs).
pub type FieldContext640 = FieldContext<10>;
/// 704-bit fields (11 limbs).
pub type FieldContext704 = FieldContext<11>;
/// 768-bit fields (12 limbs).
pub type FieldContext768 = FieldContext<12>;
/// 832-bit fields (13 limbs).
pub type FieldContext832 = FieldContext<13>;
/// 896-bit fields (14 limbs).
pub type FieldContext896 = FieldContext<14>;
/// 960-bit fields (15 limbs).
pub type FieldContext960 = FieldContext<15>;
/// 1024-bit fields (16 limbs).
pub type FieldContext1024 = FieldContext<16>;
/// 1088-bit fields (17 limbs).
pub type FieldContext1088 = FieldContext<17>;
/// 1152-bit fields (18 limbs).
pub type FieldContext1152 = FieldContext<18>;
/// 1216-bit fields (19 limbs).
pub type FieldContext1216 = FieldContext<19>;
/// 1280-bit fields (20 limbs).
pub type FieldContext1280 = FieldContext<20>;
/// 1344-bit fields (21 limbs).
pub type FieldContext1344 = FieldContext<21>;
/// 1408-bit fields (22 limbs).
pub type FieldContext1408 = FieldContext<22>;
/// 1472-bit fields (23 limbs).
pub type FieldContext1472 = FieldContext<23>;
/// 1536-bit fields (24 limbs).
pub type FieldContext1536 = FieldContext<24>;
