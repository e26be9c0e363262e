//! Arbitrary-precision fallback multiplier.
//!
//! This module implements the same multiplication contract as
//! [`FieldContext`](crate::FieldContext), with the classical SOS
//! (Separated Operand Scanning) algorithm over `num-bigint` integers:
//! the full double-width product is computed first, then reduced in one
//! Montgomery step. It has no width limit and no per-width
//! specialization, which makes it the kernel of last resort for limb
//! counts outside the specialized table, and an independent oracle for
//! cross-checking the CIOS kernel.
//!
//! A [`BigFieldContext`] holds the arbitrary-precision mirrors of the
//! field parameters: the modulus, the full-width Montgomery constant
//! -m^-1 mod R, and the R-1 mask used to reduce modulo R by masking
//! instead of dividing. All of them are derived once at creation and
//! immutable afterwards.

use num_bigint::BigUint;

use crate::{FieldError, Vec};

/// Arbitrary-precision mirror of the parameters of one finite field
/// with an odd modulus of `limbs` 64-bit limbs.
#[derive(Clone, Debug)]
pub struct BigFieldContext {
    limbs: usize,
    modulus: BigUint,
    mont_param: BigUint,
    mask: BigUint,
}

fn big_from_limbs(x: &[u64]) -> BigUint {
    let mut digits = Vec::with_capacity(2 * x.len());
    for w in x.iter() {
        digits.push(*w as u32);
        digits.push((*w >> 32) as u32);
    }
    BigUint::new(digits)
}

fn limbs_from_big(z: &BigUint, limbs: usize) -> Vec<u64> {
    let mut v = z.to_u64_digits();
    v.resize(limbs, 0);
    v
}

impl BigFieldContext {
    /// Create a field context from the modulus, provided as 64-bit
    /// limbs in little-endian order. The same rules apply as for
    /// [`FieldContext::new`](crate::FieldContext::new): the modulus
    /// must be odd, greater than 1, with a nonzero top limb.
    pub fn new(modulus: &[u64]) -> Result<Self, FieldError> {
        let limbs = modulus.len();
        if limbs == 0 || (modulus[0] & 1) == 0 || modulus[limbs - 1] == 0 {
            return Err(FieldError::InvalidModulus);
        }
        if limbs == 1 && modulus[0] == 1 {
            return Err(FieldError::InvalidModulus);
        }

        let zm = big_from_limbs(modulus);
        let bits = 64 * limbs;
        let mask = (BigUint::from(1u32) << bits) - 1u32;

        // 2-adic inverse of the modulus by Newton iteration: 1 is the
        // inverse modulo 2, and each step doubles the number of exact
        // low bits.
        let mut inv = BigUint::from(1u32);
        let mut k = 1usize;
        while k < bits {
            k *= 2;
            let zk = BigUint::from(1u32) << k;
            let t = (&zm * &inv) % &zk;
            inv = (&inv * ((&zk + 2u32) - &t)) % &zk;
        }
        let inv = inv & &mask;
        let mont_param = ((&mask + 1u32) - &inv) & &mask;
        debug_assert!(((&zm * &mont_param) & &mask) == mask);

        Ok(BigFieldContext {
            limbs,
            modulus: zm,
            mont_param,
            mask,
        })
    }

    /// Number of 64-bit limbs in a field element.
    #[inline(always)]
    pub fn limbs(&self) -> usize {
        self.limbs
    }

    /// The field modulus.
    #[inline(always)]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Montgomery multiplication: for canonical x and y (both strictly
    /// lower than the modulus, both of the context's limb count),
    /// compute x*y/R mod m, returned as little-endian limbs. Operands
    /// are validated first; a wrong-length or out-of-range operand
    /// fails with `InvalidOperand` and nothing is computed.
    pub fn mont_mul(&self, x: &[u64], y: &[u64])
        -> Result<Vec<u64>, FieldError>
    {
        if x.len() != self.limbs || y.len() != self.limbs {
            return Err(FieldError::InvalidOperand);
        }
        let zx = big_from_limbs(x);
        let zy = big_from_limbs(y);
        // canonicity is strict: a residue equal to the modulus is out
        // of range
        if zx >= self.modulus || zy >= self.modulus {
            return Err(FieldError::InvalidOperand);
        }

        let product = &zx * &zy;
        let g = ((&product & &self.mask) * &self.mont_param) & &self.mask;
        let mut reduced = (&product + &g * &self.modulus) >> (64 * self.limbs);
        if reduced >= self.modulus {
            reduced -= &self.modulus;
        }
        Ok(limbs_from_big(&reduced, self.limbs))
    }
}

// ========================================================================

#[cfg(test)]
mod tests {
    use super::BigFieldContext;
    use crate::FieldContext;
    use crate::FieldError;
    use crate::Vec;
    use num_bigint::BigUint;
    use sha2::{Sha512, Digest};

    fn mkrndv(vv: &mut [u8], bx: u64) {
        let mut sh = Sha512::new();
        let mut j = 0;
        while j < vv.len() {
            sh.update((bx + ((j as u64) << 40)).to_le_bytes());
            let d = sh.finalize_reset();
            let clen = core::cmp::min(64, vv.len() - j);
            vv[j..(j + clen)].copy_from_slice(&d[..clen]);
            j += 64;
        }
    }

    fn big_from_limbs(x: &[u64]) -> BigUint {
        super::big_from_limbs(x)
    }

    fn mkmod(limbs: usize, bx: u64) -> Vec<u64> {
        let mut v = vec![0u8; 8 * limbs];
        mkrndv(&mut v, bx);
        let mut m = super::limbs_from_big(&BigUint::from_bytes_le(&v), limbs);
        m[0] |= 1;
        m[limbs - 1] |= 1u64 << 63;
        m
    }

    fn mkcanon(zm: &BigUint, limbs: usize, bx: u64) -> Vec<u64> {
        let mut v = vec![0u8; 8 * limbs + 16];
        mkrndv(&mut v, bx);
        super::limbs_from_big(&(BigUint::from_bytes_le(&v) % zm), limbs)
    }

    fn check_sos(limbs: usize, bx: u64, iters: usize) {
        let m = mkmod(limbs, bx);
        let ctx = BigFieldContext::new(&m).unwrap();
        let zm = big_from_limbs(&m);
        let zr = (BigUint::from(1u32) << (64 * limbs)) % &zm;

        for i in 0..iters {
            let x = mkcanon(&zm, limbs, bx + 2 * (i as u64) + 1);
            let y = mkcanon(&zm, limbs, bx + 2 * (i as u64) + 2);
            let z = ctx.mont_mul(&x, &y).unwrap();
            let zz = big_from_limbs(&z);

            // range invariant, z*R = x*y mod m, commutativity
            assert!(zz < zm);
            assert_eq!((&zz * &zr) % &zm,
                (big_from_limbs(&x) * big_from_limbs(&y)) % &zm);
            assert_eq!(z, ctx.mont_mul(&y, &x).unwrap());
        }

        // boundary: both operands at the maximum canonical value
        let zb = &zm - 1u32;
        let b = super::limbs_from_big(&zb, limbs);
        let z = ctx.mont_mul(&b, &b).unwrap();
        let zz = big_from_limbs(&z);
        assert!(zz < zm);
        assert_eq!((&zz * &zr) % &zm, (&zb * &zb) % &zm);

        // rejection is strict: the modulus itself is out of range, in
        // either operand position, and so is any wrong operand length
        let x = mkcanon(&zm, limbs, bx + 0x20000);
        assert_eq!(ctx.mont_mul(&m, &x), Err(FieldError::InvalidOperand));
        assert_eq!(ctx.mont_mul(&x, &m), Err(FieldError::InvalidOperand));
        assert_eq!(ctx.mont_mul(&x[..limbs - 1], &x),
            Err(FieldError::InvalidOperand));
        let mut xl = x.clone();
        xl.push(0);
        assert_eq!(ctx.mont_mul(&x, &xl), Err(FieldError::InvalidOperand));
    }

    #[test]
    fn sos_mont_mul() {
        for (limbs, bx) in [(1usize, 300u64), (2, 301), (3, 302), (4, 303),
            (6, 304), (8, 305), (12, 306), (16, 307), (24, 308)]
        {
            check_sos(limbs, bx << 32, 300);
        }
        // widths beyond the specialized table
        check_sos(31, 309u64 << 32, 50);
    }

    #[test]
    fn sos_context_validation() {
        assert_eq!(BigFieldContext::new(&[]).unwrap_err(),
            FieldError::InvalidModulus);
        assert_eq!(BigFieldContext::new(&[6]).unwrap_err(),
            FieldError::InvalidModulus);
        assert_eq!(BigFieldContext::new(&[1]).unwrap_err(),
            FieldError::InvalidModulus);
        assert_eq!(BigFieldContext::new(&[5, 0]).unwrap_err(),
            FieldError::InvalidModulus);
        assert!(BigFieldContext::new(&[5, 1]).is_ok());
    }

    // The specialized kernel and the fallback implement the same
    // function; run them against each other, and against the direct
    // z*R = x*y identity, on every width of the specialized table.
    fn cross_check<const L: usize>(bx: u64, iters: usize) {
        let mut vm = vec![0u8; 8 * L];
        mkrndv(&mut vm, bx);
        let mut m = crate::limbs_from_le_bytes::<L>(&vm).unwrap();
        m[0] |= 1;
        m[L - 1] |= 1u64 << 63;

        let cios = FieldContext::<L>::new(m).unwrap();
        let sos = BigFieldContext::new(&m).unwrap();
        assert_eq!(sos.limbs(), L);
        let zm = big_from_limbs(&m);
        assert_eq!(sos.modulus(), &zm);
        let zr = (BigUint::from(1u32) << (64 * L)) % &zm;

        for i in 0..iters {
            let x = mkcanon(&zm, L, bx + 2 * (i as u64) + 1);
            let y = mkcanon(&zm, L, bx + 2 * (i as u64) + 2);
            let mut xa = [0u64; L];
            xa.copy_from_slice(&x);
            let mut ya = [0u64; L];
            ya.copy_from_slice(&y);

            let zc = cios.mont_mul(&xa, &ya).unwrap();
            let zs = sos.mont_mul(&x, &y).unwrap();
            assert_eq!(&zc[..], &zs[..]);
            assert_eq!((big_from_limbs(&zc) * &zr) % &zm,
                (big_from_limbs(&x) * big_from_limbs(&y)) % &zm);
        }

        // boundary agreement
        let b = super::limbs_from_big(&(&zm - 1u32), L);
        let mut ba = [0u64; L];
        ba.copy_from_slice(&b);
        assert_eq!(&cios.mont_mul(&ba, &ba).unwrap()[..],
            &sos.mont_mul(&b, &b).unwrap()[..]);

        // both reject the modulus itself
        assert_eq!(cios.mont_mul(&m, &ba), Err(FieldError::InvalidOperand));
        assert_eq!(sos.mont_mul(&m, &b), Err(FieldError::InvalidOperand));
    }

    #[test]
    fn cios_sos_agreement() {
        cross_check::<1>(400u64 << 32, 1000);
        cross_check::<2>(401u64 << 32, 1000);
        cross_check::<3>(402u64 << 32, 1000);
        cross_check::<4>(403u64 << 32, 1000);
        cross_check::<6>(404u64 << 32, 1000);
        cross_check::<8>(405u64 << 32, 1000);
        cross_check::<12>(406u64 << 32, 1000);
        cross_check::<16>(407u64 << 32, 1000);
        cross_check::<24>(408u64 << 32, 1000);
    }
}
