use super::{addcarry_u64, subborrow_u64, umull_add, umull_add2};
use crate::FieldError;

/// Read-only parameters of one finite field with an L-limb odd modulus.
///
/// A context is created once from the modulus limbs and never mutated;
/// it can be copied and shared freely (all multiplication entry points
/// take `&self` and keep their scratch state on the stack). The limb
/// count is a compile-time parameter: each instantiation of
/// [`FieldContext::mont_mul`] at a given `L` monomorphizes into a fully
/// unrolled kernel for that width.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<const L: usize> {
    modulus: [u64; L],
    m0i: u64,
    r: [u64; L],
    r2: [u64; L],
}

// Compute -1/x mod 2^64 (x must be odd). The first approximation 2 - x
// is exact over the low 2 bits; each Newton step doubles the number of
// exact low bits.
const fn ninv64(x: u64) -> u64 {
    let y = 2u64.wrapping_sub(x);
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(x)));
    y.wrapping_neg()
}

// Canonical-range check: borrow-propagating subtraction over the L
// limbs, no allocation. Returns true when a < b.
#[inline]
fn limbs_lt<const L: usize>(a: &[u64; L], b: &[u64; L]) -> bool {
    let mut cc = 0;
    for i in 0..L {
        let (_, ee) = subborrow_u64(a[i], b[i], cc);
        cc = ee;
    }
    cc != 0
}

// One modular doubling step: d <- 2*d mod m, for d < m. Since 2*d is
// lower than 2*m, a single conditional subtraction reduces it; the
// subtracted value is kept when the shift carried out a bit or the
// subtraction did not borrow.
fn double_mod<const L: usize>(d: &mut [u64; L], m: &[u64; L]) {
    let mut hi = 0u64;
    for i in 0..L {
        let w = d[i];
        d[i] = (w << 1) | hi;
        hi = w >> 63;
    }
    let mut z = [0u64; L];
    let mut cc = 0;
    for i in 0..L {
        let (w, ee) = subborrow_u64(d[i], m[i], cc);
        z[i] = w;
        cc = ee;
    }
    let mm = hi.wrapping_neg() | (cc as u64).wrapping_sub(1);
    for i in 0..L {
        d[i] ^= mm & (d[i] ^ z[i]);
    }
}

impl<const L: usize> FieldContext<L> {
    // The limb count is part of the type; a zero-limb field is
    // meaningless and rejected at compile time.
    #[allow(dead_code)]
    const COMPILE_TIME_CHECKS: () = Self::compile_time_checks();
    const fn compile_time_checks() {
        static_assert!(L >= 1);
    }

    /// Create a field context from the modulus, provided as 64-bit
    /// limbs in little-endian order. The modulus must be odd, greater
    /// than 1, and must fill its top limb (a modulus of fewer limbs
    /// belongs in a narrower context). This derives the Montgomery
    /// constant n0' = -m^-1 mod 2^64 along with R mod m and R^2 mod m,
    /// where R = 2^(64*L).
    pub fn new(modulus: [u64; L]) -> Result<Self, FieldError> {
        let _ = Self::COMPILE_TIME_CHECKS;
        if (modulus[0] & 1) == 0 || modulus[L - 1] == 0 {
            return Err(FieldError::InvalidModulus);
        }
        if L == 1 && modulus[0] == 1 {
            return Err(FieldError::InvalidModulus);
        }

        // R mod m by 64*L modular doublings from 1; continuing for
        // another 64*L doublings yields R^2 mod m. This is one-time
        // setup cost, so the O(L^2) schoolbook route is fine.
        let mut r = [0u64; L];
        r[0] = 1;
        for _ in 0..(64 * L) {
            double_mod(&mut r, &modulus);
        }
        let mut r2 = r;
        for _ in 0..(64 * L) {
            double_mod(&mut r2, &modulus);
        }

        Ok(FieldContext {
            modulus,
            m0i: ninv64(modulus[0]),
            r,
            r2,
        })
    }

    /// Modulus limbs, in little-endian order.
    #[inline(always)]
    pub fn modulus(&self) -> &[u64; L] {
        &self.modulus
    }

    /// Montgomery constant n0' = -m^-1 mod 2^64.
    #[inline(always)]
    pub fn mont_param(&self) -> u64 {
        self.m0i
    }

    /// R mod m: the Montgomery representation of 1, and the left
    /// operand that makes [`FieldContext::mont_mul`] the identity.
    #[inline(always)]
    pub fn montgomery_one(&self) -> [u64; L] {
        self.r
    }

    /// R^2 mod m: multiplying by this converts a canonical residue into
    /// Montgomery representation.
    #[inline(always)]
    pub fn montgomery_r2(&self) -> [u64; L] {
        self.r2
    }

    /// Number of 64-bit limbs in a field element.
    #[inline(always)]
    pub fn limbs(&self) -> usize {
        L
    }

    /// Montgomery multiplication: for canonical x and y (both strictly
    /// lower than the modulus), compute x*y/R mod m, itself canonical.
    /// Operands are validated first; if either is out of range, the
    /// multiplication fails with `InvalidOperand` and nothing is
    /// computed.
    ///
    /// This is the CIOS kernel: the multiply and reduce passes are
    /// interleaved, one word of x per iteration, over an accumulator of
    /// L+1 words plus a one-bit overflow. For canonical inputs the
    /// accumulated value stays below 2*m, so a single conditional
    /// subtraction at the end produces the canonical result.
    pub fn mont_mul(&self, x: &[u64; L], y: &[u64; L])
        -> Result<[u64; L], FieldError>
    {
        if !limbs_lt(x, &self.modulus) || !limbs_lt(y, &self.modulus) {
            return Err(FieldError::InvalidOperand);
        }

        // t holds the low L words of the accumulator, th its top word,
        // d the one-bit overflow of the top word.
        let mut t = [0u64; L];
        let mut th = 0u64;
        let mut d = 0u8;
        for i in 0..L {
            // multiply pass: t += x[i]*y
            let f = x[i];
            let mut cc = 0u64;
            for j in 0..L {
                let (lo, hi) = umull_add2(f, y[j], t[j], cc);
                t[j] = lo;
                cc = hi;
            }
            let (z, e) = addcarry_u64(th, cc, 0);
            th = z;
            d = e;

            // quotient digit: t[0] + g*m0 is 0 mod 2^64
            let g = t[0].wrapping_mul(self.m0i);

            // reduce pass: t = (t + g*m) / 2^64; the division is the
            // one-word window shift, with the overflow bit folded into
            // the freed top word
            let (_, mut cc) = umull_add(g, self.modulus[0], t[0]);
            for j in 1..L {
                let (lo, hi) = umull_add2(g, self.modulus[j], t[j], cc);
                t[j - 1] = lo;
                cc = hi;
            }
            let (z, e) = addcarry_u64(th, cc, 0);
            t[L - 1] = z;
            th = (d as u64) + (e as u64);
        }

        // Final reduction: subtract m once, and keep the unsubtracted
        // value only when the subtraction borrowed with no overflow
        // word. For canonical inputs th is 0 or 1 here and the mask is
        // all-zeros or all-ones; anything else would mean the single
        // subtraction did not suffice.
        debug_assert!(th <= 1);
        let mut z = [0u64; L];
        let mut cc = 0;
        for i in 0..L {
            let (w, ee) = subborrow_u64(t[i], self.modulus[i], cc);
            z[i] = w;
            cc = ee;
        }
        let mm = th.wrapping_sub(cc as u64);
        debug_assert!(mm == 0 || mm == u64::MAX);
        let mut cc = 0;
        for i in 0..L {
            let (w, ee) = addcarry_u64(z[i], mm & self.modulus[i], cc);
            z[i] = w;
            cc = ee;
        }
        debug_assert!(limbs_lt(&z, &self.modulus));
        Ok(z)
    }

    /// Convert a canonical residue into Montgomery representation
    /// (multiply by R^2 mod m).
    #[inline]
    pub fn to_montgomery(&self, x: &[u64; L]) -> Result<[u64; L], FieldError> {
        self.mont_mul(x, &self.r2)
    }

    /// Convert out of Montgomery representation (multiply by 1, which
    /// divides by R).
    #[inline]
    pub fn from_montgomery(&self, x: &[u64; L]) -> Result<[u64; L], FieldError> {
        let mut one = [0u64; L];
        one[0] = 1;
        self.mont_mul(x, &one)
    }
}

/// Decode a little-endian byte buffer into limbs: limb i is read from
/// bytes 8*i to 8*i + 7. The buffer length must be exactly 8*L bytes;
/// any other length yields `None`.
pub fn limbs_from_le_bytes<const L: usize>(buf: &[u8]) -> Option<[u64; L]> {
    if buf.len() != 8 * L {
        return None;
    }
    let mut x = [0u64; L];
    for i in 0..L {
        let mut w = [0u8; 8];
        w.copy_from_slice(&buf[(8 * i)..(8 * i + 8)]);
        x[i] = u64::from_le_bytes(w);
    }
    Some(x)
}

/// Encode limbs into a little-endian byte buffer: limb i is written to
/// bytes 8*i to 8*i + 7. The buffer length must be exactly 8*L bytes;
/// any other length yields `None` and the buffer is left untouched.
pub fn limbs_to_le_bytes<const L: usize>(x: &[u64; L], buf: &mut [u8])
    -> Option<()>
{
    if buf.len() != 8 * L {
        return None;
    }
    for i in 0..L {
        buf[(8 * i)..(8 * i + 8)].copy_from_slice(&x[i].to_le_bytes());
    }
    Some(())
}

// ========================================================================
