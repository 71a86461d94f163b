//! Galois-field arithmetic, parameterized per symbology.
//!
//! Grounded on `original_source/core/src/GenericGF.h`: a field is
//! `{order, primitive, generator_base, exp_table, log_table}` with virtual
//! `add`/`subtract` so a GF(p) (prime, non-power-of-two) field can override
//! them away from XOR — the DotCode GF(113) field is exactly that case. The
//! C++ class hierarchy (`GenericGF` + subclasses overriding `add`/`subtract`)
//! becomes a small trait plus two concrete field kinds here.

/// A Galois field used by the Reed-Solomon layer. `order` is the field size
/// (2^m for binary extension fields, a prime for DotCode's GF(113)).
pub trait GaloisField {
    fn order(&self) -> i32;
    fn generator_base(&self) -> i32;
    fn exp(&self, a: i32) -> i32;
    fn log(&self, a: i32) -> i32;

    fn add(&self, a: i32, b: i32) -> i32;
    fn subtract(&self, a: i32, b: i32) -> i32 {
        // Only equals `add` in characteristic-2 fields; prime fields must override.
        self.add(a, b)
    }

    fn inverse(&self, a: i32) -> i32 {
        self.exp(self.order() - self.log(a) - 1)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log(a) + self.log(b);
        let m = self.order() - 1;
        self.exp(if sum < m { sum } else { sum - m })
    }
}

/// A binary extension field GF(2^m), constructed from an irreducible
/// polynomial `primitive` (bit `i` set means coefficient of x^i is 1).
pub struct BinaryGF {
    order: i32,
    generator_base: i32,
    exp_table: Vec<i32>,
    log_table: Vec<i32>,
}

impl BinaryGF {
    pub fn new(primitive: i32, size: i32, generator_base: i32) -> Self {
        let size_usize = size as usize;
        let mut exp_table = vec![0i32; size_usize];
        let mut log_table = vec![0i32; size_usize];
        let mut x: i32 = 1;
        for i in 0..size_usize {
            exp_table[i] = x;
            x <<= 1;
            if x >= size {
                x ^= primitive;
                x &= size - 1;
            }
        }
        for i in 0..size_usize - 1 {
            log_table[exp_table[i] as usize] = i as i32;
        }
        Self { order: size, generator_base, exp_table, log_table }
    }
}

impl GaloisField for BinaryGF {
    fn order(&self) -> i32 {
        self.order
    }
    fn generator_base(&self) -> i32 {
        self.generator_base
    }
    fn exp(&self, a: i32) -> i32 {
        self.exp_table[a as usize]
    }
    fn log(&self, a: i32) -> i32 {
        debug_assert!(a != 0, "log(0) undefined");
        self.log_table[a as usize]
    }
    fn add(&self, a: i32, b: i32) -> i32 {
        a ^ b
    }
    fn subtract(&self, a: i32, b: i32) -> i32 {
        a ^ b
    }
}

/// A prime field GF(p) built the same exp/log way as `BinaryGF`, but with
/// modular (not XOR) `add`/`subtract`/exponentiation — used for DotCode's
/// GF(113) (spec calls it "GF(3^5)-equivalent"; zxing-cpp's `DCGField` in
/// fact implements it as the prime field GF(113), which is what we mirror).
pub struct PrimeGF {
    order: i32,
    generator_base: i32,
    exp_table: Vec<i32>,
    log_table: Vec<i32>,
}

impl PrimeGF {
    /// `generator` must be a primitive root modulo the prime `order`.
    pub fn new(order: i32, generator: i32, generator_base: i32) -> Self {
        let size_usize = order as usize;
        let mut exp_table = vec![0i32; size_usize];
        let mut log_table = vec![0i32; size_usize];
        let mut x: i32 = 1;
        for i in 0..size_usize - 1 {
            exp_table[i] = x;
            log_table[x as usize] = i as i32;
            x = (x * generator) % order;
        }
        exp_table[size_usize - 1] = exp_table[0];
        Self { order, generator_base, exp_table, log_table }
    }
}

impl GaloisField for PrimeGF {
    fn order(&self) -> i32 {
        self.order
    }
    fn generator_base(&self) -> i32 {
        self.generator_base
    }
    fn exp(&self, a: i32) -> i32 {
        self.exp_table[(a.rem_euclid(self.order - 1)) as usize]
    }
    fn log(&self, a: i32) -> i32 {
        debug_assert!(a != 0, "log(0) undefined");
        self.log_table[a as usize]
    }
    fn add(&self, a: i32, b: i32) -> i32 {
        (a + b) % self.order
    }
    fn subtract(&self, a: i32, b: i32) -> i32 {
        (a - b).rem_euclid(self.order)
    }
}

/// Lazily-initialized, read-only, process-wide field tables.
pub mod fields {
    use super::*;
    use std::sync::OnceLock;

    macro_rules! binary_field {
        ($name:ident, $primitive:expr, $size:expr, $base:expr) => {
            pub fn $name() -> &'static BinaryGF {
                static FIELD: OnceLock<BinaryGF> = OnceLock::new();
                FIELD.get_or_init(|| BinaryGF::new($primitive, $size, $base))
            }
        };
    }

    // QR Code and Han Xin data: GF(256), primitive 0x11D, generator base 0.
    binary_field!(qr_code_field_256, 0x011D, 256, 0);
    // Data Matrix: GF(256), primitive 0x12D, generator base 1.
    binary_field!(data_matrix_field_256, 0x012D, 256, 1);
    // Aztec data (256-element layer): GF(256), primitive 0x163, generator base 1.
    binary_field!(aztec_data_8, 0x0163, 256, 1);
    // Aztec larger layers.
    binary_field!(aztec_data_10, 0x0409, 1024, 1);
    binary_field!(aztec_data_12, 0x1069, 4096, 1);
    // Aztec parameter block: GF(16).
    binary_field!(aztec_param, 0x13, 16, 1);
    // Han Xin data: same GF(256) as QR (ISO/IEC 20830 uses the 0x11D primitive).
    binary_field!(han_xin_field_256, 0x011D, 256, 0);
    // Han Xin function-information block: GF(16).
    binary_field!(han_xin_func_info, 0x13, 16, 1);
    // MaxiCode: GF(64), primitive 0x43, generator base 1.
    binary_field!(maxi_code_field_64, 0x43, 64, 1);

    pub fn dot_code_field_113() -> &'static PrimeGF {
        static FIELD: OnceLock<PrimeGF> = OnceLock::new();
        // 3 is a primitive root mod 113.
        FIELD.get_or_init(|| PrimeGF::new(113, 3, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_field_roundtrips_log_exp() {
        let gf = fields::qr_code_field_256();
        for a in 1..256 {
            assert_eq!(gf.exp(gf.log(a)), a, "a={a}");
        }
    }

    #[test]
    fn binary_field_inverse() {
        let gf = fields::qr_code_field_256();
        for a in 1..256 {
            assert_eq!(gf.multiply(a, gf.inverse(a)), 1, "a={a}");
        }
    }

    #[test]
    fn binary_add_is_xor() {
        let gf = fields::data_matrix_field_256();
        assert_eq!(gf.add(12, 7), 12 ^ 7);
        assert_eq!(gf.subtract(12, 7), 12 ^ 7);
    }

    #[test]
    fn prime_field_add_is_not_xor() {
        let gf = fields::dot_code_field_113();
        assert_eq!(gf.add(100, 50), (100 + 50) % 113);
        assert_ne!(gf.add(100, 50), 100 ^ 50);
    }

    #[test]
    fn prime_field_multiplicative_inverse() {
        let gf = fields::dot_code_field_113();
        for a in 1..113 {
            assert_eq!(gf.multiply(a, gf.inverse(a)), 1, "a={a}");
        }
    }
}
