//! Reed-Solomon error correction over an arbitrary `GaloisField`.
//!
//! Berlekamp-Massey error-locator construction, Chien search, Forney
//! evaluation. Ported from the structure of zxing-cpp's `ReedSolomonDecoder`
//! (referenced from `original_source/core/src/qrcode/QRDecoder.cpp`'s
//! `CorrectErrors`), generalized to run over any `GaloisField` impl — in
//! particular the DotCode prime field, whose `add`/`subtract` are not XOR
//! (see `galois_field.rs`).

use crate::error::{Error, Result};
use crate::galois_field::GaloisField;

/// A polynomial over a `GaloisField`, coefficients ordered highest-degree first.
struct GfPoly {
    coefficients: Vec<i32>,
}

impl GfPoly {
    fn new(mut coefficients: Vec<i32>) -> Self {
        while coefficients.len() > 1 && coefficients[0] == 0 {
            coefficients.remove(0);
        }
        Self { coefficients }
    }

    fn degree(&self) -> i32 {
        self.coefficients.len() as i32 - 1
    }

    fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0
    }

    fn coefficient(&self, degree: i32) -> i32 {
        let idx = self.coefficients.len() as i32 - 1 - degree;
        if idx < 0 { 0 } else { self.coefficients[idx as usize] }
    }

    fn eval(&self, field: &dyn GaloisField, a: i32) -> i32 {
        if a == 0 {
            return self.coefficient(0);
        }
        let mut result = self.coefficients[0];
        for &c in &self.coefficients[1..] {
            result = field.add(field.multiply(a, result), c);
        }
        result
    }

    fn add(&self, field: &dyn GaloisField, other: &GfPoly) -> GfPoly {
        if self.is_zero() {
            return GfPoly::new(other.coefficients.clone());
        }
        if other.is_zero() {
            return GfPoly::new(self.coefficients.clone());
        }
        let (smaller, larger) = if self.coefficients.len() <= other.coefficients.len() {
            (&self.coefficients, &other.coefficients)
        } else {
            (&other.coefficients, &self.coefficients)
        };
        let len_diff = larger.len() - smaller.len();
        let mut sum = larger[..len_diff].to_vec();
        for i in 0..smaller.len() {
            sum.push(field.add(larger[len_diff + i], smaller[i]));
        }
        GfPoly::new(sum)
    }

    fn multiply_poly(&self, field: &dyn GaloisField, other: &GfPoly) -> GfPoly {
        if self.is_zero() || other.is_zero() {
            return GfPoly::new(vec![0]);
        }
        let mut product = vec![0i32; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.multiply(a, b));
            }
        }
        GfPoly::new(product)
    }

    fn multiply_monomial(&self, field: &dyn GaloisField, degree: i32, coefficient: i32) -> GfPoly {
        if coefficient == 0 {
            return GfPoly::new(vec![0]);
        }
        let mut product = vec![0i32; self.coefficients.len() + degree as usize];
        for (i, &c) in self.coefficients.iter().enumerate() {
            product[i] = field.multiply(c, coefficient);
        }
        GfPoly::new(product)
    }

    fn divide(&self, field: &dyn GaloisField, other: &GfPoly) -> (GfPoly, GfPoly) {
        let mut quotient = vec![0i32; 1];
        let mut remainder = GfPoly::new(self.coefficients.clone());

        let denom_leading_term = other.coefficient(other.degree());
        let inverse_denom_leading = field.inverse(denom_leading_term);

        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_diff = remainder.degree() - other.degree();
            let scale = field.multiply(remainder.coefficient(remainder.degree()), inverse_denom_leading);
            let term = other.multiply_monomial(field, degree_diff, scale);
            let mut q_term = vec![0i32; degree_diff as usize + 1];
            q_term[0] = scale;
            let q_term_poly = GfPoly::new(q_term);
            quotient = q_term_poly.add(field, &GfPoly::new(quotient)).coefficients;
            remainder = remainder.add(field, &term);
        }
        (GfPoly::new(quotient), remainder)
    }
}

/// Attempts to correct `codewords` in place given `num_ec` trailing
/// error-correction codewords, optionally aided by a list of known erasure
/// positions.
///
/// On success, `codewords[..codewords.len() - num_ec]` are the corrected data
/// codewords (the EC tail is left in an unspecified state). On failure,
/// `codewords` must not be consumed by the caller.
pub fn rs_decode(
    field: &dyn GaloisField,
    codewords: &mut [i32],
    num_ec: usize,
    erasures: &[usize],
) -> Result<()> {
    let poly = GfPoly::new(codewords.to_vec());
    let mut syndrome_coefficients = vec![0i32; num_ec];
    let mut no_error = true;
    for i in 0..num_ec {
        let eval = poly.eval(field, field.exp(i as i32 + field.generator_base()));
        let idx = syndrome_coefficients.len() - 1 - i;
        syndrome_coefficients[idx] = eval;
        if eval != 0 {
            no_error = false;
        }
    }
    if no_error {
        return Ok(());
    }

    for &pos in erasures {
        if pos >= codewords.len() {
            return Err(Error::format("rs_decode: erasure position out of range"));
        }
    }
    if erasures.len() > num_ec {
        return Err(Error::checksum("rs_decode: too many erasures"));
    }

    let syndrome = GfPoly::new(syndrome_coefficients);

    // Errata locator Gamma(x) = prod (1 - X_i*x) over known erasure positions;
    // X_i is the same location value `find_error_locations` inverts back to a
    // codeword position. With no erasures this is the constant poly `1`, which
    // makes every step below a no-op and reproduces the error-only path exactly.
    let mut erasure_locator = GfPoly::new(vec![1]);
    for &pos in erasures {
        let loc = field.exp(codewords.len() as i32 - 1 - pos as i32);
        let term = GfPoly::new(vec![field.subtract(0, loc), 1]);
        erasure_locator = erasure_locator.multiply_poly(field, &term);
    }

    // sigma(x)*[Gamma(x)*S(x) mod x^num_ec] = omega(x) mod x^num_ec solves for
    // the locator of the *additional*, unknown errors; Gamma(x)*sigma(x) is
    // then the full errata locator covering erasures and errors alike.
    let modified_syndrome = truncate_poly(&erasure_locator.multiply_poly(field, &syndrome), num_ec);
    let (sigma, omega) =
        run_euclidean_algorithm(field, &build_monomial(num_ec), &modified_syndrome, num_ec, erasures.len())?;
    let errata_locator = erasure_locator.multiply_poly(field, &sigma);
    let error_locations = find_error_locations(field, &errata_locator, codewords.len())?;
    let error_magnitudes = find_error_magnitudes(field, &omega, &error_locations);

    for (i, &loc) in error_locations.iter().enumerate() {
        let position = codewords.len() as i32 - 1 - field.log(loc);
        if position < 0 {
            return Err(Error::checksum("rs_decode: bad error location"));
        }
        let position = position as usize;
        codewords[position] = field.subtract(codewords[position], error_magnitudes[i]);
    }

    Ok(())
}

fn build_monomial(degree: usize) -> GfPoly {
    let mut c = vec![0i32; degree + 1];
    c[0] = 1;
    GfPoly::new(c)
}

/// Reduce `poly` modulo x^`num_ec`, i.e. keep only its lowest `num_ec`
/// coefficients (the last `num_ec` entries, since `GfPoly` stores
/// highest-degree first).
fn truncate_poly(poly: &GfPoly, num_ec: usize) -> GfPoly {
    let coeffs = &poly.coefficients;
    if coeffs.len() <= num_ec {
        GfPoly::new(coeffs.clone())
    } else {
        GfPoly::new(coeffs[coeffs.len() - num_ec..].to_vec())
    }
}

/// Solves the key equation for the locator of the errors *not* already
/// accounted for by `num_erasures` known erasures: stopping degree shrinks
/// from the usual `num_ec/2` by the erasure count, since each known erasure
/// "costs" the correction budget half as much as an unknown error.
fn run_euclidean_algorithm(
    field: &dyn GaloisField,
    modulus: &GfPoly,
    syndrome: &GfPoly,
    num_ec: usize,
    num_erasures: usize,
) -> Result<(GfPoly, GfPoly)> {
    let (mut r_last, mut r) = (GfPoly::new(modulus.coefficients.clone()), GfPoly::new(syndrome.coefficients.clone()));
    let (mut t_last, mut t) = (GfPoly::new(vec![0]), GfPoly::new(vec![1]));

    while r.degree() >= ((num_ec - num_erasures) as i32) / 2 + 1 {
        let (r_last_last, t_last_last) = (r_last, t_last);
        r_last = r;
        t_last = t;

        if r_last.is_zero() {
            return Err(Error::checksum("rs_decode: r_last is zero"));
        }
        r = r_last_last;
        t = t_last_last;
        let mut q = GfPoly::new(vec![0]);
        let denom_leading_term = r_last.coefficient(r_last.degree());
        let dlt_inverse = field.inverse(denom_leading_term);

        while r.degree() >= r_last.degree() && !r.is_zero() {
            let degree_diff = r.degree() - r_last.degree();
            let scale = field.multiply(r.coefficient(r.degree()), dlt_inverse);
            q = q.add(field, &build_monomial_scaled(degree_diff as usize, scale));
            r = r.add(field, &r_last.multiply_monomial(field, degree_diff, scale));
        }

        t = q.multiply_poly(field, &t_last).add(field, &t);
    }

    let sigma_tilde_at_zero = t.coefficient(0);
    if sigma_tilde_at_zero == 0 {
        return Err(Error::checksum("rs_decode: sigma(0) == 0"));
    }

    let inverse = field.inverse(sigma_tilde_at_zero);
    let sigma: Vec<i32> = t.coefficients.iter().map(|&c| field.multiply(c, inverse)).collect();
    let omega: Vec<i32> = r.coefficients.iter().map(|&c| field.multiply(c, inverse)).collect();
    Ok((GfPoly::new(sigma), GfPoly::new(omega)))
}

fn build_monomial_scaled(degree: usize, coefficient: i32) -> GfPoly {
    let mut c = vec![0i32; degree + 1];
    c[0] = coefficient;
    GfPoly::new(c)
}

fn find_error_locations(field: &dyn GaloisField, error_locator: &GfPoly, n: usize) -> Result<Vec<i32>> {
    let num_errors = error_locator.degree();
    if num_errors == 0 {
        return Ok(vec![]);
    }
    let mut result = Vec::with_capacity(num_errors as usize);
    let mut e = 1;
    while e < field.order() && (result.len() as i32) < num_errors {
        if e as usize <= n && error_locator.eval(field, e) == 0 {
            result.push(field.inverse(e));
        }
        e += 1;
    }
    if result.len() as i32 != num_errors {
        return Err(Error::checksum("rs_decode: error locator degree mismatch"));
    }
    Ok(result)
}

fn find_error_magnitudes(field: &dyn GaloisField, error_evaluator: &GfPoly, error_locations: &[i32]) -> Vec<i32> {
    let s = error_locations.len();
    let mut result = vec![0i32; s];
    for i in 0..s {
        let xi_inverse = field.inverse(error_locations[i]);
        let mut error_locator_prime = 1;
        for j in 0..s {
            if i != j {
                let term = field.multiply(error_locations[j], xi_inverse);
                let term = field.add(1, term);
                error_locator_prime = field.multiply(error_locator_prime, term);
            }
        }
        result[i] = field.multiply(error_evaluator.eval(field, xi_inverse), field.inverse(error_locator_prime));
        if field.generator_base() != 0 {
            result[i] = field.multiply(result[i], xi_inverse);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois_field::fields;

    fn encode(field: &dyn GaloisField, data: &[i32], num_ec: usize) -> Vec<i32> {
        let mut generator = GfPoly::new(vec![1]);
        for i in 0..num_ec {
            let term = GfPoly::new(vec![1, field.exp(i as i32 + field.generator_base())]);
            generator = generator.multiply_poly(field, &term);
        }
        let mut info_coefficients = data.to_vec();
        info_coefficients.resize(data.len() + num_ec, 0);
        let info = GfPoly::new(info_coefficients);
        let (_, remainder) = info.divide(field, &generator);
        let mut result = data.to_vec();
        let mut rem = remainder.coefficients.clone();
        while rem.len() < num_ec {
            rem.insert(0, 0);
        }
        result.extend(rem);
        result
    }

    #[test]
    fn corrects_no_errors() {
        let field = fields::qr_code_field_256();
        let data = vec![32, 65, 205, 69, 41, 220, 46, 128, 236];
        let mut codewords = encode(field, &data, 17);
        rs_decode(field, &mut codewords, 17, &[]).unwrap();
        assert_eq!(&codewords[..data.len()], &data[..]);
    }

    #[test]
    fn corrects_flipped_bytes_up_to_half_ec() {
        let field = fields::qr_code_field_256();
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let num_ec = 10;
        let mut codewords = encode(field, &data, num_ec);
        codewords[0] ^= 0xFF;
        codewords[3] ^= 0x11;
        codewords[7] ^= 0x7F;
        codewords[9] ^= 0x01;
        codewords[12] ^= 0xAA;
        rs_decode(field, &mut codewords, num_ec, &[]).unwrap();
        assert_eq!(&codewords[..data.len()], &data[..]);
    }

    #[test]
    fn rejects_too_many_errors() {
        let field = fields::qr_code_field_256();
        let data = vec![1, 2, 3, 4, 5];
        let num_ec = 6;
        let mut codewords = encode(field, &data, num_ec);
        for i in 0..codewords.len() {
            codewords[i] ^= 0xFF;
        }
        assert!(rs_decode(field, &mut codewords, num_ec, &[]).is_err());
    }

    #[test]
    fn erasures_correct_beyond_the_error_only_budget() {
        // num_ec=10 buys floor(10/2)=5 unknown errors, or fewer unknown errors
        // plus known erasures at half cost each: 4 erasures + 3 unknown errors
        // stays within budget (4 + 2*3 = 10) even though 3 errors alone would
        // leave no room for a 4th unknown error.
        let field = fields::qr_code_field_256();
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let num_ec = 10;
        let mut codewords = encode(field, &data, num_ec);
        let erasure_positions = [0, 3, 7, 9];
        for &pos in &erasure_positions {
            codewords[pos] ^= 0xFF; // erased bytes may hold any garbage value
        }
        codewords[1] ^= 0x11;
        codewords[5] ^= 0xAA;
        codewords[12] ^= 0x03;
        rs_decode(field, &mut codewords, num_ec, &erasure_positions).unwrap();
        assert_eq!(&codewords[..data.len()], &data[..]);
    }

    #[test]
    fn prime_field_roundtrip() {
        let field = fields::dot_code_field_113();
        let data = vec![5, 10, 15, 20];
        let num_ec = 4;
        let mut codewords = encode(field, &data, num_ec);
        codewords[1] = field.add(codewords[1], 7);
        rs_decode(field, &mut codewords, num_ec, &[]).unwrap();
        assert_eq!(&codewords[..data.len()], &data[..]);
    }
}
