/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::error::{QrError, Result};

/// GF(256) field operations using log/exp tables
pub struct Gf256;

const PRIMITIVE: usize = 0x11D;

const fn build_tables() -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: usize = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    // Doubled so that exp[log a + log b] never needs a modulo
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    (exp, log)
}

static TABLES: ([u8; 512], [u8; 256]) = build_tables();

impl Gf256 {
    /// alpha^n for n in 0..512
    pub fn exp(n: usize) -> u8 {
        TABLES.0[n]
    }

    /// Discrete log of a non-zero element
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 { None } else { Some(TABLES.1[a as usize]) }
    }

    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.1[a as usize] as usize;
        let log_b = TABLES.1[b as usize] as usize;
        TABLES.0[log_a + log_b]
    }
}

/// Multiply two polynomials (coefficients in descending degree order)
pub fn poly_mul(p1: &[u8], p2: &[u8]) -> Vec<u8> {
    let mut coeff = vec![0u8; p1.len() + p2.len() - 1];
    for (i, &a) in p1.iter().enumerate() {
        for (j, &b) in p2.iter().enumerate() {
            coeff[i + j] ^= Gf256::mul(a, b);
        }
    }
    coeff
}

/// Remainder of `dividend` divided by a monic `divisor`
pub fn poly_mod(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = dividend.to_vec();
    let mut start = 0;
    while result.len() - start >= divisor.len() {
        let coeff = result[start];
        for (i, &d) in divisor.iter().enumerate() {
            result[start + i] ^= Gf256::mul(d, coeff);
        }
        // Drop the leading zero terms
        while start < result.len() && result[start] == 0 {
            start += 1;
        }
    }
    result.split_off(start)
}

/// Generator polynomial of `degree`: product of (x - alpha^i) for i in 0..degree
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..degree {
        poly = poly_mul(&poly, &[1, Gf256::exp(i)]);
    }
    poly
}

/// Reed-Solomon encoder producing `degree` EC codewords per block
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    degree: usize,
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(degree: usize) -> Result<Self> {
        if degree == 0 || degree > 254 {
            return Err(QrError::Internal("Reed-Solomon degree must be in 1..=254"));
        }
        Ok(Self {
            degree,
            generator: generator_polynomial(degree),
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// EC codewords for `data`, always exactly `degree` bytes
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut padded = Vec::with_capacity(data.len() + self.degree);
        padded.extend_from_slice(data);
        padded.resize(data.len() + self.degree, 0);

        let remainder = poly_mod(&padded, &self.generator);
        let mut ec = vec![0u8; self.degree - remainder.len()];
        ec.extend_from_slice(&remainder);
        ec
    }
}
