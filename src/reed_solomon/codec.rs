//! Systematic Reed-Solomon codec with erasure decoding
//!
//! ## Encoding
//!
//! Input symbols are cut into payload slices of `cap - enc_len` symbols, so
//! that payload plus parity never exceeds the field capacity. Each slice
//! `m(x)` is shifted by `enc_len` zeros and divided by the generator
//! polynomial `g(x) = (x - α⁰)(x - α¹)…(x - α^(enc_len-1))`; the remainder is
//! appended as parity, so every codeword block is a multiple of `g(x)`:
//!
//! ```text
//! ┌───────── payload (≤ cap - enc_len) ─────────┬── parity (enc_len) ──┐
//! │ m[0] │ m[1] │ ...                  │ m[k-1] │ p[0] │ ... │ p[t-1] │
//! └─────────────────────────────────────────────┴──────────────────────┘
//!   degree k+t-1                                              degree 0
//! ```
//!
//! ## Decoding
//!
//! Received data is cut into blocks of `cap` symbols, the length of a full
//! codeword, with a shorter last block for a short final slice. For each
//! block with erasures the decoder computes syndromes, the error locator
//! `σ(x)`, the error evaluator `ω(x)` and finally the error magnitudes with
//! the Forney algorithm, then adds the magnitudes back onto the block.
//!
//! Positions handed to the decoder count from the start of the block, but the
//! polynomial view puts degree 0 at the end, so position `k` of a block of
//! length `n` is the coefficient of `x^(n-1-k)`. See [`reversed_positions`].

use super::error::{RsError, RsResult};
use super::galois::{Element, GaloisField};
use super::polynomial::Polynomials;
use crate::config::CodecConfig;
use crate::message::{Message, OutputFormat};
use log::{debug, trace};
use rayon::prelude::*;
use rayon::ThreadPool;
use rustc_hash::FxHashMap as HashMap;
use std::sync::Arc;

/// Reed-Solomon encoder/decoder for erasures at known positions
#[derive(Debug, Clone)]
pub struct ReedSolomonCodec {
    msg_len: usize,
    enc_len: usize,
    field: Arc<GaloisField>,
    polynomials: Polynomials,
    generator: Vec<Element>,
    config: CodecConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl ReedSolomonCodec {
    /// Create a codec over the default GF(2^8) field
    pub fn new(msg_len: usize, enc_len: usize) -> RsResult<Self> {
        Self::from_parts(
            msg_len,
            enc_len,
            Arc::new(GaloisField::default()),
            CodecConfig::default(),
        )
    }

    /// Create a codec over GF(prime^power) generated by `alpha` modulo `prim_poly`
    pub fn with_field(
        msg_len: usize,
        enc_len: usize,
        prime: u32,
        power: u32,
        alpha: u32,
        prim_poly: u32,
    ) -> RsResult<Self> {
        let field = GaloisField::new(prime, power, alpha, prim_poly)?;
        Self::from_parts(msg_len, enc_len, Arc::new(field), CodecConfig::default())
    }

    /// Create a codec sharing an existing field
    pub fn from_parts(
        msg_len: usize,
        enc_len: usize,
        field: Arc<GaloisField>,
        config: CodecConfig,
    ) -> RsResult<Self> {
        if msg_len <= enc_len {
            return Err(RsError::MessageLengthTooSmall { msg_len, enc_len });
        }
        // Parity alone must leave room for at least one payload symbol
        if enc_len >= field.cap() {
            return Err(RsError::BlockCapacityExceeded {
                msg_len: 0,
                enc_len,
                cap: field.cap(),
            });
        }

        let polynomials = Polynomials::new(Arc::clone(&field));
        let generator = generator_polynomial(&polynomials, enc_len)?;
        let pool = build_pool(&config)?;
        debug!(
            "Reed-Solomon codec: {} payload + {} parity symbols per block over GF(2^{})",
            field.cap() - enc_len,
            enc_len,
            field.power()
        );

        Ok(Self {
            msg_len,
            enc_len,
            field,
            polynomials,
            generator,
            config,
            pool,
        })
    }

    /// Message length the codec was configured with
    pub fn msg_len(&self) -> usize {
        self.msg_len
    }

    /// Parity symbols per block
    pub fn enc_len(&self) -> usize {
        self.enc_len
    }

    /// Payload symbols per encoded slice, `cap - enc_len`
    pub fn payload_len(&self) -> usize {
        self.field.cap() - self.enc_len
    }

    /// Length of a full codeword block, `cap`
    pub fn block_len(&self) -> usize {
        self.field.cap()
    }

    /// Worker threads used for block-parallel processing
    pub fn threads(&self) -> usize {
        match (&self.pool, self.config.parallel) {
            (Some(pool), _) => pool.current_num_threads(),
            (None, true) => rayon::current_num_threads(),
            (None, false) => 1,
        }
    }

    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    pub fn polynomials(&self) -> &Polynomials {
        &self.polynomials
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The generator polynomial, degree `enc_len`, highest degree first
    pub fn generator_polynomial(&self) -> &[Element] {
        &self.generator
    }

    /// Encode a message into concatenated codeword blocks
    pub fn encode(&self, message: &Message, format: OutputFormat) -> RsResult<Message> {
        let symbols = message.to_symbols(&self.field)?;
        let encoded = self.encode_symbols(&symbols)?;
        Message::from_symbols(encoded, format)
    }

    /// Encode raw symbols into concatenated codeword blocks
    pub fn encode_symbols(&self, symbols: &[Element]) -> RsResult<Vec<Element>> {
        let blocks: Vec<&[Element]> = symbols.chunks(self.payload_len()).collect();
        debug!(
            "Encoding {} symbols in {} blocks",
            symbols.len(),
            blocks.len()
        );
        self.map_blocks(&blocks, |_, payload| self.encode_block(payload))
    }

    /// Encode one payload slice: `payload ++ parity`
    pub fn encode_block(&self, payload: &[Element]) -> RsResult<Vec<Element>> {
        if payload.len() > self.payload_len() {
            return Err(RsError::BlockCapacityExceeded {
                msg_len: payload.len(),
                enc_len: self.enc_len,
                cap: self.field.cap(),
            });
        }
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let mut padded = Vec::with_capacity(payload.len() + self.enc_len);
        padded.extend_from_slice(payload);
        padded.resize(payload.len() + self.enc_len, 0);

        let division = self.polynomials.monic_divide(&padded, &self.generator)?;

        let mut codeword = padded;
        codeword.truncate(payload.len());
        codeword.extend(fit_parity(&division.remainder, self.enc_len));
        Ok(codeword)
    }

    /// Syndromes of a block, `S_i = block(α^i)`, highest degree first
    pub fn syndromes(&self, block: &[Element]) -> RsResult<Vec<Element>> {
        let alpha = self.field.alpha();
        let mut syndromes = (0..self.enc_len)
            .map(|i| {
                self.polynomials
                    .eval(block, self.field.pow(alpha, i as u32))
            })
            .collect::<RsResult<Vec<_>>>()?;
        syndromes.reverse();
        Ok(syndromes)
    }

    /// Whether a block is a valid codeword (all syndromes vanish)
    pub fn is_codeword_block(&self, block: &[Element]) -> RsResult<bool> {
        if block.is_empty() {
            return Ok(true);
        }
        Ok(self.syndromes(block)?.iter().all(|&s| s == 0))
    }

    /// Error locator `σ(x) = ∏ (1 - α^d x)` over erasure degrees `d`
    ///
    /// `degrees` count from the end of the block; convert start offsets
    /// with [`reversed_positions`] first.
    pub fn error_locator(&self, degrees: &[usize]) -> RsResult<Vec<Element>> {
        let alpha = self.field.alpha();
        degrees.iter().try_fold(vec![1], |sigma, &d| {
            let root = self.field.pow(alpha, d as u32);
            self.polynomials
                .mul(&sigma, &[self.field.sub(0, root), 1])
        })
    }

    /// Error evaluator `ω(x) = S(x)·σ(x) mod x^enc_len`
    pub fn error_evaluator(
        &self,
        syndromes: &[Element],
        sigma: &[Element],
    ) -> RsResult<Vec<Element>> {
        let product = self.polynomials.mul(syndromes, sigma)?;

        let mut modulus = vec![0; self.enc_len + 1];
        modulus[0] = 1;
        if product.len() < modulus.len() {
            return self.polynomials.shorten(&product);
        }
        Ok(self.polynomials.monic_divide(&product, &modulus)?.remainder)
    }

    /// Error magnitudes for the erasures of one block (Forney algorithm)
    ///
    /// The returned vector has the length of `block`; adding it to the block
    /// restores the erased symbols.
    pub fn error_poly(&self, block: &[Element], positions: &[usize]) -> RsResult<Vec<Element>> {
        if block.len() > self.field.cap() {
            return Err(RsError::BlockCapacityExceeded {
                msg_len: block.len().saturating_sub(self.enc_len),
                enc_len: self.enc_len,
                cap: self.field.cap(),
            });
        }
        if positions.len() > self.enc_len {
            return Err(RsError::TooManyErasures {
                count: positions.len(),
                max: self.enc_len,
            });
        }
        let positions = distinct_positions(positions, block.len())?;

        let mut errors = vec![0; block.len()];
        if positions.is_empty() {
            return Ok(errors);
        }

        let degrees = reversed_positions(&positions, block.len())?;
        let sigma = self.error_locator(&degrees)?;
        if sigma.iter().all(|&c| c == 0) {
            return Ok(errors);
        }

        let syndromes = self.syndromes(block)?;
        let omega = self.error_evaluator(&syndromes, &sigma)?;
        let derivative = self.odd_derivative(&sigma)?;
        trace!("sigma={:?} omega={:?} sigma'={:?}", sigma, omega, derivative);

        let alpha = self.field.alpha();
        for (&position, &degree) in positions.iter().zip(&degrees) {
            let x = self.field.pow(alpha, degree as u32);
            let x_inv = self.field.inverse(x)?;

            let numerator = self
                .field
                .mul(self.polynomials.eval(&omega, x_inv)?, x);
            let denominator = self.polynomials.eval(&derivative, x_inv)?;
            errors[position] = self.field.div(numerator, denominator)?;
        }
        Ok(errors)
    }

    /// Formal derivative of `σ`: odd powers kept, then divided by `x`
    fn odd_derivative(&self, sigma: &[Element]) -> RsResult<Vec<Element>> {
        let degree = sigma.len() - 1;
        let odd: Vec<Element> = sigma
            .iter()
            .enumerate()
            .map(|(k, &c)| if (degree - k) % 2 == 1 { c } else { 0 })
            .collect();
        Ok(self.polynomials.monic_divide(&odd, &[1, 0])?.quotient)
    }

    /// Correct erasures at known positions in an encoded message
    pub fn decode_erasures(
        &self,
        received: &Message,
        positions: &[usize],
        format: OutputFormat,
    ) -> RsResult<Message> {
        let symbols = received.to_symbols(&self.field)?;
        let decoded = self.decode_symbols(&symbols, positions)?;
        Message::from_symbols(decoded, format)
    }

    /// Correct erasures at known positions in concatenated codeword blocks
    pub fn decode_symbols(
        &self,
        received: &[Element],
        positions: &[usize],
    ) -> RsResult<Vec<Element>> {
        for &s in received {
            self.field.check(s as u32)?;
        }
        // Supplied positions count, repeated ones included
        if positions.len() > self.enc_len {
            return Err(RsError::TooManyErasures {
                count: positions.len(),
                max: self.enc_len,
            });
        }
        let positions = distinct_positions(positions, received.len())?;

        let block_len = self.block_len();
        let mut erasures: HashMap<usize, Vec<usize>> = HashMap::default();
        for &p in &positions {
            erasures.entry(p / block_len).or_default().push(p % block_len);
        }

        let blocks: Vec<&[Element]> = received.chunks(block_len).collect();
        check_block_erasures(&erasures, self.enc_len)?;
        debug!(
            "Decoding {} blocks with {} erasures",
            blocks.len(),
            positions.len()
        );

        self.map_blocks(&blocks, |index, block| match erasures.get(&index) {
            Some(local) => {
                let errors = self.error_poly(block, local)?;
                self.polynomials.add(block, &errors)
            }
            None => Ok(block.to_vec()),
        })
    }

    /// Copy of `msg` with the symbols at `positions` set to zero
    pub fn erasure_sim(&self, msg: &[Element], positions: &[usize]) -> RsResult<Vec<Element>> {
        let mut erased = msg.to_vec();
        for &p in positions {
            let slot = erased.get_mut(p).ok_or(RsError::PositionOutOfRange {
                position: p,
                len: msg.len(),
            })?;
            *slot = 0;
        }
        Ok(erased)
    }

    /// Apply `f` to every block, in parallel when configured, keeping block order
    fn map_blocks<F>(&self, blocks: &[&[Element]], f: F) -> RsResult<Vec<Element>>
    where
        F: Fn(usize, &[Element]) -> RsResult<Vec<Element>> + Sync,
    {
        let parallel = || {
            blocks
                .par_iter()
                .enumerate()
                .map(|(i, &block)| f(i, block))
                .collect::<RsResult<Vec<_>>>()
        };
        let results: Vec<Vec<Element>> = if self.config.parallel && blocks.len() > 1 {
            match &self.pool {
                Some(pool) => pool.install(parallel)?,
                None => parallel()?,
            }
        } else {
            blocks
                .iter()
                .enumerate()
                .map(|(i, &block)| f(i, block))
                .collect::<RsResult<_>>()?
        };
        Ok(results.concat())
    }
}

/// Generator polynomial `∏ (x - α^i)` for `i` in `0..enc_len`
pub fn generator_polynomial(polynomials: &Polynomials, enc_len: usize) -> RsResult<Vec<Element>> {
    let field = polynomials.field();
    (0..enc_len).try_fold(vec![1], |g, i| {
        let root = field.pow(field.alpha(), i as u32);
        polynomials.mul(&g, &[1, field.sub(0, root)])
    })
}

/// Dedicated pool when a thread count is configured; otherwise rayon's global pool
fn build_pool(config: &CodecConfig) -> RsResult<Option<Arc<ThreadPool>>> {
    if !config.parallel || config.threads == 0 {
        return Ok(None);
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map(|pool| Some(Arc::new(pool)))
        .map_err(|e| RsError::ThreadPool {
            threads: config.threads,
            reason: e.to_string(),
        })
}

/// Every block may hold at most `max` erasures, keyed by block index
fn check_block_erasures(erasures: &HashMap<usize, Vec<usize>>, max: usize) -> RsResult<()> {
    let overfull = erasures
        .iter()
        .filter(|(_, local)| local.len() > max)
        .min_by_key(|entry| *entry.0);
    match overfull {
        Some((&block, local)) => Err(RsError::TooManyErasuresInBlock {
            block,
            count: local.len(),
            max,
        }),
        None => Ok(()),
    }
}

/// Convert offsets from the start of a block of length `len` into offsets
/// from its end, i.e. into the degree of the coefficient they address
pub fn reversed_positions(positions: &[usize], len: usize) -> RsResult<Vec<usize>> {
    positions
        .iter()
        .map(|&p| {
            if p < len {
                Ok(len - 1 - p)
            } else {
                Err(RsError::PositionOutOfRange { position: p, len })
            }
        })
        .collect()
}

/// Range-checked, sorted and de-duplicated positions
fn distinct_positions(positions: &[usize], len: usize) -> RsResult<Vec<usize>> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if let Some(&last) = sorted.last() {
        if last >= len {
            return Err(RsError::PositionOutOfRange {
                position: last,
                len,
            });
        }
    }
    Ok(sorted)
}

/// Left-pad a shortened remainder back to exactly `enc_len` parity symbols
fn fit_parity(remainder: &[Element], enc_len: usize) -> Vec<Element> {
    if remainder.len() >= enc_len {
        remainder[remainder.len() - enc_len..].to_vec()
    } else {
        let mut parity = vec![0; enc_len - remainder.len()];
        parity.extend_from_slice(remainder);
        parity
    }
}
