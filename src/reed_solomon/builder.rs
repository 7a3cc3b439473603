//! Builder for Reed-Solomon codecs
//!
//! Collects field and block parameters, falling back to GF(2^8) with
//! `alpha = 2`, modulus 0x11D, ten parity symbols and a message length of
//! `cap - enc_len`:
//!
//! ```
//! use rserasure::reed_solomon::ReedSolomonBuilder;
//!
//! let codec = ReedSolomonBuilder::new().with_parity_len(9).build().unwrap();
//! assert_eq!(codec.msg_len(), 246);
//! assert_eq!(codec.block_len(), 255);
//! ```

use super::codec::ReedSolomonCodec;
use super::error::RsResult;
use super::galois::{
    GaloisField, DEFAULT_ALPHA, DEFAULT_POWER, DEFAULT_PRIME, DEFAULT_PRIM_POLY,
};
use crate::config::CodecConfig;
use std::sync::Arc;

/// Default number of parity symbols per block
pub const DEFAULT_PARITY_LEN: usize = 10;

/// Reed-Solomon codec builder
#[derive(Debug, Clone)]
pub struct ReedSolomonBuilder {
    msg_len: Option<usize>,
    enc_len: usize,
    prime: u32,
    power: u32,
    alpha: u32,
    prim_poly: u32,
    field: Option<Arc<GaloisField>>,
    config: CodecConfig,
}

impl Default for ReedSolomonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomonBuilder {
    pub fn new() -> Self {
        Self {
            msg_len: None,
            enc_len: DEFAULT_PARITY_LEN,
            prime: DEFAULT_PRIME,
            power: DEFAULT_POWER,
            alpha: DEFAULT_ALPHA,
            prim_poly: DEFAULT_PRIM_POLY,
            field: None,
            config: CodecConfig::default(),
        }
    }

    /// Number of parity symbols per block
    pub fn with_parity_len(mut self, enc_len: usize) -> Self {
        self.enc_len = enc_len;
        self
    }

    /// Message length, must exceed the parity length (default: field cap minus parity)
    pub fn with_message_len(mut self, msg_len: usize) -> Self {
        self.msg_len = Some(msg_len);
        self
    }

    /// Field parameters GF(prime^power), generator `alpha`, modulus `prim_poly`
    pub fn with_field_params(
        mut self,
        prime: u32,
        power: u32,
        alpha: u32,
        prim_poly: u32,
    ) -> Self {
        self.prime = prime;
        self.power = power;
        self.alpha = alpha;
        self.prim_poly = prim_poly;
        self.field = None;
        self
    }

    /// Reuse an already constructed field instead of building tables
    pub fn with_field(mut self, field: Arc<GaloisField>) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Read codec parameters from parsed command-line arguments
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let get = |name: &str| matches.get_one::<u32>(name).copied();

        let mut builder = Self::new().with_config(CodecConfig::from_args(matches));
        if let Some(enc_len) = matches.get_one::<usize>("parity") {
            builder = builder.with_parity_len(*enc_len);
        }
        if let Some(msg_len) = matches.get_one::<usize>("msg_len") {
            builder = builder.with_message_len(*msg_len);
        }
        builder.with_field_params(
            get("prime").unwrap_or(DEFAULT_PRIME),
            get("power").unwrap_or(DEFAULT_POWER),
            get("alpha").unwrap_or(DEFAULT_ALPHA),
            get("prim_poly").unwrap_or(DEFAULT_PRIM_POLY),
        )
    }

    /// Build the field (unless one was supplied) and the codec
    pub fn build(self) -> RsResult<ReedSolomonCodec> {
        let field = match self.field {
            Some(field) => field,
            None => Arc::new(GaloisField::new(
                self.prime,
                self.power,
                self.alpha,
                self.prim_poly,
            )?),
        };
        let msg_len = self
            .msg_len
            .unwrap_or_else(|| field.cap().saturating_sub(self.enc_len));

        ReedSolomonCodec::from_parts(msg_len, self.enc_len, field, self.config)
    }
}
