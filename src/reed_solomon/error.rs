//! Error types for Galois field, polynomial and Reed-Solomon operations

use thiserror::Error;

/// Errors that can occur while building a field or codec, or while encoding and decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Field characteristic is not a prime number
    #[error("Field characteristic {0} is not a prime number")]
    NonPrimeCharacteristic(u32),

    /// Only GF(2^n) fields are implemented
    #[error("Field characteristic {0} is not supported, only GF(2^n) is implemented")]
    UnsupportedCharacteristic(u32),

    /// Field power must be in 1..=16
    #[error("Field power {power} is outside the supported range 1..={max}")]
    InvalidPower { power: u32, max: u32 },

    /// Modulus polynomial is not of degree n
    #[error("Modulus polynomial {prim_poly:#x} is not of degree {power}")]
    InvalidModulus { prim_poly: u32, power: u32 },

    /// Generator element is not a nonzero field element
    #[error("Generator element {alpha} is not a nonzero element of a field with cap {cap}")]
    InvalidAlpha { alpha: u32, cap: u32 },

    /// Generator element cycles before reaching every nonzero element
    #[error(
        "Generator {alpha} and modulus {prim_poly:#x} are not compatible: element {repeated} repeats after {steps} of {cap} steps"
    )]
    IncompatibleGenerator {
        alpha: u32,
        prim_poly: u32,
        repeated: u32,
        steps: usize,
        cap: u32,
    },

    /// Payload block must be longer than the parity block
    #[error("Message length {msg_len} must exceed parity length {enc_len}")]
    MessageLengthTooSmall { msg_len: usize, enc_len: usize },

    /// Payload plus parity does not fit into one codeword block
    #[error("Block of {msg_len} payload and {enc_len} parity symbols exceeds field capacity {cap}")]
    BlockCapacityExceeded {
        msg_len: usize,
        enc_len: usize,
        cap: usize,
    },

    /// Coefficient or scalar is not a field element
    #[error("Value {value} is outside the field range [0, {cap}]")]
    CoefficientOutOfRange { value: u32, cap: u32 },

    /// Erasure position falls outside the message
    #[error("Position {position} is out of range for a message of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    /// Text character cannot be mapped to a field element
    #[error("Character {ch:?} (code point {code}) is outside the field range [0, {cap}]")]
    TextSymbolOutOfRange { ch: char, code: u32, cap: u32 },

    /// Symbol has no character representation
    #[error("Symbol {0} cannot be represented as a character")]
    NotRepresentableAsText(u16),

    /// Division by the additive identity
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// Synthetic division needs a divisor with leading coefficient 1
    #[error("Divisor is not monic: leading coefficient is {leading}")]
    NonMonicDivisor { leading: u16 },

    /// Synthetic division needs a dividend at least as long as the divisor
    #[error("Dividend of length {dividend} is shorter than divisor of length {divisor}")]
    DividendTooShort { dividend: usize, divisor: usize },

    /// Operation is undefined on a polynomial without coefficients
    #[error("Polynomial has no coefficients")]
    EmptyPolynomial,

    /// More erasures than parity symbols
    #[error("Cannot decode: {count} erasures but only {max} parity symbols")]
    TooManyErasures { count: usize, max: usize },

    /// More erasures inside one block than parity symbols
    #[error("Too many erasures in block {block}: {count} erasures but only {max} parity symbols")]
    TooManyErasuresInBlock {
        block: usize,
        count: usize,
        max: usize,
    },

    /// Worker pool for block-parallel processing could not be created
    #[error("Failed to build a pool of {threads} worker threads: {reason}")]
    ThreadPool { threads: usize, reason: String },
}

/// Result type for Reed-Solomon operations
pub type RsResult<T> = std::result::Result<T, RsError>;
