//! Reed-Solomon Erasure Coding Module
//!
//! This module provides systematic Reed-Solomon encoding and erasure decoding
//! over binary extension fields GF(2^n), GF(2^8) by default.
//!
//! Layers, leaves first: [`galois`] (field tables), [`polynomial`]
//! (coefficient arithmetic) and [`codec`] (encode/decode).

pub mod builder;
pub mod codec;
pub mod error;
pub mod galois;
pub mod polynomial;

pub use builder::*;
pub use codec::*;
pub use error::*;
pub use galois::*;
pub use polynomial::*;
