pub mod args;
pub mod config;
pub mod message;
pub mod reed_solomon;

pub use args::parse_args;
pub use config::CodecConfig;
pub use message::{Message, OutputFormat};
pub use reed_solomon::{
    GaloisField, Polynomials, ReedSolomonBuilder, ReedSolomonCodec, RsError, RsResult,
};
