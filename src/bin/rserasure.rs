//! rserasure - encode, erase and restore messages with Reed-Solomon parity
//!
//! Messages and codewords are given either as text (one character per
//! symbol) or as hex (one byte per symbol, fields up to GF(2^8)). Erased
//! symbols are zero, which text output can only show as NUL characters, so
//! erase/decode pipelines should use `--format hex`.

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::debug;
use rserasure::message::{symbols_to_text, text_to_symbols};
use rserasure::reed_solomon::{Element, ReedSolomonBuilder, ReedSolomonCodec};
use rserasure::parse_args;
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Hex,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    let (command, sub) = matches
        .subcommand()
        .context("No subcommand given")?;

    let codec = ReedSolomonBuilder::from_args(sub)
        .build()
        .context("Invalid codec parameters")?;
    let format = match sub.get_one::<String>("format").map(String::as_str) {
        Some("hex") => Format::Hex,
        _ => Format::Text,
    };
    debug!("Using {} worker threads", codec.threads());

    let output = match command {
        "encode" => {
            let input = match sub.get_one::<String>("input") {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path))?,
                None => sub
                    .get_one::<String>("message")
                    .cloned()
                    .context("Message is required")?,
            };
            let symbols = parse_symbols(&input, format, &codec)?;
            codec
                .encode_symbols(&symbols)
                .context("Encoding failed")?
        }
        "erase" => {
            let (symbols, positions) = codeword_and_erasures(sub, format, &codec)?;
            codec
                .erasure_sim(&symbols, &positions)
                .context("Erasure simulation failed")?
        }
        "decode" => {
            let (symbols, positions) = codeword_and_erasures(sub, format, &codec)?;
            codec
                .decode_symbols(&symbols, &positions)
                .context("Decoding failed")?
        }
        other => bail!("Unknown subcommand {}", other),
    };

    if command == "erase" && format == Format::Text && output.contains(&0) {
        eprintln!(
            "Note: erased symbols are printed as NUL characters; use --format hex to pass the result to decode"
        );
    }
    println!("{}", render_symbols(&output, format)?);
    Ok(())
}

fn codeword_and_erasures(
    sub: &ArgMatches,
    format: Format,
    codec: &ReedSolomonCodec,
) -> Result<(Vec<Element>, Vec<usize>)> {
    let codeword = sub
        .get_one::<String>("codeword")
        .context("Codeword is required")?;
    let positions = sub
        .get_many::<usize>("erasures")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    Ok((parse_symbols(codeword, format, codec)?, positions))
}

fn parse_symbols(input: &str, format: Format, codec: &ReedSolomonCodec) -> Result<Vec<Element>> {
    match format {
        Format::Text => {
            text_to_symbols(input, codec.field()).context("Text does not fit the field")
        }
        Format::Hex => {
            if codec.field().power() > 8 {
                bail!(
                    "Hex format needs one byte per symbol, but GF(2^{}) symbols are wider",
                    codec.field().power()
                );
            }
            let bytes = hex::decode(input.trim()).context("Invalid hex input")?;
            Ok(bytes.into_iter().map(Element::from).collect())
        }
    }
}

fn render_symbols(symbols: &[Element], format: Format) -> Result<String> {
    match format {
        Format::Text => symbols_to_text(symbols).context("Output is not representable as text"),
        Format::Hex => {
            let bytes = symbols
                .iter()
                .map(|&s| u8::try_from(s))
                .collect::<std::result::Result<Vec<u8>, _>>()
                .context("Symbol does not fit into a byte")?;
            Ok(hex::encode(bytes))
        }
    }
}
