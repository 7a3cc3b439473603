use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Accept decimal or `0x`-prefixed hexadecimal integers
fn parse_int(input: &str) -> Result<u32, String> {
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|e| format!("invalid integer {:?}: {}", input, e))
}

fn erasures_arg() -> Arg {
    Arg::new("erasures")
        .short('x')
        .long("erasures")
        .help("Comma-separated erased positions, counted from 0")
        .value_name("POSITIONS")
        .value_delimiter(',')
        .num_args(1..)
        .value_parser(value_parser!(usize))
        .required(true)
}

fn codeword_arg() -> Arg {
    Arg::new("codeword")
        .help("Encoded message")
        .required(true)
        .index(1)
}

pub fn build_cli() -> Command {
    Command::new("rserasure")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon erasure coding over GF(2^n)")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("parity")
                .short('e')
                .long("parity")
                .help("Parity symbols per block (default: 10)")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("msg_len")
                .short('m')
                .long("msg-len")
                .help("Message length, must exceed parity (default: field size - 1 - parity)")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("prime")
                .long("prime")
                .help("Field characteristic")
                .value_name("P")
                .value_parser(parse_int)
                .default_value("2")
                .global(true),
        )
        .arg(
            Arg::new("power")
                .long("power")
                .help("Field power n of GF(2^n)")
                .value_name("N")
                .value_parser(parse_int)
                .default_value("8")
                .global(true),
        )
        .arg(
            Arg::new("alpha")
                .long("alpha")
                .help("Generator element of the field")
                .value_name("ALPHA")
                .value_parser(parse_int)
                .default_value("2")
                .global(true),
        )
        .arg(
            Arg::new("prim_poly")
                .long("prim-poly")
                .help("Modulus polynomial, decimal or 0x-prefixed")
                .value_name("POLY")
                .value_parser(parse_int)
                .default_value("0x11D")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Representation of messages and codewords")
                .value_parser(["text", "hex"])
                .default_value("text")
                .global(true),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of worker threads for block processing (0 = one per CPU core)")
                .value_name("N")
                .default_value("0")
                .global(true),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Append parity symbols to a message")
                .arg(
                    Arg::new("message")
                        .help("Message to encode")
                        .index(1)
                        .required_unless_present("input")
                        .conflicts_with("input"),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Read the message from a file")
                        .value_name("FILE"),
                ),
        )
        .subcommand(
            Command::new("erase")
                .about("Zero the symbols at the given positions (use --format hex to feed decode)")
                .arg(codeword_arg())
                .arg(erasures_arg()),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Restore erased symbols of an encoded message")
                .arg(codeword_arg())
                .arg(erasures_arg()),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}
