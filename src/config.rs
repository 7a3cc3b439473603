//! Execution configuration for the codec

/// How block-level encode/decode work is scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Worker threads of a pool owned by the codec (0 = rayon's global pool)
    pub threads: usize,
    /// Whether independent blocks are processed in parallel
    pub parallel: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Global pool, sized to the CPU cores
            parallel: true,
        }
    }
}

impl CodecConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Single-threaded, blocks processed in order
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches
            .get_one::<String>("threads")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        Self::new(threads, parallel)
    }
}
