//! Engine-wide configuration knobs (SPEC_FULL ambient stack).
//!
//! The core exposes a deliberately small surface to its surrounding shell:
//! the identification strings for the UCI `uci` handshake (§6) and the
//! magic-number search retry budget (§4.3: "give up after a large budget
//! ... and report failure"). There is no file-based or environment-variable
//! configuration (§6: "No persisted state, no environment variables, no
//! on-disk format") — `Config::default()` is the only constructor, mirroring
//! the teacher's preference for compile-time constants over runtime
//! configuration.

/// Default magic-number search attempt budget per square (§4.3).
pub const DEFAULT_MAGIC_SEARCH_BUDGET: u32 = 10_000_000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Reported by `id name` in the UCI handshake.
    pub engine_name: String,
    /// Reported by `id author` in the UCI handshake.
    pub engine_author: String,
    /// Attempts per square before `MagicTables::search` gives up (§4.3, §7
    /// "Magic search failure").
    pub magic_search_budget: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine_name: "masca".to_string(),
            engine_author: "masca contributors".to_string(),
            magic_search_budget: DEFAULT_MAGIC_SEARCH_BUDGET,
        }
    }
}
