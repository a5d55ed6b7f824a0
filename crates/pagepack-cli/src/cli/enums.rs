use clap::ValueEnum;
use pagepack_config::Mode;

/// Serialization format for `pagepack config`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ConfigFormat {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,

    /// TOML
    #[value(name = "toml")]
    Toml,
}

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Development build with source maps and hot reloading
    #[value(name = "development")]
    Development,

    /// Optimized production build
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
