use clap::ValueEnum;
use kiln_config::Mode;

/// Build mode override
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Debuggable output with source maps
    #[value(name = "development")]
    Development,

    /// Minified output with production-only plugins
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
