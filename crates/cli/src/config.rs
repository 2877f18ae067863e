// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use derive_builder::Builder;
use log::LevelFilter;
use std::path::PathBuf;

pub use self::ConfigBuilderError as ConfigError;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub paths: Vec<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub longest_word: bool,
    #[builder(default)]
    pub strict: bool,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec![],
            format: OutputFormat::default(),
            longest_word: false,
            strict: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .paths(args.paths)
            .format(args.output.format)
            .longest_word(args.output.longest_word)
            .strict(args.behavior.strict)
            .log_level(level_from_verbosity(args.behavior.verbose))
            .build()
    }
}

/// `-v` の回数をログレベルに変換
pub const fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
