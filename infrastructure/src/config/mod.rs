//! Configuration file loading for pasalacabra
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `PASALACABRA_*` environment variables
//! 2. Legacy variables (`SET_PATH`, `OPENAI_MODEL`, `OPENAI_KEY`)
//! 3. `--config <path>` specified file
//! 4. Project root: `./pasalacabra.toml` or `./.pasalacabra.toml`
//! 5. Global: `~/.config/pasalacabra/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_SET_PATH, FileConfig, FileGameConfig, FileGenerationConfig,
    FileLanguage, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
