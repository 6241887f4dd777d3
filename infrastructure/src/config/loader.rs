//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "pasalacabra";
const PROJECT_FILES: [&str; 2] = ["pasalacabra.toml", ".pasalacabra.toml"];
const ENV_PREFIX: &str = "PASALACABRA_";

/// Legacy variables kept for existing deployments, mapped to config keys.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("SET_PATH", "output.set_path"),
    ("OPENAI_MODEL", "generation.model"),
    ("OPENAI_KEY", "providers.openai.api_key"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PASALACABRA_*` environment variables (`__` separates sections)
    /// 2. Legacy environment variables (`SET_PATH`, `OPENAI_MODEL`, `OPENAI_KEY`)
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./pasalacabra.toml` or `./.pasalacabra.toml`
    /// 5. Global: `~/.config/pasalacabra/config.toml`
    /// 6. Default values
    ///
    /// CLI flags are applied on top by the binary.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration plus environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(figment: Figment) -> Figment {
        let mut figment = figment;
        for (var, key) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Environment: {}*, SET_PATH, OPENAI_MODEL, OPENAI_KEY", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./pasalacabra.toml or ./.pasalacabra.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load(path: Option<&PathBuf>) -> figment::error::Result<FileConfig> {
        ConfigLoader::load(path).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("pasalacabra"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[generation]
max_passes = 7

[output]
set_path = "public/today.json"
"#,
            )?;
            let path = PathBuf::from("custom.toml");
            let config = load(Some(&path))?;
            assert_eq!(config.generation.max_passes, 7);
            assert_eq!(config.output.set_path, PathBuf::from("public/today.json"));
            assert_eq!(config.generation.model, "gpt-5");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file(".pasalacabra.toml", "[game]\ntopics_per_game = 2\n")?;
            let config = load(None)?;
            assert_eq!(config.game.topics_per_game, 2);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("pasalacabra.toml", "[generation]\nmax_passes = 2\n")?;
            jail.set_env("PASALACABRA_GENERATION__MAX_PASSES", "4");
            let config = load(None)?;
            assert_eq!(config.generation.max_passes, 4);
            Ok(())
        });
    }

    #[test]
    fn test_legacy_env_variables() {
        Jail::expect_with(|jail| {
            jail.set_env("SET_PATH", "legacy/set.json");
            jail.set_env("OPENAI_MODEL", "gpt-5-mini");
            jail.set_env("OPENAI_KEY", "sk-legacy");
            let config = load(None)?;
            assert_eq!(config.output.set_path, PathBuf::from("legacy/set.json"));
            assert_eq!(config.generation.model, "gpt-5-mini");
            assert_eq!(
                config.providers.openai.api_key.as_deref(),
                Some("sk-legacy")
            );
            Ok(())
        });
    }
}
