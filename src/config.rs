use clap::Parser;

use crate::data::loader::ResourceLocation;
use crate::i18n::Language;

/// Default catalog path, relative to the application root.
pub const DEFAULT_SOURCE: &str = "csv/Wholesale Products - Sheet.csv";

/// Command-line configuration of the viewer.
#[derive(Debug, Clone, Parser)]
#[command(name = "wholesale-catalog", version, about)]
pub struct ViewerConfig {
    /// Application root: a directory, or an http(s) base URL.
    #[arg(long, env = "CATALOG_ROOT", default_value = ".")]
    pub root: String,

    /// Catalog CSV path relative to the root.
    #[arg(long, env = "CATALOG_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Start with Italian labels.
    #[arg(long, env = "CATALOG_ITALIAN")]
    pub italian: bool,
}

impl ViewerConfig {
    pub fn location(&self) -> Result<ResourceLocation, url::ParseError> {
        ResourceLocation::resolve(&self.root, &self.source)
    }

    pub fn language(&self) -> Language {
        if self.italian {
            Language::Italian
        } else {
            Language::English
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn defaults_point_at_bundled_csv() {
        let cfg = ViewerConfig::try_parse_from(["wholesale-catalog"]).unwrap();
        assert_eq!(cfg.source, DEFAULT_SOURCE);
        assert_eq!(cfg.language(), Language::English);
        assert_eq!(
            cfg.location().unwrap(),
            ResourceLocation::File(PathBuf::from("./csv/Wholesale Products - Sheet.csv"))
        );
    }

    #[test]
    fn url_root_and_language_flags() {
        let cfg = ViewerConfig::try_parse_from([
            "wholesale-catalog",
            "--root",
            "https://shop.example.com",
            "--source",
            "data/list.csv",
            "--italian",
        ])
        .unwrap();
        assert_eq!(cfg.language(), Language::Italian);
        assert_eq!(
            cfg.location().unwrap().to_string(),
            "https://shop.example.com/data/list.csv"
        );
    }
}
