use serde::{Deserialize, Serialize};

/// A country in the question pool: display name plus the ISO 3166-1 alpha-2
/// code its flag image is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySpec {
    pub name: String,
    pub code: String,
}

impl CountrySpec {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// Data-driven configuration for the quiz: which countries are in play.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Question pool. Display names must be unique.
    pub countries: Vec<CountrySpec>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countries: vec![
                CountrySpec::new("United States", "us"),
                CountrySpec::new("United Kingdom", "gb"),
                CountrySpec::new("Canada", "ca"),
                CountrySpec::new("Japan", "jp"),
                CountrySpec::new("Australia", "au"),
                CountrySpec::new("Germany", "de"),
                CountrySpec::new("France", "fr"),
                CountrySpec::new("Italy", "it"),
                CountrySpec::new("Brazil", "br"),
                CountrySpec::new("India", "in"),
            ],
        }
    }
}

impl QuizConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("FLAGDASH_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/flagdash.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_matches_shipped_set() {
        let config = QuizConfig::default();
        assert_eq!(config.countries.len(), 10);
        assert!(
            config
                .countries
                .iter()
                .any(|c| c.name == "Japan" && c.code == "jp")
        );
    }

    #[test]
    fn default_names_are_unique() {
        let config = QuizConfig::default();
        let mut names: Vec<&str> = config.countries.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), config.countries.len());
    }

    #[test]
    fn parses_custom_pool_from_toml() {
        let config: QuizConfig = toml::from_str(
            r#"
            [[countries]]
            name = "Finland"
            code = "fi"

            [[countries]]
            name = "Norway"
            code = "no"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.countries.len(), 2);
        assert_eq!(config.countries[0], CountrySpec::new("Finland", "fi"));
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: QuizConfig = toml::from_str("").expect("valid config");
        assert_eq!(config.countries, QuizConfig::default().countries);
    }
}
