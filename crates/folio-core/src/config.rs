//! Configuration management for folio.
//!
//! Loads configuration from `${FOLIO_HOME}/config.toml` with sensible defaults.
//! The defaults describe a complete sample portfolio, so `folio` runs without
//! any config file at all.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::typewriter::{PhraseList, Timings};

/// Returns the default config template with comments.
///
/// Embedded from `default_config.toml` at compile time; `config init`
/// writes it verbatim.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for folio configuration and logs.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)
    //! 3. ./.folio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Opened by the "Download CV" hero button.
    pub resume_url: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkConfig>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Avery Quinn".to_string(),
            tagline: "Hi there, welcome to my corner of the internet.".to_string(),
            description: "I design and build fast, accessible web applications, from \
                          pixel-perfect interfaces to the APIs and databases behind them."
                .to_string(),
            resume_url: Some("https://example.com/avery-quinn-cv.pdf".to_string()),
            email: Some("hello@example.com".to_string()),
            links: vec![
                LinkConfig {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                LinkConfig {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/example".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

/// Typewriter headline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Phrases typed in order, looping forever. Must not be empty.
    pub phrases: Vec<String>,
    pub typing_interval_ms: u64,
    pub hold_ms: u64,
    pub gap_ms: u64,
    pub startup_delay_ms: u64,
    /// Fraction of the hero that must be on screen to re-arm the typewriter.
    pub visibility_threshold: f32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            phrases: vec![
                "Creative Full-Stack Developer".to_string(),
                "Innovative Frontend Specialist".to_string(),
                "Reliable Backend Engineer".to_string(),
            ],
            typing_interval_ms: timings.typing_interval.as_millis() as u64,
            hold_ms: timings.hold.as_millis() as u64,
            gap_ms: timings.gap.as_millis() as u64,
            startup_delay_ms: timings.startup_delay.as_millis() as u64,
            visibility_threshold: 0.5,
        }
    }
}

impl TypewriterConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            typing_interval: Duration::from_millis(self.typing_interval_ms),
            hold: Duration::from_millis(self.hold_ms),
            gap: Duration::from_millis(self.gap_ms),
            startup_delay: Duration::from_millis(self.startup_delay_ms),
        }
    }

    /// Builds the phrase list.
    ///
    /// # Errors
    /// Returns an error if no phrases are configured.
    pub fn phrase_list(&self) -> Result<PhraseList> {
        PhraseList::new(self.phrases.iter().cloned())
            .context("typewriter.phrases must contain at least one phrase")
    }
}

/// Fade-in settings for the hero elements and page sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be on screen before it fades in.
    pub threshold: f32,
    /// How long a revealed element stays dimmed before it is fully shown.
    pub fade_ms: u64,
    /// Delay before the first hero element appears.
    pub stagger_base_ms: u64,
    /// Extra delay for each following hero element.
    pub stagger_step_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            fade_ms: 300,
            stagger_base_ms: 500,
            stagger_step_ms: 200,
        }
    }
}

/// Responsive layout settings, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Below this width the nav collapses into a menu toggle.
    pub mobile_breakpoint: u16,
    /// From this width the carousel shows three slides.
    pub wide_breakpoint: u16,
    /// Rows before a section's top at which its nav link lights up.
    pub highlight_offset_rows: usize,
    pub min_width: u16,
    pub min_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 80,
            wide_breakpoint: 120,
            highlight_offset_rows: 3,
            min_width: 40,
            min_height: 12,
        }
    }
}

/// One about-section tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub intro: String,
    pub tabs: Vec<TabConfig>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            intro: "I enjoy turning complex problems into simple, friendly interfaces."
                .to_string(),
            tabs: vec![
                TabConfig {
                    title: "Experience".to_string(),
                    lines: vec![
                        "2022 - now   Senior Full-Stack Developer, Brightline Studio".to_string(),
                        "2019 - 2022  Frontend Engineer, Northwind Labs".to_string(),
                        "2017 - 2019  Junior Web Developer, Pixel & Co".to_string(),
                    ],
                },
                TabConfig {
                    title: "Education".to_string(),
                    lines: vec![
                        "2013 - 2017  BSc Computer Science, State University".to_string(),
                        "2020         Certified Cloud Practitioner".to_string(),
                    ],
                },
            ],
        }
    }
}

/// One skills-carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Duration of a slide change; navigation is locked meanwhile.
    pub transition_ms: u64,
    pub slides: Vec<SlideConfig>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        let slide = |title: &str, items: &[&str]| SlideConfig {
            title: title.to_string(),
            items: items.iter().map(|s| (*s).to_string()).collect(),
        };
        Self {
            transition_ms: 300,
            slides: vec![
                slide("Frontend", &["TypeScript", "React", "CSS / Tailwind"]),
                slide("Backend", &["Rust", "Node.js", "PostgreSQL"]),
                slide("Tooling", &["Git", "Docker", "CI/CD"]),
                slide("Design", &["Figma", "Design systems", "Accessibility"]),
                slide("Cloud", &["AWS", "Terraform", "Observability"]),
            ],
        }
    }
}

/// Log file settings (see `logging`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Filter directive, e.g. `info` or `folio_core=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub typewriter: TypewriterConfig,
    pub reveal: RevealConfig,
    pub layout: LayoutConfig,
    pub about: AboutConfig,
    pub skills: SkillsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.typewriter.phrases.is_empty() {
            bail!("typewriter.phrases must contain at least one phrase");
        }
        if self.typewriter.typing_interval_ms == 0 {
            bail!("typewriter.typing_interval_ms must be greater than 0");
        }
        for (name, value) in [
            ("typewriter.visibility_threshold", self.typewriter.visibility_threshold),
            ("reveal.threshold", self.reveal.threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{name} must be between 0 and 1 (got {value})");
            }
        }
        if self.layout.wide_breakpoint < self.layout.mobile_breakpoint {
            bail!("layout.wide_breakpoint must not be below layout.mobile_breakpoint");
        }
        Ok(())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Serializes the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    /// The embedded template must parse to exactly the Rust defaults.
    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[typewriter]\nphrases = [\"Rustacean\"]\nhold_ms = 2000\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.typewriter.phrases, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert_eq!(config.typewriter.typing_interval_ms, 100);
        assert_eq!(config.profile, ProfileConfig::default());
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[typewriter]\nphrases = []\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("at least one phrase"));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = Config::default();
        config.reveal.threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::init(&path).unwrap();
        assert!(path.exists());
        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_timings_from_config() {
        let config = TypewriterConfig {
            typing_interval_ms: 40,
            hold_ms: 1000,
            gap_ms: 250,
            startup_delay_ms: 0,
            ..Default::default()
        };
        let timings = config.timings();
        assert_eq!(timings.typing_interval, Duration::from_millis(40));
        assert_eq!(timings.hold, Duration::from_millis(1000));
        assert_eq!(timings.gap, Duration::from_millis(250));
        assert_eq!(timings.startup_delay, Duration::ZERO);
    }

    #[test]
    fn test_to_toml_roundtrips() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
