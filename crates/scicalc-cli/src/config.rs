//! CLI configuration
//!
//! Defaults, overlaid by an optional YAML file, overlaid by command-line
//! flags.

use crate::error::{CliError, CliResult};
use scicalc::core::AngleMode;
use scicalc::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - engine transitions logged
    Verbose,
    /// Debug - every key logged
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter for this level, used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info,scicalc=debug",
            Self::Debug => "debug,scicalc=trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// Order in which history lines are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryOrder {
    /// Most recent entry first, as the calculator panel shows it
    #[default]
    NewestFirst,
    /// Chronological
    OldestFirst,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Angle mode the engine starts in
    pub angle_mode: AngleMode,
    /// History print order
    pub history_order: HistoryOrder,
    /// Print the memory/mode status line under the display
    pub show_status: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            angle_mode: AngleMode::Radians,
            history_order: HistoryOrder::NewestFirst,
            show_status: true,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> CliResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the initial angle mode
    #[must_use]
    pub const fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Set history print order
    #[must_use]
    pub const fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }

    /// Show or hide the status line
    #[must_use]
    pub const fn with_show_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    /// Engine settings derived from this configuration
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new().with_angle_mode(self.angle_mode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }

        #[test]
        fn test_log_filters() {
            assert_eq!(Verbosity::Quiet.log_filter(), "error");
            assert!(Verbosity::Debug.log_filter().contains("scicalc=trace"));
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_explicit_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CliConfig::new();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.angle_mode, AngleMode::Radians);
            assert_eq!(config.history_order, HistoryOrder::NewestFirst);
            assert!(config.show_status);
        }

        #[test]
        fn test_builder_chain() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_angle_mode(AngleMode::Degrees)
                .with_history_order(HistoryOrder::OldestFirst)
                .with_show_status(false);
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.engine_config().angle_mode, AngleMode::Degrees);
            assert_eq!(config.history_order, HistoryOrder::OldestFirst);
            assert!(!config.show_status);
        }

        #[test]
        fn test_from_yaml_partial() {
            let config = CliConfig::from_yaml_str("angle_mode: degrees\nhistory_order: oldest-first\n")
                .unwrap();
            assert_eq!(config.angle_mode, AngleMode::Degrees);
            assert_eq!(config.history_order, HistoryOrder::OldestFirst);
            assert_eq!(config.verbosity, Verbosity::Normal);
        }

        #[test]
        fn test_from_yaml_empty() {
            assert_eq!(CliConfig::from_yaml_str("").unwrap(), CliConfig::default());
        }

        #[test]
        fn test_from_yaml_invalid_value() {
            let err = CliConfig::from_yaml_str("angle_mode: gradians").unwrap_err();
            assert!(matches!(err, CliError::Yaml(_)));
        }

        #[test]
        fn test_yaml_round_trip() {
            let config = CliConfig::new().with_angle_mode(AngleMode::Degrees);
            let yaml = config.to_yaml().unwrap();
            assert!(yaml.contains("angle_mode: degrees"));
            assert_eq!(CliConfig::from_yaml_str(&yaml).unwrap(), config);
        }

        #[test]
        fn test_load_missing_file() {
            let err = CliConfig::load(Path::new("/nonexistent/scicalc.yaml")).unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }
    }
}
