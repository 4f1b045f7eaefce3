use std::env;

use anyhow::{anyhow, Result};

/// How the binary reports the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Final snapshot as one JSON document.
    Json,
}

impl OutputFormat {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub color: bool,
    /// Scripted balls; `None` means read interactively.
    pub rolls: Option<Vec<i32>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            rolls: None,
        }
    }
}

impl CliConfig {
    /// Build from the process environment and arguments (program name
    /// excluded).
    pub fn from_env(args: &[String]) -> Result<Self> {
        let lookup = |key: &str| env::var(key).ok();
        Self::from_sources(args, lookup)
    }

    /// Environment provides defaults (`BOWLING_FORMAT`, `BOWLING_COLOR`,
    /// `NO_COLOR`); arguments override them.
    pub fn from_sources<F>(args: &[String], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("BOWLING_FORMAT") {
            config.format = OutputFormat::from_str(&v)
                .ok_or_else(|| anyhow!("invalid BOWLING_FORMAT value: {}", v))?;
        }
        if let Some(v) = lookup("BOWLING_COLOR") {
            config.color = parse_flag(&v)
                .ok_or_else(|| anyhow!("invalid BOWLING_COLOR value: {}", v))?;
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--json" => config.format = OutputFormat::Json,
                "--no-color" => config.color = false,
                "--rolls" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --rolls"))?;
                    config.rolls = Some(parse_rolls(v)?);
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        Ok(config)
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `10,7,3,...` into raw pin counts. Range checks are left to the game.
pub fn parse_rolls(v: &str) -> Result<Vec<i32>> {
    v.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| anyhow!("invalid pin count in --rolls: {}", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_env_or_args() {
        let config = CliConfig::from_sources(&[], |_| None).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn env_then_args() {
        let env = |k: &str| match k {
            "BOWLING_FORMAT" => Some("json".to_string()),
            "BOWLING_COLOR" => Some("off".to_string()),
            _ => None,
        };
        let config = CliConfig::from_sources(&args(&["--rolls", "10, 7,3"]), env).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
        assert_eq!(config.rolls, Some(vec![10, 7, 3]));
    }

    #[test]
    fn no_color_env() {
        let env = |k: &str| (k == "NO_COLOR").then(|| "1".to_string());
        assert!(!CliConfig::from_sources(&[], env).unwrap().color);
    }

    #[test]
    fn output_format_names() {
        assert_eq!(OutputFormat::from_str(" JSON "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("yaml"), None);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(CliConfig::from_sources(&args(&["--bogus"]), |_| None).is_err());
        assert!(CliConfig::from_sources(&args(&["--rolls"]), |_| None).is_err());
        assert!(CliConfig::from_sources(&args(&["--rolls", "1,x"]), |_| None).is_err());
        let env = |k: &str| (k == "BOWLING_FORMAT").then(|| "xml".to_string());
        assert!(CliConfig::from_sources(&[], env).is_err());
    }
}
