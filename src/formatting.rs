use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Resolve the mode from the environment, honoring the no-color.org
    /// and CLICOLOR conventions.
    pub fn from_env() -> Self {
        if env::var("NO_COLOR").is_ok() {
            return Self::Never;
        }
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                return Self::Always;
            }
        }
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                return Self::Never;
            }
        }
        Self::Auto
    }

    /// Apply the mode to the global `colored` switch.
    pub fn apply(&self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => colored::control::unset_override(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_modes_case_insensitively() {
        assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("Never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn forced_modes_ignore_the_terminal() {
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
    }
}
