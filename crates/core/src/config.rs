use std::env;

use crate::timer::{BREAK_DURATION_SECS, FOCUS_DURATION_SECS};

/// Durations that shape a study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyConfig {
    pub focus_secs: u32,
    pub break_secs: u32,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            focus_secs: FOCUS_DURATION_SECS,
            break_secs: BREAK_DURATION_SECS,
        }
    }
}

impl StudyConfig {
    /// Read `SYLLABUS_FOCUS_SECS` and `SYLLABUS_BREAK_SECS`, keeping the
    /// defaults for missing or non-positive values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            focus_secs: parse_positive(env::var("SYLLABUS_FOCUS_SECS").ok())
                .unwrap_or(defaults.focus_secs),
            break_secs: parse_positive(env::var("SYLLABUS_BREAK_SECS").ok())
                .unwrap_or(defaults.break_secs),
        }
    }

    #[must_use]
    pub fn with_focus_secs(mut self, secs: u32) -> Self {
        if secs > 0 {
            self.focus_secs = secs;
        }
        self
    }

    #[must_use]
    pub fn with_break_secs(mut self, secs: u32) -> Self {
        if secs > 0 {
            self.break_secs = secs;
        }
        self
    }
}

/// Parse a strictly positive integer.
#[must_use]
pub fn parse_positive(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_thirty_and_five_minutes() {
        let config = StudyConfig::default();
        assert_eq!(config.focus_secs, 1800);
        assert_eq!(config.break_secs, 300);
    }

    #[test]
    fn parse_positive_rejects_zero_and_garbage() {
        assert_eq!(parse_positive(Some(" 90 ".into())), Some(90));
        assert_eq!(parse_positive(Some("0".into())), None);
        assert_eq!(parse_positive(Some("-3".into())), None);
        assert_eq!(parse_positive(Some("abc".into())), None);
        assert_eq!(parse_positive(None), None);
    }

    #[test]
    fn builders_ignore_zero() {
        let config = StudyConfig::default().with_focus_secs(0).with_break_secs(60);
        assert_eq!(config.focus_secs, 1800);
        assert_eq!(config.break_secs, 60);
    }
}
