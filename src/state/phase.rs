//! Phase enumeration for the Pomodoro cycle

use std::{fmt, str::FromStr};

/// One of the three mutually exclusive countdown modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// All phases in tab order
    pub const ALL: [Phase; 3] = [Phase::Work, Phase::ShortBreak, Phase::LongBreak];

    /// Position of the phase in tab order, used to key per-phase records
    pub fn index(self) -> usize {
        match self {
            Phase::Work => 0,
            Phase::ShortBreak => 1,
            Phase::LongBreak => 2,
        }
    }

    /// Tab label shown by the surface
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Pomodoro",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "p" | "w" | "work" | "pomodoro" => Ok(Phase::Work),
            "2" | "s" | "short" | "short-break" | "shortbreak" => Ok(Phase::ShortBreak),
            "3" | "l" | "long" | "long-break" | "longbreak" => Ok(Phase::LongBreak),
            other => Err(format!("Unknown phase: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_tab_order() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Pomodoro".parse::<Phase>(), Ok(Phase::Work));
        assert_eq!("2".parse::<Phase>(), Ok(Phase::ShortBreak));
        assert_eq!("s".parse::<Phase>(), Ok(Phase::ShortBreak));
        assert_eq!(" long ".parse::<Phase>(), Ok(Phase::LongBreak));
        assert!("lunch".parse::<Phase>().is_err());
    }

    #[test]
    fn labels_match_tabs() {
        assert_eq!(Phase::Work.to_string(), "Pomodoro");
        assert_eq!(Phase::ShortBreak.to_string(), "Short Break");
        assert_eq!(Phase::LongBreak.to_string(), "Long Break");
    }
}
