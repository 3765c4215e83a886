use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The matter state of an element or compound at standard conditions.
///
/// Determines secondary derived items (solids may get ingots) and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MatterState {
    Solid,
    Liquid,
    Gas,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("unknown matter state '{0}', expected one of solid, liquid, gas")]
pub struct ParseMatterStateError(pub String);

impl FromStr for MatterState {
    type Err = ParseMatterStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Ok(MatterState::Solid),
            "liquid" => Ok(MatterState::Liquid),
            "gas" => Ok(MatterState::Gas),
            _ => Err(ParseMatterStateError(s.to_string())),
        }
    }
}

impl TryFrom<String> for MatterState {
    type Error = ParseMatterStateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for MatterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MatterState::Solid => "solid",
                MatterState::Liquid => "liquid",
                MatterState::Gas => "gas",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_states_case_insensitively() {
        assert_eq!("solid".parse::<MatterState>(), Ok(MatterState::Solid));
        assert_eq!("LIQUID".parse::<MatterState>(), Ok(MatterState::Liquid));
        assert_eq!("Gas".parse::<MatterState>(), Ok(MatterState::Gas));
    }

    #[test]
    fn rejects_unknown_state() {
        let err = "plasma".parse::<MatterState>().unwrap_err();
        assert_eq!(err, ParseMatterStateError("plasma".to_string()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for state in [MatterState::Solid, MatterState::Liquid, MatterState::Gas] {
            assert_eq!(state.to_string().parse::<MatterState>(), Ok(state));
        }
    }
}
