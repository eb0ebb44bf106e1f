//! Command Grammar
//!
//! Parses one textual command request into a [`MissionCommand`]. The
//! scheduler only consumes the structured form, so the grammar can be
//! tested on its own.
//!
//! # Grammar
//!
//! Comma separated tokens, `verb[,args...]`, with an optional leading `task`
//! token as sent over the remote link (`task,land,270`).
//!
//! | Verb         | Args          | Command                      |
//! |--------------|---------------|------------------------------|
//! | `home`       | none          | [`MissionCommand::Home`]     |
//! | `circle`     | none          | circle current position      |
//! | `circle`     | `lon,lat`     | circle given coordinates     |
//! | `idle`       | none          | [`MissionCommand::Idle`]     |
//! | `resume`     | none          | [`MissionCommand::Resume`]   |
//! | `land`       | none          | land into the wind           |
//! | `land`       | `heading`     | land on the given heading    |
//! | `preflight`  | `duration`    | [`MissionCommand::Preflight`]|
//! | `calibrate`  | none          | [`MissionCommand::Calibrate`]|
//! | `route`      | none          | [`MissionCommand::Route`]    |
//! | `parametric` | none          | [`MissionCommand::Parametric`]|
//! | `pop`        | none          | [`MissionCommand::Pop`]      |
//!
//! # Example
//!
//! ```
//! use pico_mission_core::command::{parse_command, MissionCommand};
//!
//! assert_eq!(parse_command("task,home"), Ok(MissionCommand::Home));
//! assert_eq!(
//!     parse_command("land,270"),
//!     Ok(MissionCommand::Land { heading_deg: Some(270.0) })
//! );
//! assert!(parse_command("bogus,verb").is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use heapless::Vec;

use crate::traits::GeoPoint;

/// Maximum tokens accepted in one command (including the optional prefix)
pub const MAX_COMMAND_TOKENS: usize = 8;

/// Remote-link framing token stripped before the verb
const COMMAND_PREFIX: &str = "task";

/// Structured mission command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionCommand {
    /// Circle the home position
    Home,
    /// Circle a target; `None` means the current vehicle position
    Circle { target: Option<GeoPoint> },
    /// Switch to the idle task
    Idle,
    /// Drop an interrupting circle or landing and resume the previous task
    Resume,
    /// Land; `None` heading means land into the wind
    Land { heading_deg: Option<f32> },
    /// Run the preflight task for the given duration
    Preflight { duration_sec: f32 },
    Calibrate,
    Route,
    Parametric,
    /// Unconditionally retire the front task
    Pop,
}

/// Command grammar errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// No verb present
    Empty,
    /// Verb not recognized
    UnknownVerb,
    /// Known verb with an unsupported number of arguments
    BadArity,
    /// Numeric argument did not parse or was not finite
    BadNumber,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownVerb => write!(f, "unknown verb"),
            CommandError::BadArity => write!(f, "wrong number of arguments"),
            CommandError::BadNumber => write!(f, "invalid numeric argument"),
        }
    }
}

/// Parse one command string
pub fn parse_command(text: &str) -> Result<MissionCommand, CommandError> {
    let mut tokens: Vec<&str, MAX_COMMAND_TOKENS> = Vec::new();
    for token in text.split(',') {
        tokens.push(token.trim()).map_err(|_| CommandError::BadArity)?;
    }

    let tokens = match tokens.as_slice() {
        [COMMAND_PREFIX, rest @ ..] => rest,
        all => all,
    };
    let (verb, args) = tokens.split_first().ok_or(CommandError::Empty)?;

    match (*verb, args) {
        ("home", []) => Ok(MissionCommand::Home),
        ("circle", []) => Ok(MissionCommand::Circle { target: None }),
        ("circle", [lon, lat]) => Ok(MissionCommand::Circle {
            target: Some(GeoPoint::new(parse_number(lon)?, parse_number(lat)?)),
        }),
        ("idle", []) => Ok(MissionCommand::Idle),
        ("resume", []) => Ok(MissionCommand::Resume),
        ("land", []) => Ok(MissionCommand::Land { heading_deg: None }),
        ("land", [heading]) => Ok(MissionCommand::Land {
            heading_deg: Some(parse_number(heading)?),
        }),
        ("preflight", [duration]) => Ok(MissionCommand::Preflight {
            duration_sec: parse_number(duration)?,
        }),
        ("calibrate", []) => Ok(MissionCommand::Calibrate),
        ("route", []) => Ok(MissionCommand::Route),
        ("parametric", []) => Ok(MissionCommand::Parametric),
        ("pop", []) => Ok(MissionCommand::Pop),
        ("", _) => Err(CommandError::Empty),
        (
            "home" | "circle" | "idle" | "resume" | "land" | "preflight" | "calibrate" | "route"
            | "parametric" | "pop",
            _,
        ) => Err(CommandError::BadArity),
        _ => Err(CommandError::UnknownVerb),
    }
}

/// Finite number or [`CommandError::BadNumber`]
trait Finite {
    fn finite(self) -> bool;
}

impl Finite for f32 {
    fn finite(self) -> bool {
        self.is_finite()
    }
}

impl Finite for f64 {
    fn finite(self) -> bool {
        self.is_finite()
    }
}

fn parse_number<T: FromStr + Finite + Copy>(token: &str) -> Result<T, CommandError> {
    match token.parse::<T>() {
        Ok(value) if value.finite() => Ok(value),
        _ => Err(CommandError::BadNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse_command("home"), Ok(MissionCommand::Home));
        assert_eq!(parse_command("idle"), Ok(MissionCommand::Idle));
        assert_eq!(parse_command("resume"), Ok(MissionCommand::Resume));
        assert_eq!(parse_command("calibrate"), Ok(MissionCommand::Calibrate));
        assert_eq!(parse_command("route"), Ok(MissionCommand::Route));
        assert_eq!(parse_command("parametric"), Ok(MissionCommand::Parametric));
        assert_eq!(parse_command("pop"), Ok(MissionCommand::Pop));
    }

    #[test]
    fn test_task_prefix_is_optional() {
        assert_eq!(parse_command("task,idle"), Ok(MissionCommand::Idle));
        assert_eq!(
            parse_command("task,preflight,45"),
            Ok(MissionCommand::Preflight { duration_sec: 45.0 })
        );
        assert_eq!(parse_command("task"), Err(CommandError::Empty));
    }

    #[test]
    fn test_circle_with_and_without_coordinates() {
        assert_eq!(
            parse_command("circle"),
            Ok(MissionCommand::Circle { target: None })
        );
        assert_eq!(
            parse_command("circle,-93.1523,45.2184"),
            Ok(MissionCommand::Circle {
                target: Some(GeoPoint::new(-93.1523, 45.2184))
            })
        );
    }

    #[test]
    fn test_land_heading() {
        assert_eq!(
            parse_command("land"),
            Ok(MissionCommand::Land { heading_deg: None })
        );
        assert_eq!(
            parse_command("land,135.5"),
            Ok(MissionCommand::Land {
                heading_deg: Some(135.5)
            })
        );
    }

    #[test]
    fn test_whitespace_around_tokens() {
        assert_eq!(
            parse_command(" circle , 10.0 , 20.0 "),
            Ok(MissionCommand::Circle {
                target: Some(GeoPoint::new(10.0, 20.0))
            })
        );
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(parse_command("bogus,verb"), Err(CommandError::UnknownVerb));
        assert_eq!(parse_command("HOME"), Err(CommandError::UnknownVerb));
    }

    #[test]
    fn test_bad_arity() {
        assert_eq!(parse_command("home,now"), Err(CommandError::BadArity));
        assert_eq!(parse_command("circle,10.0"), Err(CommandError::BadArity));
        assert_eq!(parse_command("preflight"), Err(CommandError::BadArity));
        assert_eq!(parse_command("land,1,2"), Err(CommandError::BadArity));
        assert_eq!(parse_command("pop,1,2,3,4,5,6,7,8,9"), Err(CommandError::BadArity));
    }

    #[test]
    fn test_bad_numbers() {
        assert_eq!(parse_command("land,west"), Err(CommandError::BadNumber));
        assert_eq!(parse_command("circle,abc,1.0"), Err(CommandError::BadNumber));
        assert_eq!(parse_command("preflight,NaN"), Err(CommandError::BadNumber));
        assert_eq!(parse_command("preflight,inf"), Err(CommandError::BadNumber));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command(",home"), Err(CommandError::Empty));
    }
}
