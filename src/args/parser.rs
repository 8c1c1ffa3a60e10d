use std::ffi::OsStr;
use std::fmt;

use thiserror::Error;

use crate::scoring::{BattleRecord, ScoringParams};

/// Names of the required positional arguments, in order.
pub const POSITIONAL_NAMES: [&str; 3] = ["twins", "tpoints", "mdamage"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("expected 3 positional arguments, got {found}")]
    Usage { found: usize },
    // User-facing text is fixed; `name`/`value` are for verbose output
    #[error("Invalid integer arguments.")]
    InvalidInteger { name: &'static str, value: String },
}

/// Optional flags recognized after the positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Multi,
    Divi,
    Plevel,
}

impl Flag {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "--multi" => Some(Flag::Multi),
            "--divi" => Some(Flag::Divi),
            "--plevel" => Some(Flag::Plevel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Multi => "--multi",
            Flag::Divi => "--divi",
            Flag::Plevel => "--plevel",
        }
    }
}

/// Where a parameter value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Default,
    Flag,
}

/// A token the scanner dropped without failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredToken {
    /// Neither a recognized flag nor a flag value
    Unrecognized(String),
    /// Flag whose value is not an integer; the value token is consumed
    BadFlagValue { flag: Flag, value: String },
    /// Flag in last position with nothing after it
    MissingFlagValue(Flag),
}

impl fmt::Display for IgnoredToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoredToken::Unrecognized(token) => write!(f, "unrecognized token '{}'", token),
            IgnoredToken::BadFlagValue { flag, value } => {
                write!(f, "{} value '{}' is not an integer", flag.as_str(), value)
            }
            IgnoredToken::MissingFlagValue(flag) => write!(f, "{} has no value", flag.as_str()),
        }
    }
}

/// Everything one run of the calculator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub record: BattleRecord,
    pub params: ScoringParams,
    pub plevel: Option<i64>,
    pub multi_origin: Origin,
    pub divi_origin: Origin,
    pub ignored: Vec<IgnoredToken>,
}

/// Parse the arguments that follow the program name.
///
/// The first three tokens are `twins`, `tpoints` and `mdamage`. After them,
/// `--multi`, `--divi` and `--plevel` each take the next token as their value.
/// A value that is not an integer is skipped and the earlier value kept, a flag
/// with no following token is skipped, and any other token is skipped.
pub fn parse_invocation<S: AsRef<OsStr>>(args: &[S]) -> Result<Invocation, ArgsError> {
    if args.len() < POSITIONAL_NAMES.len() {
        return Err(ArgsError::Usage { found: args.len() });
    }

    let twins = parse_positional(args, 0)?;
    let tpoints = parse_positional(args, 1)?;
    let mdamage = parse_positional(args, 2)?;

    let mut params = ScoringParams::default();
    let mut plevel = None;
    let mut multi_origin = Origin::Default;
    let mut divi_origin = Origin::Default;
    let mut ignored = Vec::new();

    let mut i = POSITIONAL_NAMES.len();
    while i < args.len() {
        let token = args[i].as_ref();
        let Some(flag) = token.to_str().and_then(Flag::from_token) else {
            ignored.push(IgnoredToken::Unrecognized(token.to_string_lossy().into_owned()));
            i += 1;
            continue;
        };

        let Some(raw) = args.get(i + 1).map(|s| s.as_ref()) else {
            ignored.push(IgnoredToken::MissingFlagValue(flag));
            i += 1;
            continue;
        };

        match raw.to_str().and_then(|s| s.parse::<i64>().ok()) {
            Some(value) => match flag {
                Flag::Multi => {
                    params.multi = value;
                    multi_origin = Origin::Flag;
                }
                Flag::Divi => {
                    params.divi = value;
                    divi_origin = Origin::Flag;
                }
                Flag::Plevel => plevel = Some(value),
            },
            None => ignored.push(IgnoredToken::BadFlagValue {
                flag,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
        i += 2;
    }

    Ok(Invocation {
        record: BattleRecord {
            twins,
            tpoints,
            mdamage,
        },
        params,
        plevel,
        multi_origin,
        divi_origin,
        ignored,
    })
}

fn parse_positional<S: AsRef<OsStr>>(args: &[S], index: usize) -> Result<i64, ArgsError> {
    let raw = args[index].as_ref();
    raw.to_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ArgsError::InvalidInteger {
            name: POSITIONAL_NAMES[index],
            value: raw.to_string_lossy().into_owned(),
        })
}
