pub mod parser;

pub use parser::{parse_invocation, ArgsError, Flag, IgnoredToken, Invocation, Origin};
