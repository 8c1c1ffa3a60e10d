pub mod formatter;

pub use formatter::{
    format_breakdown, format_invocation, format_result, format_usage, should_use_colors,
    write_result,
};
