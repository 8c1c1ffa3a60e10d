use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use tcg_points::args::ArgsError;

// Every failure exits with 1; the names say which path produced it
const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_MATH: i32 = 1;
const EXIT_IO: i32 = 1;

const FLAGS_HELP: &str = "\
Flags after <mdamage>:
  --multi X    Multiplier for wins (default: 3)
  --divi Y     Divisor for points (default: 3)
  --plevel Z   Player level, adds 0.5 points per level (capped at 50)

Flag values that are not integers are ignored, as are unrecognized tokens.";

#[derive(Parser, Debug)]
#[command(name = "tcg-points")]
#[command(about = "Calculate Pokemon TCG Battle Points", long_about = None)]
#[command(version)]
#[command(override_usage = "tcg-points [-v] <twins> <tpoints> <mdamage> [--multi X] [--divi Y] [--plevel Z]")]
#[command(after_help = FLAGS_HELP)]
struct Cli {
    /// Print parameters and the score breakdown to stderr
    #[arg(short, long)]
    verbose: bool,

    /// <twins> Total wins, <tpoints> Total points, <mdamage> Max damage dealt, then flags
    #[arg(
        value_name = "ARGS",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    args: Vec<OsString>,
}

/// clap swallows a `--` seen before the first positional; it is an
/// ordinary token here, so put it back in front.
fn restore_escape(argv: &[OsString], mut args: Vec<OsString>) -> Vec<OsString> {
    let consumed = argv.len().saturating_sub(1 + args.len());
    if argv.iter().skip(1).take(consumed).any(|a| a == "--") {
        args.insert(0, OsString::from("--"));
    }
    args
}

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", e);
                std::process::exit(EXIT_USAGE);
            }
        },
    };

    let args = restore_escape(&argv, cli.args);
    let invocation = match tcg_points::args::parse_invocation(args.as_slice()) {
        Ok(inv) => inv,
        Err(ArgsError::Usage { found }) => {
            let program = argv
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tcg-points".to_string());
            eprintln!("{}", tcg_points::output::format_usage(&program));
            if cli.verbose {
                eprintln!("Got {} positional argument(s)", found);
            }
            std::process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("{}", e);
            if let (true, ArgsError::InvalidInteger { name, value }) = (cli.verbose, &e) {
                eprintln!("  {}: '{}' is not a base-10 integer", name, value);
            }
            std::process::exit(EXIT_USAGE);
        }
    };

    let use_colors = tcg_points::output::should_use_colors();

    if cli.verbose {
        eprintln!(
            "{}",
            tcg_points::output::format_invocation(&invocation, use_colors)
        );
    }

    let result = match tcg_points::scoring::calculate_score(
        &invocation.record,
        &invocation.params,
        invocation.plevel,
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_MATH);
        }
    };

    if cli.verbose {
        eprintln!("Breakdown:");
        eprintln!(
            "{}",
            tcg_points::output::format_breakdown(&result, use_colors)
        );
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = tcg_points::output::write_result(&mut handle, &result.score) {
        eprintln!("Output error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}
