use std::{
    io::{self, Read},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use commentwrap::{AutoFormatter, ProfileRegistry, format_file, format_text, rewrite};
use log::LevelFilter;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Wrap over-long comments and docstrings")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Source files to format
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct FormatOpts {
    /// Column limit for comments in every language
    #[arg(long = "comment-limit")]
    comment_limit: Option<NonZeroUsize>,
    /// Column limit for docstrings in languages that have them
    #[arg(long = "docstring-limit")]
    docstring_limit: Option<NonZeroUsize>,
    /// File extension used to pick a language for standard input
    #[arg(long = "ext", default_value = ".py")]
    ext: String,
}

impl FormatOpts {
    fn formatter(&self) -> AutoFormatter {
        AutoFormatter::new(
            ProfileRegistry::builtin().with_limits(self.comment_limit, self.docstring_limit),
        )
    }

    /// Synthetic file name carrying the `--ext` extension.
    fn stdin_name(&self) -> String {
        let ext = self.ext.trim_start_matches('.');
        format!("<stdin>.{ext}")
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Entry point for the command-line tool that wraps comments and docstrings.
///
/// Reads standard input when no files are given, otherwise formats each file
/// and prints the result, or rewrites the files with `--in-place`. Files are
/// processed in parallel; output order follows the command line.
///
/// # Examples
///
/// ```sh
/// # Wrap a file and print the result
/// commentwrap module.py
///
/// # Wrap C comments to 60 columns in place
/// commentwrap --comment-limit 60 --in-place main.c
///
/// # Treat standard input as C
/// cat main.c | commentwrap --ext .c
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let formatter = cli.opts.formatter();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let fixed = format_text(&input, &cli.opts.stdin_name(), &formatter)?;
        print!("{fixed}");
        return Ok(());
    }

    if cli.in_place {
        cli.files.par_iter().try_for_each(|path| {
            rewrite(path, &formatter)
                .map(|_| ())
                .with_context(|| format!("failed to rewrite {}", path.display()))
        })?;
        return Ok(());
    }

    let outputs = cli
        .files
        .par_iter()
        .map(|path| {
            format_file(path, &formatter)
                .with_context(|| format!("failed to format {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    for fixed in outputs {
        print!("{fixed}");
    }
    Ok(())
}
