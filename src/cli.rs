use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relcheck")]
#[command(about = "Detect duplicate association declarations in model files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Check exactly this file; omit to scan the whole tree under --root
    pub path: Option<PathBuf>,

    /// Root directory for whole-tree scans
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to .relcheck.toml in the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search only these root-relative directories (overrides configuration)
    #[arg(long = "search-path", value_delimiter = ',')]
    pub search_paths: Vec<PathBuf>,

    /// Process files sequentially
    #[arg(long = "no-parallel")]
    pub no_parallel: bool,

    /// Worker threads for the scan (0 = one per core)
    #[arg(long, default_value = "0")]
    pub jobs: usize,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arguments_means_whole_tree_scan() {
        let cli = Cli::parse_from(["relcheck"]);
        assert!(cli.path.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert!(!cli.no_parallel);
        assert_eq!(cli.jobs, 0);
    }

    #[test]
    fn single_path_argument_targets_one_file() {
        let cli = Cli::parse_from(["relcheck", "app/models/user.rb"]);
        assert_eq!(cli.path, Some(PathBuf::from("app/models/user.rb")));
    }

    #[test]
    fn scan_options_parse() {
        let cli = Cli::parse_from([
            "relcheck",
            "--root",
            "/srv/app",
            "--format",
            "json",
            "--search-path",
            "app/models,engines",
            "--jobs",
            "2",
            "--plain",
            "-vv",
        ]);
        assert_eq!(cli.root, PathBuf::from("/srv/app"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.search_paths,
            vec![PathBuf::from("app/models"), PathBuf::from("engines")]
        );
        assert_eq!(cli.jobs, 2);
        assert!(cli.plain);
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn output_format_converts_to_io_format() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }
}
