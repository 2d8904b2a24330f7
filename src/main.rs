use anyhow::Result;
use clap::Parser;
use relcheck::cli::Cli;
use relcheck::commands::{check, scan};
use relcheck::formatting::ColorMode;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    resolve_color_mode(cli.plain).apply();

    match cli.path {
        Some(path) => check::check_single_file(check::CheckConfig {
            path,
            format: cli.format.into(),
            output: cli.output,
        }),
        None => scan::scan_tree(scan::ScanConfig {
            root: cli.root,
            config_file: cli.config,
            search_paths: cli.search_paths,
            format: cli.format.into(),
            output: cli.output,
            parallel: !cli.no_parallel,
            jobs: cli.jobs,
        }),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn resolve_color_mode(plain: bool) -> ColorMode {
    if plain {
        ColorMode::Never
    } else {
        ColorMode::from_env()
    }
}
