use burrow::flags::Flags;
use burrow::shell::Shell;
use log::LevelFilter;
use std::env;

fn main() -> Result<(), burrow::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("burrow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let mut shell = Shell::new(flags)?;
    shell.run()
}

/// Logs go to stderr. `--debug` raises the default level; `RUST_LOG` wins.
fn init_logging(flags: &Flags) {
    let level = if flags.is_set("debug") {
        LevelFilter::Debug
    } else if flags.is_set("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
