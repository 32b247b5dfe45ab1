use calcterm::cli::Cli;
use calcterm::config::Config;
use calcterm::logging::init_tracing;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging.level, config.logging.file.as_deref())?;
    calcterm::ui::run(&config)
}
