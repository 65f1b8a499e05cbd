//! scicalc: keypad-token scientific calculator
//!
//! ## Usage
//!
//! ```bash
//! scicalc eval 2 + 3 x 4 =          # 20 (no precedence)
//! scicalc --angle deg eval 90 sin   # 1
//! scicalc run session.calc --history
//! scicalc repl
//! ```

use clap::Parser;
use scicalc_cli::{
    logging, Cli, CliConfig, CliResult, Commands, OutputFormat, ReplArgs, Session, Verbosity,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    logging::init_tracing(config.verbosity);
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Eval(args) => {
            let mut session = Session::new(config);
            session.feed(&args.tokens.join(" "))?;
            print_result(&session, args.format, args.history, args.order.map(Into::into))
        }
        Commands::Run(args) => {
            let script = std::fs::read_to_string(&args.script)?;
            info!(path = %args.script.display(), "running script");
            let mut session = Session::new(config);
            session.feed(&script)?;
            print_result(&session, args.format, args.history, args.order.map(Into::into))
        }
        Commands::Repl(args) => run_repl(config, &args),
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

/// Defaults, then the YAML file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet {
        config = config.with_verbosity(Verbosity::Quiet);
    } else {
        match cli.verbose {
            0 => {}
            1 => config = config.with_verbosity(Verbosity::Verbose),
            _ => config = config.with_verbosity(Verbosity::Debug),
        }
    }

    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(angle) = cli.angle {
        config = config.with_angle_mode(angle.into());
    }

    Ok(config)
}

fn print_result(
    session: &Session,
    format: OutputFormat,
    history: bool,
    order: Option<scicalc_cli::HistoryOrder>,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => println!("{}", session.render_text(history, order)),
        OutputFormat::Json => println!("{}", session.render_json()?),
    }
    Ok(())
}

fn run_repl(config: CliConfig, args: &ReplArgs) -> CliResult<()> {
    let stdin = io::stdin();
    let prompt = !args.no_prompt && !config.verbosity.is_quiet() && stdin.is_terminal();
    let mut session = Session::new(config);
    session.repl(stdin.lock(), io::stdout().lock(), prompt)
}
