use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::*;

#[derive(Parser)]
#[command(name = "smallcurve", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Increase log verbosity (-v: info, -vv: debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Sample(SampleCmd),
    Mul(MulCmd),
    Points(PointsCmd),
    Order(OrderCmd),
    Div(DivCmd),
}

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let curve = cli.curve.build()?;
    tracing::info!(%curve, "using curve");

    match cli.command {
        Commands::Sample(cmd) => cmd.run(&curve),
        Commands::Mul(cmd) => cmd.run(&curve),
        Commands::Points(cmd) => cmd.run(&curve),
        Commands::Order(cmd) => cmd.run(&curve),
        Commands::Div(cmd) => cmd.run(&curve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_arguments() {
        let cli = Cli::try_parse_from(["smallcurve", "-a", "-3", "-b", "5", "-p", "23", "mul", "-5"])
            .unwrap();

        let curve = cli.curve.build().unwrap();
        assert_eq!((curve.a(), curve.b(), curve.modulus()), (20, 5, 23));
        assert!(matches!(cli.command, Commands::Mul(_)));
    }

    #[test]
    fn rejects_invalid_modulus() {
        let cli = Cli::try_parse_from(["smallcurve", "--modulus", "1", "points"]).unwrap();
        assert!(cli.curve.build().is_err());
    }
}
