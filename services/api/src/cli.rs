use crate::demo::{
    run_demo, run_foreclosure_timeline, run_valuation_estimate, DemoArgs, EstimateArgs,
    TimelineArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use foreclosure_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Foreclosure Advisor",
    about = "Serve and demo the home valuation and foreclosure timeline calculators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate a property's value from ZIP code and home details
    Valuation {
        #[command(subcommand)]
        command: ValuationCommand,
    },
    /// Project a foreclosure timeline from the first missed payment
    Foreclosure {
        #[command(subcommand)]
        command: ForeclosureCommand,
    },
    /// Walk through a sample homeowner: valuation plus foreclosure timeline
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ValuationCommand {
    /// Print the estimate, range, breakdown, and confidence
    Estimate(EstimateArgs),
}

#[derive(Subcommand, Debug)]
enum ForeclosureCommand {
    /// Print milestone dates and urgency
    Timeline(TimelineArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Valuation {
            command: ValuationCommand::Estimate(args),
        } => run_valuation_estimate(args),
        Command::Foreclosure {
            command: ForeclosureCommand::Timeline(args),
        } => run_foreclosure_timeline(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use foreclosure_advisor::workflows::valuation::{PropertyCondition, PropertyType};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_valuation_estimate_arguments() {
        let cli = Cli::try_parse_from([
            "foreclosure-advisor",
            "valuation",
            "estimate",
            "--zip-code",
            "75201",
            "--property-type",
            "townhouse",
            "--square-feet",
            "1850",
            "--bedrooms",
            "3",
            "--bathrooms",
            "2.5",
            "--condition",
            "fair",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Valuation {
                command: ValuationCommand::Estimate(args),
            }) => {
                assert_eq!(args.zip_code, "75201");
                assert_eq!(args.property_type, PropertyType::Townhouse);
                assert_eq!(args.condition, PropertyCondition::Fair);
                assert_eq!(args.bathrooms, 2.5);
                assert!(!args.json);
            }
            other => panic!("expected valuation estimate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_condition_values() {
        let result = Cli::try_parse_from([
            "foreclosure-advisor",
            "valuation",
            "estimate",
            "--zip-code",
            "75201",
            "--property-type",
            "condo",
            "--square-feet",
            "900",
            "--condition",
            "pristine",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["foreclosure-advisor"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
