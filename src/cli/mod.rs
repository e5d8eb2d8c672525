use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod delete;
pub mod deploy;
pub mod events;
pub mod status;
pub mod validate;

#[derive(Parser)]
#[command(
    name = "stack-deploy",
    version,
    about = "Deploy CloudFormation stacks from YAML stack definitions"
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create or update the stack and wait for completion
    Deploy {
        /// Path to the stack definition YAML
        template: PathBuf,

        /// Seconds between status polls
        #[arg(short, long, default_value = "5")]
        interval: u64,
    },

    /// Show current stack status, parameters, and outputs
    Status {
        /// Path to the stack definition YAML
        template: PathBuf,
    },

    /// Delete the stack and wait until it is gone
    Delete {
        /// Path to the stack definition YAML
        template: PathBuf,

        /// Seconds between status polls
        #[arg(short, long, default_value = "5")]
        interval: u64,
    },

    /// List recent stack events
    Events {
        /// Path to the stack definition YAML
        template: PathBuf,

        /// Number of events to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Validate the template with the provider without deploying
    Validate {
        /// Path to the stack definition YAML
        template: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_deploy_with_default_interval() {
        let cli = Cli::try_parse_from(["stack-deploy", "deploy", "stack.yml"]).expect("parses");
        match cli.command {
            Command::Deploy { template, interval } => {
                assert_eq!(template.to_str(), Some("stack.yml"));
                assert_eq!(interval, 5);
            }
            _ => panic!("expected deploy command"),
        }
    }

    #[test]
    fn requires_a_command() {
        assert!(Cli::try_parse_from(["stack-deploy"]).is_err());
    }

    #[test]
    fn requires_a_template_path() {
        assert!(Cli::try_parse_from(["stack-deploy", "status"]).is_err());
    }

    #[test]
    fn counts_verbosity_flags() {
        let cli =
            Cli::try_parse_from(["stack-deploy", "-vv", "events", "stack.yml", "-n", "50"])
                .expect("parses");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Events { limit, .. } => assert_eq!(limit, 50),
            _ => panic!("expected events command"),
        }
    }
}
