mod inspect;
mod model_config_args;
mod tokenize;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;
use tokenize::TokenizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlmodel")]
pub(crate) enum CommandEnum {
    /// Build the model from one or more schema files and print every entity
    /// with its resolved field representations.
    Inspect(Box<InspectCmd>),

    /// Print the normalized text block of every top-level declaration.
    Tokenize(TokenizeCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::Tokenize(cmd) => cmd.run(cli).await,
        }
    }
}
