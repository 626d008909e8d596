use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlmodel::tokenizer::EntityTokenizer;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokenizeCmd {
    #[arg(
        help="Path to the GraphQL schema file to tokenize.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokenizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let blocks: Vec<String> = EntityTokenizer::from_path(&self.file_path).collect();
        log::debug!(
            "Tokenized {} declarations from {:?}.",
            blocks.len(),
            self.file_path,
        );

        if blocks.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No declarations found in {:?}.",
                output_utils::RED_X,
                self.file_path,
            ));
        }
        CommandResult::stdout(format_args!("{}", blocks.join("\n")))
    }
}
