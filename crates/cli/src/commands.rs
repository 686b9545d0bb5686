use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate each statement and run it through the shell
    Run {
        #[command(flatten)]
        input: QueryInput,

        #[arg(long, help = "Print the commands instead of executing them")]
        dry_run: bool,
    },
    /// Print the command line each statement translates to
    Translate {
        #[command(flatten)]
        input: QueryInput,

        #[arg(
            long,
            help = "Print statement, command and conditions as a JSON array"
        )]
        json: bool,
    },
    /// Print the parsed statement trees as JSON
    Ast {
        #[command(flatten)]
        input: QueryInput,
    },
}

/// Query text given inline or read from a file; exactly one is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct QueryInput {
    #[arg(help = "Query text, e.g. \"SELECT * FROM /tmp\"")]
    pub query: Option<String>,

    #[arg(long, help = "Read the query from this file")]
    pub file: Option<PathBuf>,
}

impl QueryInput {
    pub async fn read(&self) -> Result<String, CliError> {
        match (&self.query, &self.file) {
            (Some(query), _) => Ok(query.clone()),
            (None, Some(path)) => Ok(tokio::fs::read_to_string(path).await?),
            (None, None) => Err(CliError::Config(
                "either a query or --file must be given".to_string(),
            )),
        }
    }
}
