use crate::{error::CliError, pipeline::Translation};
use serde::Serialize;
use sqlfs_syntax::tree::Statement;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_translations(translations: &[Translation], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", to_json(translations)?);
    } else {
        for translation in translations {
            println!("{}", translation.command);
        }
    }
    Ok(())
}

pub fn print_statements(statements: &[Statement]) -> Result<(), CliError> {
    println!("{}", to_json(statements)?);
    Ok(())
}
