use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar/sqlfs.pest"]
pub struct SqlfsParser;
