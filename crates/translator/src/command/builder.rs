use crate::command::ast::{Action, FilterTerm, FindCommand, PreCommand, TraversalOption};

#[derive(Debug, Clone)]
pub struct FindCommandBuilder {
    ast: FindCommand,
}

impl FindCommandBuilder {
    pub fn new(path: impl Into<String>, action: Action) -> Self {
        Self {
            ast: FindCommand {
                pre_command: None,
                path: path.into(),
                options: Vec::new(),
                filter: Vec::new(),
                action,
            },
        }
    }

    /// Shallow unless `recursive`: entries directly under the path only.
    pub fn recursive(mut self, recursive: bool) -> Self {
        if !recursive {
            self.ast.options.push(TraversalOption::MaxDepth(1));
        }
        self
    }

    /// Never act on the starting point itself.
    pub fn skip_root(mut self) -> Self {
        self.ast.options.push(TraversalOption::MinDepth(1));
        self
    }

    pub fn filter(mut self, terms: Vec<FilterTerm>) -> Self {
        self.ast.filter = terms;
        self
    }

    pub fn pre_command(mut self, pre_command: PreCommand) -> Self {
        self.ast.pre_command = Some(pre_command);
        self
    }

    pub fn build(self) -> FindCommand {
        self.ast
    }
}
