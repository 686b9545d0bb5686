//! Rendering of the command AST into a POSIX shell command line.

use crate::command::ast::{Action, FilterTerm, FindCommand, PreCommand, TraversalOption};
use crate::rules::SIZE_PLACEHOLDER;
use std::fmt;

/// A trait for any AST node that can be rendered into a shell fragment.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the command line; words are separated by single spaces.
#[derive(Debug, Default)]
pub struct Renderer {
    pub cmd: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the command line.
    pub fn finish(self) -> String {
        self.cmd
    }

    pub fn word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if !self.cmd.is_empty() && !self.cmd.ends_with(' ') {
            self.cmd.push(' ');
        }
        self.cmd.push_str(word);
    }
}

impl Render for FindCommand {
    fn render(&self, r: &mut Renderer) {
        if let Some(pre_command) = &self.pre_command {
            pre_command.render(r);
            r.cmd.push_str("; ");
        }

        r.word("find");
        r.word(&self.path);
        for option in &self.options {
            option.render(r);
        }
        // Grouped, or an `-or` would bind looser than the implicit `-and`
        // in front of the action
        if !self.filter.is_empty() {
            r.word(r"\(");
            for term in &self.filter {
                term.render(r);
            }
            r.word(r"\)");
        }
        self.action.render(r);
    }
}

impl Render for PreCommand {
    fn render(&self, r: &mut Renderer) {
        match self {
            PreCommand::SizeSum { variable, path } => {
                r.word(&format!(
                    "{}=$(find {} -mindepth 1 -maxdepth 1 -printf '{}\\n' | awk '{{ total += $1 }} END {{ print total + 0 }}')",
                    variable, path, SIZE_PLACEHOLDER
                ));
            }
        }
    }
}

impl Render for TraversalOption {
    fn render(&self, r: &mut Renderer) {
        match self {
            TraversalOption::MaxDepth(depth) => {
                r.word("-maxdepth");
                r.word(&depth.to_string());
            }
            TraversalOption::MinDepth(depth) => {
                r.word("-mindepth");
                r.word(&depth.to_string());
            }
        }
    }
}

impl Render for FilterTerm {
    fn render(&self, r: &mut Renderer) {
        if let Some(connective) = self.connective {
            r.word(connective.flag());
        }
        r.word(self.test);
        r.word(&self.argument);
    }
}

impl Render for Action {
    fn render(&self, r: &mut Renderer) {
        match self {
            Action::List => r.word("-ls"),
            Action::Printf { directives } => {
                r.word("-printf");
                r.word(&format!("\"{}\\n\"", directives.join("\\t")));
            }
            Action::Remove => r.word("-exec rm -rf {} +"),
            Action::Copy { destination } => {
                r.word("-exec cp -r {}");
                r.word(destination);
                r.word(r"\;");
            }
        }
    }
}

impl fmt::Display for FindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut renderer = Renderer::new();
        self.render(&mut renderer);
        write!(f, "{}", renderer.finish())
    }
}
