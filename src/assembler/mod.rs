pub mod lang;
pub mod model;
pub mod phases;

pub use phases::parse::Error;
pub use phases::types::{Loc, Located};

use crate::spec::hw::Word;

/// The result of one fail-soft pass over a source text: machine words
/// for every line that assembled and one diagnostic per line that did
/// not, both in source order.
#[derive(Debug)]
pub struct Assembly {
    pub words: Vec<Word>,
    pub diagnostics: Vec<Located<Error>>,
}

/// Translates source text line by line. Lines are independent: a bad
/// line becomes a diagnostic and is skipped, never aborting assembly
/// of the rest.
pub fn assemble(source: &str) -> Assembly {
    let mut words = Vec::new();
    let mut diagnostics = Vec::new();

    for line in phases::tokenize(source) {
        match phases::parse(&line) {
            Ok(inst) => words.push(phases::encode(&inst)),
            Err(err) => diagnostics.push(Located::with_loc(line.loc, err)),
        }
    }

    Assembly { words, diagnostics }
}
