use crate::assembler;
use ansi_term::Color::{Red, Yellow};
use anyhow::Context;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

#[derive(StructOpt, Debug)]
#[structopt(name = "tasm")]
pub struct SubcommandAsm {
    /// Assembly source file; omit it to enter instructions interactively.
    #[structopt(name = "in.s", parse(from_os_str))]
    in_src: Option<PathBuf>,
}

pub fn asm(cmd: SubcommandAsm) -> ! {
    let source = match &cmd.in_src {
        Some(path) => match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("{}", Red.paint(format!("{:#}", err)));
                std::process::exit(1);
            }
        },
        None => read_interactive(),
    };

    let assembly = assembler::assemble(&source);

    for diagnostic in &assembly.diagnostics {
        eprintln!("{}", Yellow.paint(diagnostic.to_string()));
    }

    if assembly.words.is_empty() {
        eprintln!("{}", Red.paint("No valid instructions to assemble."));
        std::process::exit(1);
    }

    println!(
        "{}",
        assembly
            .words
            .iter()
            .map(|word| format!("{:#06x}", word))
            .join(",")
    );

    std::process::exit(0);
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("could not read source file '{}'", path.display()))
}

/// Reads instructions from the terminal until two consecutive blank
/// lines (or end of input). Blank lines are not part of the program,
/// so they are not kept.
fn read_interactive() -> String {
    println!("Enter assembly instructions (press Enter twice to finish):");

    let stdin = io::stdin();
    let stdin = stdin.lock();

    let mut lines = Vec::new();
    let mut blank_run = 0;
    let mut input = stdin.lines();
    while let Some(Ok(line)) = input.next() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run >= 2 {
                break;
            }
        } else {
            blank_run = 0;
            lines.push(line);
        }
    }

    lines.join("\n")
}
