use structopt::StructOpt;
use tasm::cli::command;

fn main() {
    command::terminal_init();
    command::asm(command::SubcommandAsm::from_args());
}
