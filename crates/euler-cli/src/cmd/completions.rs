use std::io;

use clap::{Args, Command};
use clap_complete::{Shell, generate};

/// Arguments for `euler completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute `euler completions`.
pub fn run_completions(args: &CompletionsArgs, command: &mut Command) {
    generate(args.shell, command, "euler", &mut io::stdout());
}
