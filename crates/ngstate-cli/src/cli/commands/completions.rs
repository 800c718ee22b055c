//! Shell completions and man page, generated from the clap definition.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ngstate", &mut io::stdout());
    Ok(())
}

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut io::stdout())?;
    Ok(())
}
