//! CLI parse and state-building tests.

use super::{Cli, CliCommand, UrlArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_url(args: &[&str]) -> UrlArgs {
    match parse(args) {
        CliCommand::Url(url_args) => url_args,
        other => panic!("expected Url, got {other:?}"),
    }
}

mod parse;
