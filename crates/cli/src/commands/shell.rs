//! Line-oriented session over a single tab.
//!
//! The tab area lives for the whole shell, so a login without `--remember`
//! holds until `logout` or end of input.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{Host, PageCommand, execute};

#[derive(Parser)]
#[command(name = "cafe-admin", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Page(PageCommand),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

pub(crate) fn run_shell(host: &Host, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let tokens = match split_args(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            },
        };
        if tokens.is_empty() || tokens[0].starts_with('#') {
            continue;
        }

        let command = match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{e}")?;
                continue;
            },
        };
        match command {
            ShellCommand::Exit => break,
            ShellCommand::Page(command) => {
                if let Err(e) = execute(host, command, out) {
                    writeln!(out, "error: {e:#}")?;
                }
            },
        }
        out.flush()?;
    }
    Ok(())
}

/// Whitespace split honouring double quotes, so `product add "Flat white" 4` works.
fn split_args(line: &str) -> Result<Vec<String>, &'static str> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            },
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            },
            c => {
                current.push(c);
                in_token = true;
            },
        }
    }
    if quoted {
        return Err("unterminated quote");
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
