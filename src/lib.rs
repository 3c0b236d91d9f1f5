#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod sequence;
pub mod shell;

use crate::shell::Shell;
use anyhow::Context as _;
use std::{io::Write as _, path::PathBuf};
use structopt::{clap::AppSettings, StructOpt};

#[derive(StructOpt, Debug)]
#[structopt(
    about,
    global_settings(&[AppSettings::DeriveDisplayOrder, AppSettings::UnifiedHelpMessage])
)]
pub struct Opt {
    /// Number of leading Fibonacci values to print
    #[structopt(short, long, value_name("N"), default_value("10"))]
    pub count: u32,

    /// Write to the file instead of STDOUT
    #[structopt(short, long, value_name("PATH"))]
    pub output: Option<PathBuf>,
}

pub struct Context<'a> {
    pub cwd: PathBuf,
    pub shell: &'a mut Shell,
}

pub fn run(opt: Opt, ctx: Context<'_>) -> anyhow::Result<()> {
    let Opt { count, output } = opt;
    let Context { cwd, shell } = ctx;

    let line = sequence::render(count)?;

    if let Some(output) = output {
        let output = cwd.join(output.strip_prefix(".").unwrap_or(&output));
        std::fs::write(&output, &line)
            .with_context(|| format!("could not write `{}`", output.display()))?;
        shell.status("Wrote", output.display())?;
        Ok(())
    } else {
        write!(shell.out(), "{}", line)?;
        Ok(())
    }
}
