use std::{
    fmt,
    io::{self, Write},
};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor as _};

pub struct Shell {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice(atty::Stream::Stdout)),
            stderr: StandardStream::stderr(color_choice(atty::Stream::Stderr)),
        }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut self.stderr
    }

    pub(crate) fn status(
        &mut self,
        status: impl fmt::Display,
        message: impl fmt::Display,
    ) -> io::Result<()> {
        self.print(status, message, Color::Green, true)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print("error", message, Color::Red, false)
    }

    fn print(
        &mut self,
        status: impl fmt::Display,
        message: impl fmt::Display,
        color: Color,
        justified: bool,
    ) -> io::Result<()> {
        self.stderr
            .set_color(ColorSpec::new().set_bold(true).set_fg(Some(color)))?;
        if justified {
            write!(self.stderr, "{:>12}", status)?;
        } else {
            write!(self.stderr, "{}", status)?;
            self.stderr.set_color(ColorSpec::new().set_bold(true))?;
            write!(self.stderr, ":")?;
        }
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", message)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

fn color_choice(stream: atty::Stream) -> termcolor::ColorChoice {
    if atty::is(stream) {
        termcolor::ColorChoice::Auto
    } else {
        termcolor::ColorChoice::Never
    }
}
