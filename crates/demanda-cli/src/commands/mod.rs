//! CLI command implementations

pub mod ask;
pub mod batch;
pub mod chat;
pub mod config;

use anyhow::Result;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print an answer with its origin label, label in color
pub fn print_reply(reply: &demanda_core::Reply) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "Asesor [{}]: ", reply.origin)?;
    stdout.reset()?;
    writeln!(stdout, "{}", reply.text)?;

    Ok(())
}
