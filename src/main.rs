// SPDX-License-Identifier: MIT
//
// huebound — random colors that stay within pleasing regions of HSB space.
//
// The binary is a thin shell around the crates:
//
//   huebound-sampler → request, dictionary, seeded draws, generate()
//   huebound-color   → Hsb and its hex / rgb / hsl renderings
//
// Each invocation flows through:
//
//   argv → Cli → SampleRequest → generate → Output → stdout
//
// Logging goes to stderr (RUST_LOG, default `warn`) so stdout only ever
// carries colors.

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use huebound_color::Rgb;
use huebound_sampler::{generate, FormattedColor, Output};

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();
    let request = cli.request()?;
    debug!(?request, "parsed arguments");

    let output = generate(&request).context("failed to generate colors")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer(&mut out, &output).context("failed to encode output")?;
        writeln!(out)?;
    } else {
        print_colors(&mut out, &output, cli.swatch)?;
    }
    out.flush()?;
    Ok(())
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// One color per line, each optionally led by a swatch.
fn print_colors(w: &mut impl Write, output: &Output, swatch: bool) -> io::Result<()> {
    for color in output.colors() {
        if swatch {
            write_swatch(w, color)?;
        }
        writeln!(w, "{color}")?;
    }
    Ok(())
}

/// Two cells of 24-bit background in the color, then a space.
///
/// HSL renderings are rounded and cannot be turned back into RGB; they get
/// blank padding instead so columns still line up.
fn write_swatch(w: &mut impl Write, color: &FormattedColor) -> io::Result<()> {
    match color.to_rgb() {
        Some(Rgb { r, g, b }) => write!(w, "\x1b[48;2;{r};{g};{b}m  \x1b[0m "),
        None => w.write_all(b"   "),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use huebound_color::Hsl;
    use pretty_assertions::assert_eq;

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn swatch_uses_truecolor_background() {
        let color = FormattedColor::Hex("#0064c8".into());
        assert_eq!(emit(|w| write_swatch(w, &color)), "\x1b[48;2;0;100;200m  \x1b[0m ");
    }

    #[test]
    fn swatch_pads_hsl() {
        let color = FormattedColor::Hsl(Hsl::new(120.0, 50.0, 50.0));
        assert_eq!(emit(|w| write_swatch(w, &color)), "   ");
    }

    #[test]
    fn plain_lines() {
        let output = Output::Batch(vec![
            FormattedColor::Hex("#245aa0".into()),
            FormattedColor::RgbArray([1, 2, 3]),
        ]);
        assert_eq!(emit(|w| print_colors(w, &output, false)), "#245aa0\n[1, 2, 3]\n");
    }

    #[test]
    fn lines_with_swatches() {
        let output = Output::Single(FormattedColor::Rgb(Rgb::new(1, 2, 3)));
        assert_eq!(
            emit(|w| print_colors(w, &output, true)),
            "\x1b[48;2;1;2;3m  \x1b[0m rgb(1, 2, 3)\n"
        );
    }
}
