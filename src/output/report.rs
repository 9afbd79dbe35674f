//! Operator status lines

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::IndexReport;

use super::config::OutputConfig;

/// Print the run summary to stdout.
pub fn print_report(report: &IndexReport, output: &Path, config: &OutputConfig) -> io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let color_choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report, output)
}

/// Write the three summary lines: examples converted, subfolders added,
/// and where the index went.
pub fn write_report<W: WriteColor>(out: &mut W, report: &IndexReport, output: &Path) -> io::Result<()> {
    let mut label = ColorSpec::new();
    label.set_bold(true);
    let mut count = ColorSpec::new();
    count.set_fg(Some(Color::Green));

    write_line(out, &label, &count, "Chuck examples converted:", &report.files_converted.to_string())?;
    write_line(out, &label, &count, "Chuck subfolders added:", &report.subfolders_added.to_string())?;

    let mut path = ColorSpec::new();
    path.set_fg(Some(Color::Cyan));
    write_line(out, &label, &path, "JSON file written to:", &output.display().to_string())
}

fn write_line<W: WriteColor>(
    out: &mut W,
    label_spec: &ColorSpec,
    value_spec: &ColorSpec,
    label: &str,
    value: &str,
) -> io::Result<()> {
    out.set_color(label_spec)?;
    write!(out, "{}", label)?;
    out.reset()?;
    write!(out, " ")?;
    out.set_color(value_spec)?;
    write!(out, "{}", value)?;
    out.reset()?;
    writeln!(out)
}
