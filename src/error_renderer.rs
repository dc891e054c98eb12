//! Error rendering using ariadne
//!
//! Errors that point into the input are drawn as a labelled snippet of the
//! line; errors without a location are printed as a single report line.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use tinycalc::{Engine, Environment, render_error};
///
/// let engine = Engine::default();
/// let mut env = Environment::new();
///
/// let source = "1 + (2";
/// if let Err(e) = engine.execute(&mut env, source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diagnostic = error.to_diagnostic();
    match &diagnostic.span {
        Some(span) => render_snippet(source, &diagnostic, span.0.clone(), writer, use_color),
        None => {
            writeln!(writer, "Error[{}]: {}", diagnostic.code, diagnostic.message)?;
            if let Some(help) = diagnostic.help {
                writeln!(writer, "help: {}", help)?;
            }
            Ok(())
        }
    }
}

fn render_snippet(
    source: &str,
    diag: &Diagnostic,
    span: std::ops::Range<usize>,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // ariadne addresses characters, not bytes.
    let span = char_offset(source, span.start)..char_offset(source, span.end);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_code(diag.code)
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(&diag.message)
                .with_color(colors.next()),
        );

    if let Some(help) = diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn char_offset(source: &str, byte_offset: usize) -> usize {
    source
        .get(..byte_offset)
        .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
}
