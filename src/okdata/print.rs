//! Printing a finished renderer.

use crate::error::Result;
use okdata_output::{Output, OutputFormat, Renderer};

/// Full stdout text: an optional message line, then the rendered rows.
///
/// The message is dropped for JSON so the output stays parseable.
pub fn render_to_string(message: Option<&str>, renderer: &Renderer) -> Result<String> {
    let body = renderer.render()?;
    match message {
        Some(message) if renderer.format() != OutputFormat::Json => {
            Ok(format!("{}\n{}", message, body))
        }
        _ => Ok(body),
    }
}

pub fn print(message: Option<&str>, renderer: &Renderer) -> Result<()> {
    println!("{}", render_to_string(message, renderer)?);
    Ok(())
}
