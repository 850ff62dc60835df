use std::io::{self, Write};

use serde_json::Value;

use crate::error::CliError;

pub fn render(value: &Value, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value, pretty)
}

fn write_json<W: Write>(writer: &mut W, value: &Value, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
