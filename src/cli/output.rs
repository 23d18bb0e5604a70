use crate::cli::OutputFormat;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub fn emit_value(value: &Value, format: OutputFormat, compact: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Json => {
            if compact {
                serde_json::to_writer(&mut handle, value)?;
            } else {
                serde_json::to_writer_pretty(&mut handle, value)?;
            }
            handle.write_all(b"\n")?;
        }
        OutputFormat::Yaml => {
            let text = serde_yaml::to_string(value)?;
            handle.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
