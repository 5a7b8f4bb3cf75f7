use crate::player::traits::AutomationError;
use std::process::Command;

/// Run a raw AppleScript command and return its trimmed stdout.
pub fn run_script(script: &str) -> Result<String, AutomationError> {
    let output = Command::new("osascript").arg("-e").arg(script).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AutomationError::Script(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Check if a macOS application is running via pgrep
pub fn is_app_running(app_name: &str) -> bool {
    let output = Command::new("pgrep").arg("-x").arg(app_name).output();
    match output {
        Ok(o) => o.status.success(),
        Err(_) => false,
    }
}

/// Decode the raw-data descriptor osascript prints for binary results,
/// e.g. `«data tdta89504E47...»`. The four characters after `data ` are the
/// type code (tdta, JPEG, PNG ...); the rest is hex until the closing mark.
pub fn decode_data_descriptor(output: &str) -> Option<Vec<u8>> {
    let inner = output
        .trim()
        .strip_prefix("\u{ab}data ")?
        .strip_suffix('\u{bb}')?;
    if inner.len() < 4 {
        return None;
    }
    let hex: String = inner
        .chars()
        .skip(4)
        .filter(|c| !c.is_whitespace())
        .collect();
    if hex.is_empty() || hex.len() % 2 != 0 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        bytes.push(u8::from_str_radix(&hex[i..i + 2], 16).ok()?);
    }
    Some(bytes)
}
