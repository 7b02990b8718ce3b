//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Human label and ANSI color for a role code, used in list output.
pub fn describe_role(label: &str) -> (String, &'static str) {
    match label.to_lowercase().as_str() {
        "admin" => ("Administrator".into(), "\x1b[34m"),
        "shift" => ("Shift manager".into(), "\x1b[36m"),
        "area" => ("Area manager".into(), "\x1b[33m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
