//! JSON output helpers shared by the subcommands.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Serializes `value` as JSON followed by a newline. `indent` of `None` (or
/// zero) produces compact output.
pub fn dump_json<T: Serialize>(
    value: &T,
    indent: Option<usize>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    match indent {
        Some(n) if n > 0 => {
            let pad = vec![b' '; n];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
            let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
            value.serialize(&mut serializer)?;
        }
        _ => {
            serde_json::to_writer(&mut *writer, value)?;
        }
    }
    writeln!(writer)
}

/// Writes `text` either to `out` or to stdout.
pub fn write_output(out: Option<&Path>, text: &str) -> std::io::Result<()> {
    match out {
        Some(path) => std::fs::write(path, text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())
        }
    }
}

/// Dumps JSON either to `out` or to stdout.
pub fn write_json<T: Serialize>(
    value: &T,
    indent: Option<usize>,
    out: Option<&Path>,
) -> std::io::Result<()> {
    match out {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            dump_json(value, indent, &mut file)
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            dump_json(value, indent, &mut stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_compact() {
        let mut buf = Vec::new();
        dump_json(&serde_json::json!({"a": [1, 2]}), None, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"a\":[1,2]}\n");
    }

    #[test]
    fn test_dump_indented() {
        let mut buf = Vec::new();
        dump_json(&serde_json::json!({"a": 1}), Some(2), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  \"a\""));
        assert!(text.ends_with('\n'));
    }
}
