// External crates
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

/// Failure modes of emitting a report.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Error outputting JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Error writing JSON to output: {0}")]
    Io(#[from] io::Error),
}

/// Serialize `data` as JSON and write it to `writer`, followed by a newline.
///
/// Compact single-line encoding by default; tab-indented multi-line encoding
/// when `pretty` is set. A value that serializes to the bare literal `null`
/// is emitted as `[]` instead, so consumers never see a top-level null.
pub fn write_json<W, T>(writer: &mut W, data: &T, pretty: bool) -> Result<(), EmitError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let mut output = Vec::new();

    if pretty {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
        data.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut output, data)?;
    }

    let payload: &[u8] = if output == b"null" { b"[]" } else { &output };

    writer.write_all(payload)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialize `data` and print it on stdout.
pub fn emit<T>(data: &T, pretty: bool) -> Result<(), EmitError>
where
    T: Serialize + ?Sized,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, data, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn rendered(data: &Value, pretty: bool) -> String {
        let mut buf = Vec::new();
        write_json(&mut buf, data, pretty).expect("write json");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn compact_output_is_a_single_line() {
        let data = json!({"name": "test", "metrics": [{"provider.folderSize": 0}]});
        let out = rendered(&data, false);

        assert!(out.ends_with('\n'));
        assert_eq!(out.trim_end().lines().count(), 1);
        assert!(!out.trim_end().contains('\t'));
    }

    #[test]
    fn pretty_output_is_tab_indented() {
        let data = json!({"name": "test", "metrics": [{"provider.folderSize": 0}]});
        let out = rendered(&data, true);

        assert!(out.lines().count() > 1);
        assert!(out.contains("\n\t"));
    }

    #[test]
    fn compact_and_pretty_parse_to_the_same_structure() {
        let data = json!({"inventory": {"item1": {"folderSize": 350}}, "events": []});

        let compact: Value =
            serde_json::from_str(&rendered(&data, false)).expect("parse compact");
        let pretty: Value = serde_json::from_str(&rendered(&data, true)).expect("parse pretty");

        assert_eq!(compact, pretty);
        assert_eq!(compact, data);
    }

    #[test]
    fn null_value_is_emitted_as_empty_array() {
        assert_eq!(rendered(&Value::Null, false), "[]\n");
        assert_eq!(rendered(&Value::Null, true), "[]\n");
    }

    #[test]
    fn serialization_failure_surfaces_as_an_error() {
        let mut buf = Vec::new();
        let broken = std::collections::HashMap::from([(vec![1u8], "non-string key")]);

        let result = write_json(&mut buf, &broken, false);
        assert!(matches!(result, Err(EmitError::Serialize(_))));
    }
}
