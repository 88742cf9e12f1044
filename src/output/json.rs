//
//  shopsavvy
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Pretty-printed JSON for `--json` mode. Output is suitable for piping to
//! `jq` or parsing in scripts.

use serde::Serialize;
use std::io::Write;

/// Writes a value to stdout as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_to_appends_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &serde_json::json!({"removed": true})).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "{\n  \"removed\": true\n}\n");
    }
}
