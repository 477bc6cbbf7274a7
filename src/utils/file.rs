use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use content_inspector::{ContentType, inspect};
use tempfile::NamedTempFile;

/// Byte order mark that may open a UTF-8 file.
pub const UTF8_BOM: char = '\u{feff}';

/// Reads a file as UTF-8 text, byte order mark included.
///
/// Returns `Ok(None)` for binary or non-UTF-8 content so callers can skip
/// the file instead of mangling it.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    let buffer = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if buffer.is_empty() {
        return Ok(Some(String::new()));
    }

    match inspect(&buffer) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM => Ok(String::from_utf8(buffer).ok()),
        _ => Ok(None),
    }
}

/// Splits text into lines, dropping line terminators (`\n` or `\r\n`).
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Returns the terminator of the first line, `"\r\n"` or `"\n"`.
///
/// Text without any line break gets `"\n"`.
pub fn detect_line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(idx) if text[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Replaces the contents of `path` with `content`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the original, so an interrupted run leaves either the old or
/// the new file. The original file's permissions are carried over.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush temporary file for {}", path.display()))?;
    fs::set_permissions(tmp.path(), permissions)
        .with_context(|| format!("Failed to set permissions for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "print('héllo')\n").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("print('héllo')\n"));
    }

    #[test]
    fn test_read_text_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.py");
        fs::write(&path, "").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_read_text_keeps_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.py");
        fs::write(&path, "\u{feff}import os\n").unwrap();
        let text = read_text(&path).unwrap().unwrap();
        assert!(text.starts_with(UTF8_BOM));
        assert_eq!(text.trim_start_matches(UTF8_BOM), "import os\n");
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(detect_line_ending("a\r\nb\r\n"), "\r\n");
        assert_eq!(detect_line_ending("a\nb\r\n"), "\n");
        assert_eq!(detect_line_ending("no newline"), "\n");
        assert_eq!(detect_line_ending(""), "\n");
    }

    #[test]
    fn test_read_text_binary_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x89, b'P', b'N', b'G', 0x00, 0x01, 0xff, 0xfe]).unwrap();
        assert_eq!(read_text(&path).unwrap(), None);
    }

    #[test]
    fn test_read_text_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = read_text(&dir.path().join("nope.py")).unwrap_err();
        assert!(err.to_string().contains("nope.py"));
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_write_file_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "old\n").unwrap();

        write_file(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run.py");
        fs::write(&path, "#!/usr/bin/env python3\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        write_file(&path, "changed\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
