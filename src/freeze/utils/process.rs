//! Child-process helpers.

use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitStatus;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Renders `program args...` for log lines and error messages.
pub fn command_line<I, S>(program: &Path, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

/// Last `n` non-empty lines of captured output, joined with newlines.
pub fn tail_lines(lines: &[String], n: usize) -> String {
    let non_empty: Vec<&str> = lines
        .iter()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect();
    let start = non_empty.len().saturating_sub(n);
    non_empty[start..].join("\n")
}

/// Splits raw process output into lines.
pub fn output_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Describes how a child exited: its code, or the signal that killed it.
pub fn describe_exit(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exited with code {}", code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("was terminated by signal {}", signal);
        }
    }

    "exited without a status code".to_string()
}

/// Feeds every line of `reader` to `on_line` until EOF.
///
/// Bytes that are not UTF-8 are replaced rather than ending the read, so the
/// pipe stays drained for the whole life of the child.
pub async fn for_each_line<R, F>(mut reader: R, mut on_line: F)
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                on_line(line.trim_end_matches(['\n', '\r']).to_string());
            }
            Err(e) => {
                log::debug!("Stopped reading child output: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        let line = command_line(Path::new("python"), ["-m", "pip", "install", "pyinstaller"]);
        assert_eq!(line, "python -m pip install pyinstaller");
    }

    #[test]
    fn tail_lines_skips_blank_lines() {
        let lines = output_lines(b"one\n\ntwo\nthree\n  \nfour\n");
        assert_eq!(tail_lines(&lines, 2), "three\nfour");
        assert_eq!(tail_lines(&lines, 10), "one\ntwo\nthree\nfour");
        assert_eq!(tail_lines(&[], 3), "");
    }

    #[tokio::test]
    async fn for_each_line_survives_invalid_utf8() {
        let input: &[u8] = b"Andr\xe9\r\nsecond\nlast";
        let mut lines = Vec::new();
        for_each_line(input, |line| lines.push(line)).await;
        assert_eq!(lines, vec!["Andr\u{fffd}", "second", "last"]);
    }

    #[cfg(unix)]
    #[test]
    fn describe_exit_names_code_or_signal() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(describe_exit(ExitStatus::from_raw(1 << 8)), "exited with code 1");
        assert_eq!(
            describe_exit(ExitStatus::from_raw(13)),
            "was terminated by signal 13"
        );
    }
}
