//! Post-build artifact report.

use std::fmt;
use std::path::PathBuf;

/// Bytes per reported megabyte.
pub const BYTES_PER_MB: u64 = 1_048_576;

/// The frozen executable as found after a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Location of the executable.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the file.
    pub checksum: String,
}

impl Artifact {
    /// Size in whole megabytes, truncated.
    pub fn megabytes(&self) -> u64 {
        whole_megabytes(self.size)
    }

    /// One-line size summary, e.g. `15728640 bytes (15 MB)`.
    pub fn size_line(&self) -> String {
        format!("{} bytes ({} MB)", self.size, self.megabytes())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.path.display(), self.size_line())
    }
}

/// `bytes / 1_048_576`, truncated toward zero.
pub fn whole_megabytes(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Approximate size with one decimal, for humans.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
