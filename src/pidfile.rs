//! PID file support for the command-line front end.

use std::path::Path;

use tracing::info;

use crate::error::CalError;

/// Write the current process id, newline-terminated, creating or
/// truncating `path`.
pub fn write_pid_file(path: &Path) -> Result<u32, CalError> {
    let pid = std::process::id();
    std::fs::write(path, format!("{}\n", pid)).map_err(|source| CalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(pid, path = %path.display(), "wrote pid file");
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_own_pid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caltext.pid");
        std::fs::write(&path, "stale contents that are longer\n").unwrap();

        let pid = write_pid_file(&path).unwrap();

        assert_eq!(pid, std::process::id());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{pid}\n"));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("caltext.pid");
        assert!(matches!(write_pid_file(&path), Err(CalError::Io { .. })));
    }
}
