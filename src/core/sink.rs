use crate::domain::ports::SqlSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the statement to standard output. Progress logging goes to stderr,
/// so stdout carries nothing but the SQL text.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl SqlSink for StdoutSink {
    fn write_sql(&mut self, sql: &str) -> Result<String> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(sql.as_bytes())?;
        out.flush()?;
        Ok("stdout".to_string())
    }
}

/// Writes the statement to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SqlSink for FileSink {
    fn write_sql(&mut self, sql: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, sql)?;
        Ok(self.path.display().to_string())
    }
}
