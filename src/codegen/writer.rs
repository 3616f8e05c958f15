use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Writes generated source text to any output
pub struct SourceWriter<W: Write> {
    writer: W,
}

impl<W: Write> SourceWriter<W> {
    pub fn new(writer: W) -> Self {
        SourceWriter { writer }
    }

    /// Write the source, making sure it ends with a newline
    pub fn write_source(&mut self, source: &str) -> Result<()> {
        self.writer.write_all(source.as_bytes())?;
        if !source.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write generated source to `path`, creating parent directories as needed
pub fn write_to_path<P: AsRef<Path>>(path: P, source: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let file = std::fs::File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = SourceWriter::new(std::io::BufWriter::new(file));
    writer.write_source(source)?;
    writer.flush()
}
