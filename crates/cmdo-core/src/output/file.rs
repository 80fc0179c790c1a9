//! File tree output for command responses.
//!
//! Layout: `<root>/<device name>/<sanitized command>`, one file per command
//! holding the raw response text.

use std::collections::HashMap;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use super::{pair_responses, sanitize_cmd, OutputMode, ResponseWriter};
use crate::error::WriterError;
use crate::types::{AppConfig, Device, MultiResponse};

/// Permission bits for created directories and files
const OUTPUT_MODE: u32 = 0o755;

/// Writes each response to its own file under a per-device directory.
#[derive(Debug, Clone)]
pub struct FileWriter {
    dir: PathBuf,
}

impl FileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the files of device `name`.
    ///
    /// Root and drive components of `name` are dropped so the result always
    /// stays under the output root; `..` is rejected.
    pub fn device_dir(&self, name: &str) -> Result<PathBuf, WriterError> {
        let mut dir = self.dir.clone();
        let mut pushed = false;
        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => {
                    dir.push(part);
                    pushed = true;
                }
                Component::ParentDir => {
                    return Err(WriterError::InvalidDeviceName(name.to_string()));
                }
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }

        if !pushed {
            return Err(WriterError::InvalidDeviceName(name.to_string()));
        }
        Ok(dir)
    }
}

fn create_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(OUTPUT_MODE);
    }
    builder.create(path)
}

fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(content)
}

impl ResponseWriter for FileWriter {
    fn write_response(
        &self,
        responses: &MultiResponse,
        name: &str,
        device: &Device,
        _config: &AppConfig,
    ) -> Result<(), WriterError> {
        let pairs = pair_responses(name, device, responses)?;

        let out_dir = self.device_dir(name)?;
        create_dir(&out_dir).map_err(|source| WriterError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;

        // Same-named files are overwritten; only warn about it.
        let mut written: HashMap<String, &str> = HashMap::with_capacity(pairs.len());

        for (cmd, response) in pairs {
            let file_name = sanitize_cmd(cmd);
            if let Some(previous) = written.insert(file_name.clone(), cmd) {
                log::warn!(
                    "{}: '{}' overwrites output of '{}' in {}",
                    name,
                    cmd,
                    previous,
                    file_name
                );
            }

            let path = out_dir.join(&file_name);
            write_file(&path, response.result.as_bytes())
                .map_err(|source| WriterError::WriteFile { path: path.clone(), source })?;
            log::debug!("Wrote {}", path.display());
        }

        Ok(())
    }

    fn mode(&self) -> OutputMode {
        OutputMode::File
    }

    fn output_dir(&self) -> Option<&Path> {
        Some(&self.dir)
    }
}
