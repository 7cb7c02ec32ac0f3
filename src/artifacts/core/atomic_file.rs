use crate::artifacts::core::errors::FicError;
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Replace `target` with `content` without ever exposing a partial file
///
/// The content is written to a uniquely named temp file next to the target
/// and then renamed into place. Missing parent directories are created.
pub fn write_atomically(target: &Path, content: &[u8]) -> Result<(), FicError> {
    let parent = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| {
        FicError::io(format!("Unable to create directory {}", parent.display()), e)
    })?;

    let temp_path = parent.join(generate_temp_name(target));

    let result = write_temp_file(&temp_path, content).and_then(|_| {
        std::fs::rename(&temp_path, target).map_err(|e| {
            FicError::io(format!("Unable to rename temp file to {}", target.display()), e)
        })
    });

    if result.is_err() {
        // cleanup failures are ignored; the write error is returned
        let _ = std::fs::remove_file(&temp_path);
    }

    result
}

fn write_temp_file(temp_path: &Path, content: &[u8]) -> Result<(), FicError> {
    // open the file as WRONLY, CREAT and EXCL
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)
        .map_err(|e| FicError::io(format!("Unable to open temp file {}", temp_path.display()), e))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| FicError::io(format!("Unable to write temp file {}", temp_path.display()), e))
}

fn generate_temp_name(target: &Path) -> String {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{}.tmp-{}", file_name, rand::random::<u32>())
}
