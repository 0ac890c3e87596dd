use include_dir::{Dir, DirEntry};
use std::path::Path;

use crate::domain::AppError;

const TEMPLATE_SUFFIX: &str = ".j2";

/// Files stored without their leading dot so packaging tools keep them.
const DOTFILE_RENAMES: [(&str, &str); 1] = [("gitignore", ".gitignore")];

#[derive(Debug, Clone)]
pub struct AssetSourceFile {
    pub content: String,
    relative_path: String,
    is_template: bool,
}

impl AssetSourceFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        Self {
            is_template: relative_path.ends_with(TEMPLATE_SUFFIX),
            content: content.into(),
            relative_path,
        }
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    pub fn template_name(&self) -> &str {
        &self.relative_path
    }

    /// Path the file is written to, relative to the project root.
    pub fn output_path(&self) -> String {
        let path = if self.is_template {
            self.relative_path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&self.relative_path)
        } else {
            &self.relative_path
        };

        let (dir, file_name) = match path.rsplit_once('/') {
            Some((dir, file_name)) => (Some(dir), file_name),
            None => (None, path),
        };
        let file_name = DOTFILE_RENAMES
            .iter()
            .find(|(stored, _)| *stored == file_name)
            .map_or(file_name, |(_, renamed)| renamed);

        match dir {
            Some(dir) => format!("{dir}/{file_name}"),
            None => file_name.to_string(),
        }
    }
}

pub fn collect_asset_sources(asset_dir: &Dir) -> Result<Vec<AssetSourceFile>, AppError> {
    let mut files = Vec::new();
    collect_entries(asset_dir, asset_dir.path(), &mut files)?;
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

fn collect_entries(
    dir: &Dir,
    base_path: &Path,
    files: &mut Vec<AssetSourceFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let file_path = file.path();
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::template_error(
                        file_path.to_string_lossy(),
                        "project template file is not UTF-8",
                    )
                })?;

                let relative_path = file_path.strip_prefix(base_path).map_err(|_| {
                    AppError::template_error(
                        file_path.to_string_lossy(),
                        "project template file has unexpected path",
                    )
                })?;

                // Embedded paths use the host separator; templates are addressed with '/'.
                let relative_path = relative_path
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                files.push(AssetSourceFile::new(relative_path, content));
            }
            DirEntry::Dir(subdir) => collect_entries(subdir, base_path, files)?,
        }
    }

    Ok(())
}
