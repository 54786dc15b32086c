use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tar::{Archive, Builder};
use walkdir::WalkDir;

use crate::domain::{AppError, TemplateName};
use crate::ports::TemplateStore;

const ARCHIVE_EXTENSION: &str = "tgz";

/// Environment override for the managed store directory.
pub const STORE_DIR_ENV: &str = "TPM_TEMPLATES_DIR";

/// Tarball-backed template store over a single flat directory.
///
/// Each saved template is one `<name>.tgz` artifact; the template name is
/// the artifact's file stem.
#[derive(Debug, Clone)]
pub struct ArchiveTemplateStore {
    root: PathBuf,
}

impl ArchiveTemplateStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store at the default location.
    ///
    /// `TPM_TEMPLATES_DIR` overrides the platform data directory.
    pub fn default_location() -> Result<Self, AppError> {
        if let Some(dir) = env::var_os(STORE_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir)));
        }
        let data_dir = dirs::data_dir().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, "no platform data directory"))
        })?;
        Ok(Self::new(data_dir.join("tpm").join("templates")))
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, name: &TemplateName) -> PathBuf {
        self.root.join(format!("{}.{}", name, ARCHIVE_EXTENSION))
    }
}

impl TemplateStore for ArchiveTemplateStore {
    fn exists(&self, name: &TemplateName) -> bool {
        self.artifact_path(name).exists()
    }

    fn pack(&self, source_dir: &Path, name: &TemplateName) -> Result<PathBuf, AppError> {
        let artifact = self.artifact_path(name);
        if artifact.exists() {
            return Err(AppError::TemplateExists(name.to_string()));
        }
        fs::create_dir_all(&self.root)?;

        // Stage and rename so a concurrent list/unpack never sees a
        // half-written artifact.
        let staging = self.root.join(format!(".{}.{}.partial", name, ARCHIVE_EXTENSION));
        if let Err(err) = write_archive(source_dir, &staging) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        fs::rename(&staging, &artifact)?;
        Ok(artifact)
    }

    fn unpack(&self, name: &TemplateName, dest_dir: &Path) -> Result<(), AppError> {
        let artifact = self.artifact_path(name);
        if !artifact.exists() {
            return Err(AppError::TemplateNotFound(name.to_string()));
        }

        fs::create_dir_all(dest_dir)?;
        let file = fs::File::open(&artifact)?;
        let mut archive = Archive::new(GzDecoder::new(file));
        archive.unpack(dest_dir)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, AppError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ARCHIVE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn write_archive(source_dir: &Path, staging: &Path) -> Result<(), AppError> {
    let file = fs::File::create(staging)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if entry.file_type().is_dir() {
            builder.append_dir(relative, entry.path())?;
        } else if entry.file_type().is_file() {
            builder.append_path_with_name(entry.path(), relative)?;
        }
    }

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}
