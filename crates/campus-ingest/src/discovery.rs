//! Content directory discovery and file classification.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use campus_model::CollectionKind;

use crate::error::{IngestError, Result};

/// What a discovered JSON file appears to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentClass {
    /// An orderable collection of the given kind.
    Collection(CollectionKind),
    /// A feedback form definition.
    Form,
    /// A flat list of feedback submissions.
    Submissions,
    /// A JSON file this console does not recognize.
    Unknown,
}

/// A discovered content file with its classification.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub path: PathBuf,
    pub class: ContentClass,
}

/// Lists all JSON files in a directory, sorted by filename.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Discovers the JSON files of a content directory and classifies them.
pub fn discover_content(dir: &Path) -> Result<Vec<ContentFile>> {
    let files = list_json_files(dir)?;
    Ok(files
        .into_iter()
        .map(|path| {
            let class = classify(&path);
            ContentFile { path, class }
        })
        .collect())
}

/// Infer the collection kind a file holds from its filename.
///
/// Handles the conventional names (`colleges.json`, `highlights.json`)
/// plus any `carousel*` prefix for section carousels.
pub fn infer_collection_kind(path: &Path) -> Option<CollectionKind> {
    let stem = path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_lowercase();
    if let Ok(kind) = CollectionKind::from_str(&stem) {
        return Some(kind);
    }
    if stem.starts_with("carousel") {
        return Some(CollectionKind::CarouselImages);
    }
    None
}

/// Classify a content file by filename convention.
///
/// Submission exports are checked before forms so that
/// `form-responses.json` lands on the submission side.
fn classify(path: &Path) -> ContentClass {
    if let Some(kind) = infer_collection_kind(path) {
        return ContentClass::Collection(kind);
    }

    let stem = path
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_lowercase();
    if stem.contains("responses") || stem.contains("submissions") {
        return ContentClass::Submissions;
    }
    if stem.contains("form") || stem.contains("feedback") {
        return ContentClass::Form;
    }
    ContentClass::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_content_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in &[
            "colleges.json",
            "highlights.json",
            "carousel-images.json",
            "semester-form.json",
            "semester-responses.json",
            "notes.json",
            "README.md",
        ] {
            std::fs::write(dir.path().join(name), "[]").unwrap();
        }
        dir
    }

    #[test]
    fn lists_only_json_sorted_by_name() {
        let dir = create_content_dir();
        let files = list_json_files(dir.path()).unwrap();
        assert_eq!(files.len(), 6);
        assert_eq!(
            files[0].file_name().unwrap().to_str().unwrap(),
            "carousel-images.json"
        );
    }

    #[test]
    fn classifies_by_filename_convention() {
        let dir = create_content_dir();
        let discovered = discover_content(dir.path()).unwrap();

        let class_of = |name: &str| {
            discovered
                .iter()
                .find(|file| file.path.file_name().unwrap().to_str().unwrap() == name)
                .map(|file| file.class.clone())
                .unwrap()
        };

        assert_eq!(
            class_of("colleges.json"),
            ContentClass::Collection(CollectionKind::Colleges)
        );
        assert_eq!(
            class_of("highlights.json"),
            ContentClass::Collection(CollectionKind::Highlights)
        );
        assert_eq!(
            class_of("carousel-images.json"),
            ContentClass::Collection(CollectionKind::CarouselImages)
        );
        assert_eq!(class_of("semester-form.json"), ContentClass::Form);
        assert_eq!(class_of("semester-responses.json"), ContentClass::Submissions);
        assert_eq!(class_of("notes.json"), ContentClass::Unknown);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = list_json_files(Path::new("/nonexistent/content"));
        assert!(matches!(
            result,
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
