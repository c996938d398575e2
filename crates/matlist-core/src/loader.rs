use std::path::{Path, PathBuf};

use crate::error::MatlistError;
use crate::extraction::{PageContent, PdfExtractor};

/// One opened and extracted input document.
#[derive(Debug, Clone)]
pub struct Document {
    /// File stem, used as the source name of its line items.
    pub name: String,
    pub pages: Vec<PageContent>,
}

/// List the PDF files directly inside `dir`, sorted by path.
///
/// Extension match is case-insensitive. Subdirectories are not searched.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, MatlistError> {
    if !dir.is_dir() {
        return Err(MatlistError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

/// Read and extract a single document.
///
/// The file is read fully and closed before extraction starts. Every failure
/// comes back as `DocumentUnreadable` so the caller can skip the file.
pub fn load_document(path: &Path, extractor: &dyn PdfExtractor) -> Result<Document, MatlistError> {
    let unreadable = |reason: String| MatlistError::DocumentUnreadable {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| unreadable(e.to_string()))?;
    let pages = extractor
        .extract_pages(&bytes)
        .map_err(|e| unreadable(e.to_string()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document { name, pages })
}

/// Load documents one after another as the iterator is advanced.
pub fn load_documents<'a>(
    paths: &'a [PathBuf],
    extractor: &'a dyn PdfExtractor,
) -> impl Iterator<Item = (&'a Path, Result<Document, MatlistError>)> + 'a {
    paths
        .iter()
        .map(move |path| (path.as_path(), load_document(path, extractor)))
}
