//! Page-ordered plain text from a local PDF.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("PDF extraction aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// Extracts text from every page in order and concatenates it with no separator.
///
/// Parsing runs on the blocking pool. A panic inside the PDF library surfaces
/// as `ExtractError::Aborted` instead of taking the worker down.
pub async fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let path: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || extract_text_blocking(&path)).await?
}

fn extract_text_blocking(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(pages.concat())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use std::io::Write;

    /// Builds a PDF with one page per entry, each page showing its text in Courier.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[tokio::test]
    async fn test_extracts_pages_in_order() {
        let file = write_temp(&build_pdf(&["Python", "Kubernetes"]));

        let text = extract_text(file.path()).await.unwrap();

        let python = text.find("Python").expect("first page text");
        let kubernetes = text.find("Kubernetes").expect("second page text");
        assert!(python < kubernetes, "{text:?}");
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_to_parse() {
        let file = write_temp(b"this is not a pdf");

        let err = extract_text(file.path()).await.unwrap_err();

        assert!(!matches!(err, ExtractError::Io(_)), "{err}");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = extract_text(&dir.path().join("absent.pdf"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Io(_)));
    }
}
