//! Spreadsheet uploads.

use crate::error::{ApiError, Result};

pub const SPREADSHEET_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

/// Extension check on the file name only; the content is never inspected.
pub fn is_spreadsheet_name(name: &str) -> bool {
    SPREADSHEET_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// A file that passed client-side validation and can be posted to `/upload_excel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    filename: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let filename = filename.into();
        if !is_spreadsheet_name(&filename) {
            return Err(ApiError::UnsupportedFile(filename));
        }
        Ok(Self { filename, bytes })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_type(&self) -> &'static str {
        if self.filename.ends_with(".xlsx") {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        } else {
            "application/vnd.ms-excel"
        }
    }

    pub(crate) fn into_parts(self) -> (String, Vec<u8>) {
        (self.filename, self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_excel_extensions() {
        assert!(is_spreadsheet_name("tasks.xlsx"));
        assert!(is_spreadsheet_name("legacy.xls"));
        assert!(is_spreadsheet_name("q3.report.xlsx"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!is_spreadsheet_name("tasks.csv"));
        assert!(!is_spreadsheet_name("tasks.xlsx.pdf"));
        assert!(!is_spreadsheet_name("xlsx"));
        assert!(!is_spreadsheet_name(""));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_spreadsheet_name("TASKS.XLSX"));
    }

    #[test]
    fn test_file_upload_validation() {
        let upload = FileUpload::new("sprint.xlsx", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.filename(), "sprint.xlsx");
        assert_eq!(upload.len(), 3);
        assert!(upload.content_type().contains("spreadsheetml"));

        let err = FileUpload::new("notes.txt", vec![]).unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedFile(name) if name == "notes.txt"));
    }

    #[test]
    fn test_xls_content_type() {
        let upload = FileUpload::new("old.xls", vec![0]).unwrap();
        assert_eq!(upload.content_type(), "application/vnd.ms-excel");
    }
}
