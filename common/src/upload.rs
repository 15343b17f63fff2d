//! 一括アップロードファイルの受付ルール
//!
//! 受け付けるのは .xlsx と .csv の1ファイルのみ。中身の検証はサーバに任せる。

use crate::error::UploadError;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CSV_MIME: &str = "text/csv";

/// `<input type="file" accept=...>` 用
pub const ACCEPT_ATTR: &str =
    ".xlsx,.csv,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet,text/csv";

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Spreadsheet,
    Csv,
}

impl FileKind {
    /// 拡張子またはMIMEタイプから判定（どちらか一致すれば可）
    pub fn detect(file_name: &str, mime: &str) -> Option<FileKind> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".xlsx") || mime == XLSX_MIME {
            Some(FileKind::Spreadsheet)
        } else if lower.ends_with(".csv") || mime == CSV_MIME {
            Some(FileKind::Csv)
        } else {
            None
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            FileKind::Spreadsheet => XLSX_MIME,
            FileKind::Csv => CSV_MIME,
        }
    }
}

/// アップロード候補のメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), mime: mime.into(), size }
    }

    pub fn kind(&self) -> Option<FileKind> {
        FileKind::detect(&self.name, &self.mime)
    }

    /// "12.3 KB • Ready to process"
    pub fn status_line(&self) -> String {
        format!("{} • Ready to process", size_label(self.size))
    }
}

/// ドロップ/選択されたファイル群から受け付ける1件を選ぶ
///
/// 複数ファイルのドロップはまとめて拒否する。
pub fn select_upload(candidates: &[UploadCandidate]) -> Result<usize, UploadError> {
    match candidates {
        [] => Err(UploadError::Empty),
        [single] => match single.kind() {
            Some(_) => Ok(0),
            None => Err(UploadError::UnsupportedKind(single.name.clone())),
        },
        many => Err(UploadError::TooManyFiles(many.len())),
    }
}

/// バイト数をKB表記（小数1桁）
pub fn size_label(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// 選択中ファイル（常に0件か1件）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSlot<T> {
    file: Option<T>,
}

impl<T> Default for UploadSlot<T> {
    fn default() -> Self {
        Self { file: None }
    }
}

impl<T> UploadSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 置き換え（以前のファイルは破棄）
    pub fn replace(&mut self, file: T) -> &T {
        self.file.insert(file)
    }

    /// 解除。選択中だった場合 true
    pub fn clear(&mut self) -> bool {
        self.file.take().is_some()
    }

    pub fn current(&self) -> Option<&T> {
        self.file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, mime: &str) -> UploadCandidate {
        UploadCandidate::new(name, mime, 2048)
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(FileKind::detect("patients.xlsx", ""), Some(FileKind::Spreadsheet));
        assert_eq!(FileKind::detect("PATIENTS.CSV", ""), Some(FileKind::Csv));
        assert_eq!(FileKind::detect("patients.xls", ""), None);
        assert_eq!(FileKind::detect("notes.txt", "text/plain"), None);
    }

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(FileKind::detect("upload", XLSX_MIME), Some(FileKind::Spreadsheet));
        assert_eq!(FileKind::detect("upload", CSV_MIME), Some(FileKind::Csv));
    }

    #[test]
    fn test_select_single_accepted() {
        let files = vec![candidate("batch.csv", CSV_MIME)];
        assert_eq!(select_upload(&files), Ok(0));
    }

    #[test]
    fn test_select_rejects_multiple() {
        let files = vec![candidate("a.csv", CSV_MIME), candidate("b.csv", CSV_MIME)];
        assert_eq!(select_upload(&files), Err(UploadError::TooManyFiles(2)));
    }

    #[test]
    fn test_select_rejects_unsupported() {
        let files = vec![candidate("scan.pdf", "application/pdf")];
        assert_eq!(
            select_upload(&files),
            Err(UploadError::UnsupportedKind("scan.pdf".into()))
        );
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(select_upload(&[]), Err(UploadError::Empty));
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(0), "0.0 KB");
        assert_eq!(size_label(1024), "1.0 KB");
        assert_eq!(size_label(12_595), "12.3 KB");
        assert_eq!(candidate("a.csv", CSV_MIME).status_line(), "2.0 KB • Ready to process");
    }

    #[test]
    fn test_upload_slot_holds_at_most_one() {
        let mut slot = UploadSlot::new();
        assert!(slot.current().is_none());

        slot.replace("first.csv");
        slot.replace("second.xlsx");
        assert_eq!(slot.current(), Some(&"second.xlsx"));

        assert!(slot.clear());
        assert!(slot.current().is_none());
        assert!(!slot.clear());
    }
}
