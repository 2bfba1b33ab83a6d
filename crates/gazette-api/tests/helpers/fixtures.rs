//! Test fixtures: PDF blobs and multipart upload forms.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};

/// PDF-shaped bytes of exactly `len` bytes (only the length matters to the
/// server; content is discarded after measuring).
pub fn pdf_bytes(len: usize) -> Vec<u8> {
    let mut data = b"%PDF-1.4\n".to_vec();
    data.resize(len.max(data.len()), b' ');
    data
}

/// Build an upload form: an optional `publish_date` text part plus one
/// `file` part per (filename, content_type, size) entry.
pub fn issue_form(publish_date: &str, files: &[(&str, &str, usize)]) -> MultipartForm {
    let mut form = MultipartForm::new();
    if !publish_date.is_empty() {
        form = form.add_text("publish_date", publish_date);
    }
    for (filename, content_type, size) in files {
        let part = Part::bytes(pdf_bytes(*size))
            .file_name(*filename)
            .mime_type(*content_type);
        form = form.add_part("file", part);
    }
    form
}
