//! Upload widget state: drag highlight, selection, preview, progress, status.
//!
//! DESIGN
//! ======
//! The binary file handle stays in the `<input type="file">` element; this
//! struct mirrors only its metadata. `selection_seq` increments on every
//! selection so an image decode that finishes after a newer selection is
//! discarded instead of rendering a stale preview. Nothing prevents a second
//! submit while one is running, so outstanding uploads are counted rather
//! than flagged.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use futures::StreamExt;

use super::store::Store;
use crate::net::error::{UPLOAD_SUCCESS_MESSAGE, UploadError};
use crate::net::transport::UploadTransport;
use crate::net::types::UploadProgress;
use crate::util::form::is_image_mime;

/// Metadata of the file currently held by the file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl SelectedFile {
    /// Whether this file gets an inline image preview.
    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    /// Name and size as shown in log lines.
    pub fn label(&self) -> String {
        format!("{} ({} bytes)", self.name, self.size)
    }
}

/// State for the upload form.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    /// Pointer is dragging over the drop target.
    pub drag_active: bool,
    pub selected: Option<SelectedFile>,
    pub selection_seq: u64,
    /// `data:` URL of the rendered preview image, if any.
    pub preview: Option<String>,
    /// Progress bar width in percent.
    pub progress_percent: f64,
    /// Status line under the form; empty when cleared.
    pub status: String,
    /// Submissions started but not yet finished.
    pub uploads_in_flight: u32,
}

impl UploadState {
    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Record a new selection and clear the preview.
    ///
    /// Returns the selection sequence the caller must hand back to
    /// [`UploadState::apply_preview`] once decoding finishes.
    pub fn select(&mut self, file: SelectedFile) -> u64 {
        self.selection_seq += 1;
        self.preview = None;
        self.selected = Some(file);
        self.selection_seq
    }

    /// The file input changed to an empty list. The preview is left as is.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Install a decoded preview if `seq` is still the current selection and
    /// that selection is an image. Returns whether the preview was applied.
    pub fn apply_preview(&mut self, seq: u64, data_url: String) -> bool {
        let current_is_image = self.selected.as_ref().is_some_and(SelectedFile::is_image);
        if seq != self.selection_seq || !current_is_image {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// Start a submission: clear status, reset progress, and hand back the
    /// file handle to upload.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::NoFileSelected` (and shows it) when `file` is
    /// `None`; no request should be sent in that case.
    pub fn begin_submit<F>(&mut self, file: Option<F>) -> Result<F, UploadError> {
        self.status.clear();
        self.progress_percent = 0.0;
        let Some(file) = file else {
            self.status = UploadError::NoFileSelected.to_string();
            return Err(UploadError::NoFileSelected);
        };
        self.uploads_in_flight += 1;
        Ok(file)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploads_in_flight > 0
    }

    /// Apply one progress notification. Unknown totals and notifications
    /// arriving once every upload has finished are ignored.
    pub fn apply_progress(&mut self, progress: UploadProgress) {
        if !self.is_uploading() {
            return;
        }
        if let Some(percent) = progress.percent() {
            self.progress_percent = percent.clamp(0.0, 100.0);
        }
    }

    /// Apply the terminal outcome of an upload.
    ///
    /// Returns `true` on success so the caller can clear the file input.
    pub fn finish(&mut self, result: &Result<(), UploadError>) -> bool {
        self.uploads_in_flight = self.uploads_in_flight.saturating_sub(1);
        self.progress_percent = 0.0;
        match result {
            Ok(()) => {
                self.status = UPLOAD_SUCCESS_MESSAGE.to_owned();
                self.selected = None;
                true
            }
            Err(e) => {
                self.status = e.to_string();
                false
            }
        }
    }
}

/// Run one upload that [`UploadState::begin_submit`] already accepted.
///
/// Progress notifications are drained concurrently and the drain is joined
/// before the outcome is applied, so no queued notification lands after
/// `finish`. Returns `true` on success; the caller then clears the file input.
pub async fn run_upload<S, T>(store: &S, transport: &T, file: T::File) -> bool
where
    S: Store<UploadState>,
    T: UploadTransport,
{
    let label = store
        .peek(|u| u.selected.as_ref().map(SelectedFile::label))
        .flatten()
        .unwrap_or_else(|| "file".to_owned());
    log::info!("uploading {label}");

    let (tx, mut rx) = futures::channel::mpsc::unbounded();
    let drain = async {
        while let Some(progress) = rx.next().await {
            store.modify(|u| u.apply_progress(progress));
        }
    };
    let (result, ()) = futures::join!(transport.upload(&file, tx), drain);

    match &result {
        Ok(()) => log::info!("upload of {label} complete"),
        Err(e) => log::warn!("upload of {label} failed: {e}"),
    }
    store.modify(|u| u.finish(&result)) == Some(true)
}
