//! Drag-and-drop upload form with image preview and progress bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dropped or picked `FileList` is kept in the file input, mirroring the
//! browser's own form semantics; `UploadState` tracks everything shown to the
//! user. The upload itself runs through `state::upload::run_upload` over
//! `net::api::HttpUpload`; on success the file input is cleared here.

use leptos::prelude::*;

use crate::config::{ClientConfig, ids};
#[cfg(feature = "csr")]
use crate::net::api::HttpUpload;
#[cfg(feature = "csr")]
use crate::state::upload::{SelectedFile, run_upload};
use crate::state::upload::UploadState;
use crate::util::form::{FILE_FIELD, progress_width};

/// Upload form: drop target, file picker, preview, progress bar, and status.
#[component]
pub fn UploadWidget() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let config = expect_context::<ClientConfig>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_enter);
    };

    let on_dragleave = move |_ev: leptos::ev::DragEvent| {
        upload.update(UploadState::drag_leave);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_leave);

        #[cfg(feature = "csr")]
        {
            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            if let Some(input) = input_ref.get_untracked() {
                input.set_files(Some(&files));
            }
            select_file(upload, file);
        }
    };

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            match first_input_file(input_ref) {
                Some(file) => select_file(upload, file),
                None => upload.update(UploadState::clear_selection),
            }
        }
    };

    let upload_url = config.upload_url.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let file = first_input_file(input_ref);
            let Some(Ok(file)) = upload.try_update(|u| u.begin_submit(file)) else {
                return;
            };
            let transport = HttpUpload { url: upload_url.clone() };
            leptos::task::spawn_local(async move {
                if run_upload(&upload, &transport, file).await {
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("upload to {upload_url} requires a browser");
        }
    };

    view! {
        <form
            id=ids::UPLOAD_FORM
            class="upload-form"
            class:dragover=move || upload.with(|u| u.drag_active)
            action=config.upload_url
            method="post"
            enctype="multipart/form-data"
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:submit=on_submit
        >
            <p class="upload-form__hint">"Drop a file here or choose one"</p>
            <input id=ids::FILE_INPUT type="file" name=FILE_FIELD node_ref=input_ref on:change=on_change/>
            <div id=ids::PREVIEW class="upload-form__preview">
                {move || upload.with(|u| u.preview.clone()).map(|src| view! { <img src=src alt="Preview"/> })}
            </div>
            <div class="upload-form__progress">
                <div
                    id=ids::PROGRESS_BAR
                    class="upload-form__progress-bar"
                    style:width=move || progress_width(upload.with(|u| u.progress_percent))
                ></div>
            </div>
            <button class="btn btn--primary" type="submit">"Upload"</button>
            <div id=ids::STATUS class="upload-form__status">{move || upload.with(|u| u.status.clone())}</div>
        </form>
    }
}

#[cfg(feature = "csr")]
fn first_input_file(input_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input_ref.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0))
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(file: &web_sys::File) -> u64 {
    file.size().max(0.0) as u64
}

/// Record `file` as the selection and decode an image preview if applicable.
#[cfg(feature = "csr")]
fn select_file(upload: RwSignal<UploadState>, file: web_sys::File) {
    let selected = SelectedFile { name: file.name(), mime_type: file.type_(), size: file_size(&file) };
    let is_image = selected.is_image();
    let Some(seq) = upload.try_update(|u| u.select(selected)) else {
        return;
    };
    if !is_image {
        return;
    }
    leptos::task::spawn_local(async move {
        if let Some(data_url) = crate::util::preview::read_data_url(&file).await {
            let applied = upload.try_update(|u| u.apply_preview(seq, data_url));
            if applied != Some(true) {
                log::debug!("discarded stale preview for selection {seq}");
            }
        }
    });
}
