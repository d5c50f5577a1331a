//! HTTP helpers for the upload and chat endpoints.
//!
//! Client-side (`csr`): chat calls go through `gloo-net`; uploads use
//! `XMLHttpRequest` directly because `fetch` reports no upload progress.
//! Native builds: stubs returning errors, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` whose error is classified into the small
//! taxonomy in `net::error`. Nothing here panics or throws into the page.

#![allow(clippy::unused_async)]

#[cfg(feature = "csr")]
use std::{cell::RefCell, rc::Rc};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ChatError;
#[cfg(feature = "csr")]
use super::error::UploadError;
use super::transport::ChatTransport;
#[cfg(feature = "csr")]
use super::transport::{ProgressSender, UploadTransport};
use super::types::ChatMessage;
#[cfg(feature = "csr")]
use super::types::ChatHistory;
#[cfg(any(test, feature = "csr"))]
use super::types::UploadProgress;
#[cfg(feature = "csr")]
use crate::util::form::{FILE_FIELD, FORM_URLENCODED, encode_message_body};

/// Chat endpoint reached over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpChat {
    pub url: String,
}

impl ChatTransport for HttpChat {
    fn fetch_messages(&self) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, ChatError>> {
        fetch_messages(&self.url)
    }

    fn post_message(&self, text: &str) -> impl std::future::Future<Output = Result<(), ChatError>> {
        post_message(&self.url, text)
    }
}

/// Upload endpoint reached over `XMLHttpRequest`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct HttpUpload {
    pub url: String,
}

#[cfg(feature = "csr")]
impl UploadTransport for HttpUpload {
    type File = web_sys::File;

    fn upload(&self, file: &web_sys::File, progress: ProgressSender) -> impl std::future::Future<Output = Result<(), UploadError>> {
        upload_file(&self.url, file, progress)
    }
}

/// Fetch the full chat transcript from `GET {url}`.
///
/// # Errors
///
/// Returns `ChatError::Status` for non-OK responses, `ChatError::Network` if
/// the request never completed, and `ChatError::Decode` for malformed bodies.
pub async fn fetch_messages(url: &str) -> Result<Vec<ChatMessage>, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        let history: ChatHistory = resp.json().await.map_err(|e| ChatError::Decode(e.to_string()))?;
        Ok(history.messages)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable(url))
    }
}

/// Submit one chat line via `POST {url}` as `message=<encoded text>`.
///
/// # Errors
///
/// Returns `ChatError::Network` if the request could not be sent and
/// `ChatError::Status` for non-OK responses. Callers ignore both.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn post_message(url: &str, text: &str) -> Result<(), ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", FORM_URLENCODED)
            .body(encode_message_body(text))
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable(url))
    }
}

/// Upload `file` as multipart field `file` via `POST {url}`.
///
/// Progress notifications with a known total are pushed to `progress` while
/// the body is sent. The sender is dropped when this returns, closing the
/// channel.
///
/// # Errors
///
/// Returns `UploadError::Rejected(status)` for any status other than 200 and
/// `UploadError::Network` if the request never completed.
#[cfg(feature = "csr")]
pub async fn upload_file(url: &str, file: &web_sys::File, progress: ProgressSender) -> Result<(), UploadError> {
    use futures::channel::oneshot;
    use wasm_bindgen::{JsCast, closure::Closure};

    use super::error::classify_upload_status;

    let form = web_sys::FormData::new().map_err(|e| setup_failed("FormData", &e))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| setup_failed("FormData append", &e))?;

    let xhr = web_sys::XmlHttpRequest::new().map_err(|e| setup_failed("XMLHttpRequest", &e))?;
    xhr.open_with_async("POST", url, true)
        .map_err(|e| setup_failed("XMLHttpRequest open", &e))?;
    let upload = xhr.upload().map_err(|e| setup_failed("XMLHttpRequest upload", &e))?;

    let (tx, rx) = oneshot::channel::<Result<(), UploadError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onprogress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
        if !ev.length_computable() {
            return;
        }
        let update = progress_from_event(ev.loaded(), ev.total());
        if progress.unbounded_send(update).is_err() {
            log::debug!("upload progress receiver dropped");
        }
    });

    let load_xhr = xhr.clone();
    let load_tx = Rc::clone(&tx);
    let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let result = match load_xhr.status() {
            Ok(status) => classify_upload_status(status),
            Err(e) => {
                log::warn!("upload status unreadable: {e:?}");
                Err(UploadError::Network)
            }
        };
        complete(&load_tx, result);
    });

    let error_tx = Rc::clone(&tx);
    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        complete(&error_tx, Err(UploadError::Network));
    });

    upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| setup_failed("XMLHttpRequest send", &e))?;

    let result = match rx.await {
        Ok(result) => result,
        Err(_canceled) => Err(UploadError::Network),
    };

    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    drop(onprogress);
    drop(onload);
    drop(onerror);
    result
}

#[cfg(feature = "csr")]
fn complete(
    slot: &Rc<RefCell<Option<futures::channel::oneshot::Sender<Result<(), UploadError>>>>>,
    result: Result<(), UploadError>,
) {
    if let Some(tx) = slot.borrow_mut().take() {
        if tx.send(result).is_err() {
            log::debug!("upload receiver dropped before completion");
        }
    }
}

#[cfg(feature = "csr")]
fn setup_failed(stage: &str, err: &wasm_bindgen::JsValue) -> UploadError {
    log::warn!("upload setup failed at {stage}: {err:?}");
    UploadError::Network
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable(url: &str) -> ChatError {
    ChatError::Network(format!("{url}: not available outside the browser"))
}

/// Convert raw `ProgressEvent` byte counts into a progress notification.
#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_from_event(loaded: f64, total: f64) -> UploadProgress {
    let total = if total > 0.0 { Some(total as u64) } else { None };
    UploadProgress { loaded: loaded.max(0.0) as u64, total }
}
