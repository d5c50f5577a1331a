//! Image preview decoding via `FileReader`.
//!
//! Reads the whole file as a `data:` URL. Requires a browser environment; on
//! failure the caller simply renders no preview.

#[cfg(feature = "csr")]
use std::{cell::RefCell, rc::Rc};

/// Read `file` as a `data:` URL. Returns `None` if the reader fails.
#[cfg(feature = "csr")]
pub async fn read_data_url(file: &web_sys::File) -> Option<String> {
    use futures::channel::oneshot;
    use wasm_bindgen::{JsCast, closure::Closure};

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {e:?}");
            return None;
        }
    };

    let (tx, rx) = oneshot::channel::<Option<String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let load_reader = reader.clone();
    let load_tx = Rc::clone(&tx);
    let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let url = match load_reader.result() {
            Ok(value) => value.as_string(),
            Err(e) => {
                log::warn!("FileReader result unavailable: {e:?}");
                None
            }
        };
        if let Some(tx) = load_tx.borrow_mut().take() {
            if tx.send(url).is_err() {
                log::debug!("preview receiver dropped before load");
            }
        }
    });

    let error_tx = Rc::clone(&tx);
    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            if tx.send(None).is_err() {
                log::debug!("preview receiver dropped before error");
            }
        }
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("FileReader could not start: {e:?}");
        return None;
    }

    let url = match rx.await {
        Ok(url) => url,
        Err(_canceled) => None,
    };

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(onload);
    drop(onerror);
    url
}
