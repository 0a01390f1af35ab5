//! REST APIクライアント
//!
//! 同一オリジンのサーバへの薄いラッパ。1関数1リクエストで、
//! HTTPステータスを fileshelf_common::Error に正規化する

use std::cell::RefCell;
use std::rc::Rc;

use fileshelf_common::{Error, FileRecord, MetadataRequest, MetadataUpdate, Result};
use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    File, FormData, ProgressEvent, Request, RequestInit, RequestMode, Response, XmlHttpRequest,
};

const LIST_URL: &str = "/list";
const DELETE_URL: &str = "/delete";
const UPLOAD_URL: &str = "/upload";
const DOWNLOAD_URL: &str = "/download";
const METADATA_URL: &str = "/metadata";

/// fetch 1回分の共通処理
async fn fetch(
    method: &str,
    url: &str,
    json_body: Option<&str>,
) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if json_body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

/// GET /list
pub async fn list_files() -> Result<Vec<FileRecord>> {
    let resp = fetch("GET", LIST_URL, None).await.map_err(|_| Error::Load)?;
    if !resp.ok() {
        return Err(Error::Load);
    }
    let text = JsFuture::from(resp.text().map_err(|_| Error::Load)?)
        .await
        .map_err(|_| Error::Load)?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(|_| Error::Load)
}

/// DELETE /delete/{filename}
pub async fn delete_file(filename: &str) -> Result<()> {
    let url = format!("{DELETE_URL}/{}", js_sys::encode_uri_component(filename));
    let resp = fetch("DELETE", &url, None)
        .await
        .map_err(|_| Error::Delete)?;
    match resp.status() {
        200..=299 => Ok(()),
        404 => Err(Error::NotFound),
        _ => Err(Error::Delete),
    }
}

/// POST /metadata
///
/// ボディは { ファイル名: 変更フィールドのみ } の1件
pub async fn edit_file_metadata(filename: &str, update: &MetadataUpdate) -> Result<()> {
    let mut request = MetadataRequest::new();
    request.insert(filename.to_string(), update.clone());
    let body = serde_json::to_string(&request).map_err(|_| Error::Metadata)?;

    let resp = fetch("POST", METADATA_URL, Some(&body))
        .await
        .map_err(|_| Error::Metadata)?;
    match resp.status() {
        200..=299 => Ok(()),
        404 => Err(Error::NotFound),
        _ => Err(Error::Metadata),
    }
}

/// POST /upload (multipart)
///
/// 送信バイト数に応じて on_progress に 0–100 の進捗率を渡すため、
/// fetch ではなく XMLHttpRequest を使う
pub async fn upload_file(file: &File, on_progress: impl Fn(f64) + 'static) -> Result<()> {
    let form = FormData::new().map_err(|_| Error::Upload)?;
    form.append_with_blob("file", file).map_err(|_| Error::Upload)?;

    let xhr = XmlHttpRequest::new().map_err(|_| Error::Upload)?;
    xhr.open("POST", UPLOAD_URL).map_err(|_| Error::Upload)?;

    let onprogress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() && ev.total() > 0.0 {
            on_progress(ev.loaded() / ev.total() * 100.0);
        }
    });
    if let Ok(upload) = xhr.upload() {
        upload.set_onprogress(Some(onprogress.as_ref().unchecked_ref()));
    }
    onprogress.forget();

    // onload/onerror のコールバックを Future に橋渡しする
    let (tx, rx) = oneshot::channel::<Result<()>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        let xhr = xhr.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let outcome = if xhr.status().unwrap_or(0) == 200 {
                Ok(())
            } else {
                Err(Error::Upload)
            };
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        })
    };
    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(Error::Upload));
            }
        })
    };
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| Error::Upload)?;

    rx.await.unwrap_or(Err(Error::Upload))
}

/// /download/{filename} へ遷移してブラウザにダウンロードさせる。
/// エラーは表面化しない（fire-and-forget）
pub fn download_file(filename: &str) {
    let window = web_sys::window().unwrap();
    let url = format!("{DOWNLOAD_URL}/{}", js_sys::encode_uri_component(filename));
    let _ = window.location().set_href(&url);
}
