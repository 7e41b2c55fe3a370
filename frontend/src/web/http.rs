//! XHR 传输层
//!
//! 使用 `XmlHttpRequest` 而不是 `fetch`：只有 XHR 能报告上传进度。
//! 请求永远不会被中止，完成后由状态机凭据决定是否采用结果。

use js_sys::{Function, Promise};
use vtours::request::{HttpRequest, HttpResponse, PartValue, RequestBody};
use vtours::{HttpClient, TransportError, UploadFile, UploadProgress};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};

/// 浏览器中的待上传文件
#[derive(Debug, Clone, PartialEq)]
pub struct WebFile(pub web_sys::File);

impl UploadFile for WebFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

fn build_err(e: JsValue) -> TransportError {
    TransportError::Build(format!("{:?}", e))
}

fn network_err(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

fn form_data(parts: Vec<vtours::request::FormPart<WebFile>>) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(build_err)?;
    for part in parts {
        match part.value {
            PartValue::Text(text) => form.append_with_str(part.name, &text),
            PartValue::File(file) => {
                form.append_with_blob_and_filename(part.name, &file.0, &file.file_name())
            }
        }
        .map_err(build_err)?;
    }
    Ok(form)
}

/// 基于 XHR 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for WebHttpClient {
    type File = WebFile;

    async fn send(&self, req: HttpRequest<WebFile>) -> Result<HttpResponse, TransportError> {
        let xhr = XmlHttpRequest::new().map_err(build_err)?;
        xhr.open_with_async(req.method.as_str(), &req.url, true)
            .map_err(build_err)?;
        xhr.set_with_credentials(req.with_credentials);
        for (key, value) in &req.headers {
            xhr.set_request_header(key, value).map_err(build_err)?;
        }

        // 闭包必须活到请求结束
        let _on_progress = match req.on_upload_progress {
            Some(callback) => {
                let closure = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
                    let total = ev.length_computable().then(|| ev.total() as u64);
                    callback(UploadProgress::new(ev.loaded() as u64, total));
                });
                xhr.upload()
                    .map_err(build_err)?
                    .set_onprogress(Some(closure.as_ref().unchecked_ref()));
                Some(closure)
            }
            None => None,
        };

        // load 表示收到了响应（不论状态码）；error/abort 表示没有响应
        let done = Promise::new(&mut |resolve: Function, reject: Function| {
            xhr.set_onload(Some(&resolve));
            xhr.set_onerror(Some(&reject));
            xhr.set_onabort(Some(&reject));
        });

        match req.body {
            RequestBody::Empty => xhr.send(),
            RequestBody::Json(body) => xhr.send_with_opt_str(Some(&body)),
            RequestBody::Multipart(parts) => {
                let form = form_data(parts)?;
                xhr.send_with_opt_form_data(Some(&form))
            }
        }
        .map_err(network_err)?;

        JsFuture::from(done).await.map_err(network_err)?;

        let status = xhr.status().map_err(network_err)?;
        let body = xhr.response_text().ok().flatten().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}
