//! Browser file glue: client-side downloads and reading picked files.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views depend on the `FileSaver` trait so the generate flow can be driven
//! without a DOM. Blob/FormData helpers are hydrate-only and shared with the
//! fetch transport.

use crate::net::error::ApiError;
use crate::net::types::GeneratedFile;

/// Hands a received file to the user.
pub trait FileSaver {
    /// # Errors
    ///
    /// Returns [`ApiError::Browser`] if the save could not be triggered.
    fn save(&self, file: &GeneratedFile) -> Result<(), ApiError>;
}

/// Saves through a temporary `<a download>` element and an object URL.
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save(&self, file: &GeneratedFile) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let blob = bytes_to_blob(&file.bytes, &file.content_type)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| ApiError::Browser("document unavailable".to_owned()))?;
            let body = document
                .body()
                .ok_or_else(|| ApiError::Browser("document body unavailable".to_owned()))?;
            let anchor: web_sys::HtmlAnchorElement = document
                .create_element("a")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| ApiError::Browser("anchor element cast failed".to_owned()))?;

            anchor.set_href(&url);
            anchor.set_download(&file.file_name);
            body.append_child(&anchor).map_err(js_error)?;
            anchor.click();

            let _ = body.remove_child(&anchor);
            let _ = web_sys::Url::revoke_object_url(&url);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
            Err(ApiError::Browser("downloads require a browser".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[cfg(feature = "hydrate")]
pub(crate) fn bytes_to_blob(bytes: &[u8], content_type: &str) -> Result<web_sys::Blob, ApiError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

/// Wrap `file` as a single-field multipart form.
#[cfg(feature = "hydrate")]
pub(crate) fn form_data(field: &str, file: &crate::net::types::UploadFile) -> Result<web_sys::FormData, ApiError> {
    let blob = bytes_to_blob(&file.bytes, &file.content_type)?;
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}

/// Read a picked file into memory.
///
/// # Errors
///
/// Returns [`ApiError::Browser`] if the browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_upload(file: &web_sys::File) -> Result<crate::net::types::UploadFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = match file.type_() {
        t if t.is_empty() => "application/json".to_owned(),
        t => t,
    };
    Ok(crate::net::types::UploadFile { name: file.name(), content_type, bytes })
}
