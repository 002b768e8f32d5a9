//! Browser-side CSV download.

use chrono::Utc;
use contracts::shared::csv_export::{build_csv_for, export_filename, with_bom, CsvExportable, ExportError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Exports records to `{prefix}_{today}.csv`.
pub fn export_rows<T: CsvExportable>(items: &[T], prefix: &str) -> Result<(), ExportError> {
    let content = build_csv_for(items)?;
    let filename = export_filename(prefix, Utc::now().date_naive());
    download_csv(&content, &filename)?;
    log::info!("exported {} rows to {filename}", items.len());
    Ok(())
}

/// Downloads already built CSV content, BOM prepended.
pub fn download_csv(content: &str, filename: &str) -> Result<(), ExportError> {
    let blob = create_csv_blob(&with_bom(content))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| browser("create blob", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let no_dom = || ExportError::Browser("document is not available".into());
    let window = web_sys::window().ok_or_else(no_dom)?;
    let document = window.document().ok_or_else(no_dom)?;
    let body = document.body().ok_or_else(no_dom)?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| browser("create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser("create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser("cast anchor", e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser("style anchor", e))?;

    body.append_child(&anchor).map_err(|e| browser("append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| browser("remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser("revoke URL", e))
}

fn browser(step: &str, err: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("failed to {step}: {err:?}"))
}
