//! Reading browser files into memory for multipart submission.

use base64::{Engine as _, engine::general_purpose};
use payloads::MAX_IMAGE_SIZE;
use payloads::pending::FileHandle;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader};
use yew::Callback;

/// Data URL for previewing an in-memory image.
pub fn data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Read a selected file into a `FileHandle`, enforcing the size cap
/// before touching the file contents.
pub fn read_file(
    file: web_sys::File,
    on_loaded: Callback<FileHandle>,
    on_error: Callback<String>,
) {
    let size = file.size() as usize;
    if size > MAX_IMAGE_SIZE {
        on_error.emit(format!(
            "File is too large ({:.1}MB). Maximum size is {}MB.",
            size as f64 / 1_048_576.0,
            MAX_IMAGE_SIZE / 1_048_576
        ));
        return;
    }

    let name = file.name();
    let reader = FileReader::new().unwrap();
    let reader_clone = reader.clone();

    let onload = Closure::wrap(Box::new(move |_: Event| {
        let result = reader_clone.result().unwrap();
        let array = js_sys::Uint8Array::new(&result);
        on_loaded.emit(FileHandle {
            name: name.clone(),
            bytes: array.to_vec(),
        });
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.read_as_array_buffer(&file).unwrap();
    onload.forget();
}
