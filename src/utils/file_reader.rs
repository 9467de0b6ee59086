use gloo_file::futures::read_as_data_url;
use gloo_file::File;
use web_sys::HtmlInputElement;

use crate::error::ValidationError;
use crate::utils::validation::is_image_mime;

/// First file selected in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    let files = input.files()?;
    files.get(0).map(File::from)
}

/// Reads an image file into a `data:` URL suitable for an `<img src>` or a JSON payload.
pub async fn read_image_as_data_url(file: &File) -> Result<String, ValidationError> {
    if !is_image_mime(&file.raw_mime_type()) {
        return Err(ValidationError::NotAnImage);
    }

    read_as_data_url(file).await.map_err(|e| {
        log::error!("❌ Could not read {}: {:?}", file.name(), e);
        ValidationError::NotAnImage
    })
}
