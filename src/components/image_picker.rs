use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::file_reader::{read_image_as_data_url, selected_file};

#[derive(Properties, PartialEq)]
pub struct ImagePickerProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// Data URL of the current image.
    #[prop_or_default]
    pub preview: Option<AttrValue>,
    pub on_loaded: Callback<String>,
    pub on_error: Callback<String>,
}

/// File input that hands back the picked image as a data URL.
#[function_component(ImagePicker)]
pub fn image_picker(props: &ImagePickerProps) -> Html {
    let onchange = {
        let on_loaded = props.on_loaded.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                return;
            };

            let on_loaded = on_loaded.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                match read_image_as_data_url(&file).await {
                    Ok(data_url) => {
                        log::info!("🖼️ {} loaded ({} bytes encoded)", file.name(), data_url.len());
                        on_loaded.emit(data_url);
                    }
                    Err(e) => on_error.emit(e.to_string()),
                }
            });
        })
    };

    html! {
        <label class="image-picker" for={props.id.clone()}>
            <div class="image-preview">
                {match &props.preview {
                    Some(src) => html! { <img src={src.clone()} alt={props.label.clone()} /> },
                    None => html! { <span class="image-placeholder">{props.label.clone()}</span> },
                }}
            </div>
            <input
                type="file"
                id={props.id.clone()}
                name={props.id.clone()}
                accept="image/*"
                {onchange}
            />
        </label>
    }
}
