use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::PhoneCountry;

#[derive(Properties, PartialEq)]
pub struct PhoneFieldProps {
    pub country: PhoneCountry,
    pub number: AttrValue,
    pub on_country: Callback<PhoneCountry>,
    pub on_number: Callback<String>,
    #[prop_or_default]
    pub max_length: Option<usize>,
}

/// Dial-code selector next to the local number input.
#[function_component(PhoneField)]
pub fn phone_field(props: &PhoneFieldProps) -> Html {
    let on_select = {
        let on_country = props.on_country.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(country) = PhoneCountry::from_code(&select.value()) {
                on_country.emit(country);
            }
        })
    };

    let on_input = {
        let on_number = props.on_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_number.emit(input.value());
        })
    };

    html! {
        <div class="form-group phone-field">
            <label for="phone">{"Phone"}</label>
            <div class="phone-row">
                <select id="phoneCountry" name="phoneCountry" onchange={on_select}>
                    { for PhoneCountry::ALL.iter().map(|c| html! {
                        <option value={c.code()} selected={*c == props.country}>{c.dial_code()}</option>
                    }) }
                </select>
                <input
                    type="tel"
                    id="phone"
                    name="phone"
                    inputmode="numeric"
                    value={props.number.clone()}
                    maxlength={props.max_length.map(|m| m.to_string())}
                    oninput={on_input}
                    required=true
                />
            </div>
        </div>
    }
}
