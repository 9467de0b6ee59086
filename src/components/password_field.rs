use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let visible = use_state(|| false);

    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <div class="form-group password-field">
            <label for="password">{"Password"}</label>
            <div class="password-row">
                <input
                    type={if *visible { "text" } else { "password" }}
                    id="password"
                    name="password"
                    value={props.value.clone()}
                    oninput={on_input}
                    required=true
                />
                <button type="button" class="btn-toggle-password" onclick={toggle}>
                    {if *visible { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
