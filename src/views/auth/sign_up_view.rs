use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ImagePicker, PasswordField, PhoneField};
use crate::hooks::{use_services, use_toast};
use crate::models::{PhoneCountry, Session};
use crate::router::{RoleQuery, Route};
use crate::state::{SignUpField, SignUpForm};
use crate::utils::constants::SIGN_UP_PHONE_DIGITS;

#[function_component(SignUpView)]
pub fn sign_up_view() -> Html {
    let services = use_services();
    let notifier = use_toast();
    let navigator = use_navigator();
    let role = use_location()
        .and_then(|location| location.query::<RoleQuery>().ok())
        .map(|query| query.role);

    let form = use_state(SignUpForm::default);
    // Kept apart from the form: the file read resolves after later keystrokes
    let logo = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let Some(role) = role else {
        log::info!("ℹ️ Sign-up opened without a role, sending to role selection");
        return html! { <Redirect<Route> to={Route::RoleSelect} /> };
    };

    let on_text = |field: SignUpField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(SignUpField::Password, value);
            form.set(next);
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(SignUpField::Phone, value);
            form.set(next);
        })
    };

    let on_country = {
        let form = form.clone();
        Callback::from(move |country: PhoneCountry| {
            let mut next = (*form).clone();
            next.phone_country = country;
            form.set(next);
        })
    };

    let on_logo = {
        let logo = logo.clone();
        Callback::from(move |data_url: String| logo.set(Some(data_url)))
    };

    let on_logo_error = {
        let notifier = notifier.clone();
        Callback::from(move |message: String| notifier.problem(&message))
    };

    let on_submit = {
        let form = form.clone();
        let logo = logo.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.to_request(role, logo.as_deref()) {
                Ok(request) => request,
                Err(e) => {
                    notifier.problem(&e.to_string());
                    return;
                }
            };
            submitting.set(true);

            let services = services.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match services.api.register(&request).await {
                    Ok(response) => {
                        let session = Session::new(response.token, response.refresh);
                        if let Err(e) = services.session.set(&session) {
                            log::error!("❌ Registered but could not store the session: {}", e);
                        }
                        log::info!("✅ Account created for {}", request.email);
                        notifier.notify("Account created", response.message.as_deref().unwrap_or_default());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        notifier.problem(&e.user_message("An error occurred during registration."));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container register-container">
                <div class="auth-header">
                    <h1>{"Create your account"}</h1>
                    <p>{format!("Signing up as {}", role.label())}</p>
                </div>

                <form class="auth-form register-form" onsubmit={on_submit}>
                    <ImagePicker
                        id="logo"
                        label="Company logo"
                        preview={(*logo).clone().map(AttrValue::from)}
                        on_loaded={on_logo}
                        on_error={on_logo_error}
                    />

                    <div class="form-group">
                        <label for="companyName">{"Company name"}</label>
                        <input
                            type="text"
                            id="companyName"
                            name="companyName"
                            value={form.company_name.clone()}
                            oninput={on_text(SignUpField::CompanyName)}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_text(SignUpField::Email)}
                            required=true
                        />
                    </div>

                    <PasswordField value={form.password.clone()} on_input={on_password} />

                    <PhoneField
                        country={form.phone_country}
                        number={form.phone.clone()}
                        on_country={on_country}
                        on_number={on_phone}
                        max_length={Some(SIGN_UP_PHONE_DIGITS)}
                    />

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        {if *submitting { "Creating account..." } else { "Sign Up" }}
                    </button>

                    <p class="auth-footer">
                        {"Already registered? "}
                        <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
