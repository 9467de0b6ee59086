use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::PasswordField;
use crate::hooks::{use_services, use_toast};
use crate::router::Route;
use crate::state::{SignInField, SignInForm, SignInNext, SignInOutcome};

#[function_component(SignInView)]
pub fn sign_in_view() -> Html {
    let services = use_services();
    let notifier = use_toast();
    let navigator = use_navigator();
    let form = use_state(SignInForm::default);
    let submitting = use_state(|| false);
    // Dropping the component drops the timeout, which cancels the redirect
    let pending_redirect: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(SignInField::Email, input.value());
            form.set(next);
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(SignInField::Password, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let request = form.to_request();
            let services = services.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let pending_redirect = pending_redirect.clone();

            spawn_local(async move {
                let result = services.api.login(&request).await;
                if let Err(e) = &result {
                    log::error!("❌ Sign-in failed: {}", e);
                }

                let mut outcome = SignInOutcome::from_result(result);
                if let Some(session) = &outcome.session {
                    match services.session.set(session) {
                        Ok(()) => log::info!("✅ Signed in as {}", request.email),
                        Err(e) => {
                            log::error!("❌ Signed in but could not store the session: {}", e);
                            outcome = SignInOutcome::storage_failed();
                        }
                    }
                }
                notifier.notify(outcome.title, &outcome.message);

                match (outcome.next, navigator) {
                    (SignInNext::Dashboard, Some(navigator)) => navigator.push(&Route::Dashboard),
                    (SignInNext::SignUpAfter { delay_ms }, Some(navigator)) => {
                        let timeout = Timeout::new(delay_ms, move || navigator.push(&Route::SignUp));
                        *pending_redirect.borrow_mut() = Some(timeout);
                    }
                    _ => {}
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <h1>{"Sign In"}</h1>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_email}
                            required=true
                        />
                    </div>

                    <PasswordField value={form.password.clone()} on_input={on_password} />

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        {if *submitting { "Signing in..." } else { "Sign In" }}
                    </button>

                    <p class="auth-footer">
                        {"New here? "}
                        <Link<Route> to={Route::RoleSelect}>{"Create an account"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
