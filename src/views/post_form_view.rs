use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ImagePicker, PhoneField};
use crate::hooks::{use_services, use_toast, EffectScope};
use crate::models::{PhoneCountry, PostType};
use crate::router::Route;
use crate::state::{PostField, PostForm};
use crate::utils::constants::POST_PHONE_MAX_DIGITS;

#[function_component(PostFormView)]
pub fn post_form_view() -> Html {
    let services = use_services();
    let notifier = use_toast();
    let navigator = use_navigator();

    let form = use_state(PostForm::default);
    let image = use_state(|| None::<String>);
    let post_type = use_state(|| None::<PostType>);
    let submitting = use_state(|| false);

    // The author's role tags every post
    {
        let services = services.clone();
        let notifier = notifier.clone();
        let post_type = post_type.clone();
        use_effect_with((), move |_| {
            let scope = EffectScope::new();
            {
                let scope = scope.clone();
                spawn_local(async move {
                    let token = services.access_token();
                    let result = services.api.fetch_post_type(&token).await;
                    if !scope.is_active() {
                        return;
                    }
                    match result {
                        Ok(fetched) => {
                            log::info!("🏷️ Posting as {}", fetched.as_str());
                            post_type.set(Some(fetched));
                        }
                        Err(e) => {
                            log::error!("❌ Failed to fetch post type: {}", e);
                            notifier.problem("Failed to fetch post type.");
                        }
                    }
                });
            }
            move || scope.cancel()
        });
    }

    let on_text = |field: PostField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(PostField::Description, area.value());
            form.set(next);
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(PostField::Phone, value);
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

    let on_image = {
        let image = image.clone();
        Callback::from(move |data_url: String| image.set(Some(data_url)))
    };

    let on_image_error = {
        let notifier = notifier.clone();
        Callback::from(move |message: String| notifier.problem(&message))
    };

    let on_submit = {
        let form = form.clone();
        let image = image.clone();
        let post_type = post_type.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let new_post = match form.to_new_post(*post_type, image.as_deref()) {
                Ok(new_post) => new_post,
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
                let token = services.access_token();
                match services.api.create_post(&token, &new_post).await {
                    Ok(response) => {
                        log::info!("✅ Post created for {}", new_post.company_name);
                        notifier.notify("Post Created", response.message.as_deref().unwrap_or_default());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Post creation failed: {}", e);
                        notifier.problem(&e.user_message("An error occurred during post creation."));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="post-form-screen">
            <div class="post-form-container">
                <h1>{"Create a Post"}</h1>

                <form class="post-form" onsubmit={on_submit}>
                    <ImagePicker
                        id="image"
                        label="Post image"
                        preview={(*image).clone().map(AttrValue::from)}
                        on_loaded={on_image}
                        on_error={on_image_error}
                    />

                    <div class="form-group">
                        <label for="companyName">{"Company name"}</label>
                        <input
                            type="text"
                            id="companyName"
                            name="companyName"
                            value={form.company_name.clone()}
                            oninput={on_text(PostField::CompanyName)}
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
                            oninput={on_text(PostField::Email)}
                            required=true
                        />
                    </div>

                    <PhoneField
                        country={form.phone_country}
                        number={form.phone.clone()}
                        on_country={on_country}
                        on_number={on_phone}
                        max_length={Some(POST_PHONE_MAX_DIGITS)}
                    />

                    <div class="form-group">
                        <label for="keywords">{"Keywords"}</label>
                        <input
                            type="text"
                            id="keywords"
                            name="keywords"
                            placeholder="Separate keywords with commas"
                            value={form.keywords.clone()}
                            oninput={on_text(PostField::Keywords)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            name="description"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        {if *submitting { "Publishing..." } else { "Create Post" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
