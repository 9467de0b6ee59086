use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_guard_state;
use crate::models::PostType;
use crate::router::{RoleQuery, Route};
use crate::state::GuardState;

/// Welcome screen: pick a role, then sign up with it.
#[function_component(RoleSelectView)]
pub fn role_select_view() -> Html {
    let navigator = use_navigator();
    let guard = use_guard_state();

    {
        let navigator = navigator.clone();
        use_effect_with(guard, move |guard| {
            if *guard == GuardState::Authorized {
                log::info!("🔐 Session still valid, skipping role selection");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
        });
    }

    let choose = |role: PostType| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            if let Err(e) = navigator.push_with_query(&Route::SignUp, &RoleQuery { role }) {
                log::error!("❌ Could not encode the sign-up query: {}", e);
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container role-select">
                <div class="auth-header">
                    <h1>{"Welcome"}</h1>
                    <p>{"Who are you signing up as?"}</p>
                </div>

                <div class="role-options">
                    <button type="button" class="btn-primary" onclick={choose(PostType::OrderGiver)}>
                        {PostType::OrderGiver.label()}
                    </button>
                    <button type="button" class="btn-secondary" onclick={choose(PostType::DevTeam)}>
                        {PostType::DevTeam.label()}
                    </button>
                </div>

                <p class="auth-footer">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
