use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_guard_state;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Renders its children only once the stored token has been confirmed by the server.
///
/// Give each protected route its own `key` so that moving between them remounts the guard.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let state = use_guard_state();

    if state.shows_protected() {
        html! { <>{props.children.clone()}</> }
    } else if state.redirects_to_sign_in() {
        html! { <Redirect<Route> to={Route::SignIn} /> }
    } else {
        html! {
            <div class="route-guard-pending" aria-busy="true">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        }
    }
}
