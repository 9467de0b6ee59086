use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::RouteGuard;
use crate::models::PostType;
use crate::views::{DashboardView, PostFormView, RoleSelectView, SignInView, SignUpView};

#[derive(Routable, PartialEq, Eq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    /// Expects `?role=orderGiver|devTeam`.
    #[at("/sign-up")]
    SignUp,
    #[at("/acceuil")]
    RoleSelect,
    #[at("/dashboard")]
    Dashboard,
    #[at("/sheet-in")]
    CreatePost,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of the sign-up route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleQuery {
    pub role: PostType,
}

impl Route {
    /// Routes rendered behind a `RouteGuard`.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::CreatePost)
    }

    /// Key of the guard wrapping this route. Distinct per route, so switching
    /// between protected routes mounts a fresh guard and checks the token again.
    pub fn guard_key(&self) -> String {
        format!("guard:{}", self.to_path())
    }
}

fn guarded(route: &Route, view: Html) -> Html {
    html! {
        <RouteGuard key={route.guard_key()}>
            {view}
        </RouteGuard>
    }
}

pub fn switch(route: Route) -> Html {
    let view = match &route {
        Route::Home | Route::SignIn | Route::NotFound => html! { <SignInView /> },
        Route::SignUp => html! { <SignUpView /> },
        Route::RoleSelect => html! { <RoleSelectView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::CreatePost => html! { <PostFormView /> },
    };

    if route.is_protected() {
        guarded(&route, view)
    } else {
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_published_links() {
        assert_eq!(Route::SignIn.to_path(), "/sign-in");
        assert_eq!(Route::SignUp.to_path(), "/sign-up");
        assert_eq!(Route::RoleSelect.to_path(), "/acceuil");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::CreatePost.to_path(), "/sheet-in");
    }

    #[test]
    fn only_dashboard_and_post_form_are_protected() {
        assert!(Route::Dashboard.is_protected());
        assert!(Route::CreatePost.is_protected());
        for open in [Route::Home, Route::SignIn, Route::SignUp, Route::RoleSelect, Route::NotFound] {
            assert!(!open.is_protected(), "{:?} should be public", open);
        }
    }

    #[test]
    fn each_protected_route_gets_its_own_guard() {
        assert_ne!(Route::Dashboard.guard_key(), Route::CreatePost.guard_key());
        assert_eq!(Route::Dashboard.guard_key(), Route::Dashboard.guard_key());
    }

    #[test]
    fn role_query_only_accepts_known_roles() {
        let parsed: RoleQuery = serde_json::from_str(r#"{"role":"devTeam"}"#).unwrap();
        assert_eq!(parsed.role, PostType::DevTeam);
        assert!(serde_json::from_str::<RoleQuery>(r#"{"role":"admin"}"#).is_err());
        assert!(serde_json::from_str::<RoleQuery>("{}").is_err());
    }
}
