// ============================================================================
// SERVICES CONTEXT - session store and API client shared through Yew context
// ============================================================================

use yew::prelude::*;

use crate::services::{ApiClient, HttpTokenValidator};
use crate::stores::SessionStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppServices {
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppServices {
    pub fn validator(&self) -> HttpTokenValidator {
        HttpTokenValidator::new(self.api.clone())
    }

    /// Stored access token, or an empty string when signed out.
    pub fn access_token(&self) -> String {
        self.session.get().access_token().unwrap_or_default().to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    let services = use_state(AppServices::default);

    html! {
        <ContextProvider<AppServices> context={(*services).clone()}>
            {props.children.clone()}
        </ContextProvider<AppServices>>
    }
}

/// Services from the nearest provider; defaults when rendered outside one.
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_default()
}
