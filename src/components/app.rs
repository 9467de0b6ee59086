use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::hooks::ServicesProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ServicesProvider>
            <ToastProvider>
                <BrowserRouter>
                    <main class="app">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ToastProvider>
        </ServicesProvider>
    }
}
