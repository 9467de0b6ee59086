use yew::prelude::*;

use crate::hooks::{ToastAction, ToastList};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Holds the toast list and renders it above the rest of the app.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let dispatcher = list.dispatcher();

    let toasts = list.toasts.iter().map(|toast| {
        let onclick = {
            let dispatcher = dispatcher.clone();
            let id = toast.id;
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
        };
        html! {
            <div key={toast.id.to_string()} class="toast" role="status" {onclick}>
                <strong class="toast-title">{&toast.title}</strong>
                <p class="toast-description">{&toast.description}</p>
            </div>
        }
    });

    html! {
        <ContextProvider<UseReducerDispatcher<ToastList>> context={dispatcher.clone()}>
            {props.children.clone()}
            <div class="toast-viewport">
                {for toasts}
            </div>
        </ContextProvider<UseReducerDispatcher<ToastList>>>
    }
}
