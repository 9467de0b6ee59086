// ============================================================================
// DASHBOARD VIEW - paginated list of the counterpart role's posts
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_services, use_toast, EffectScope};
use crate::models::{PhoneCountry, Post, PostType};
use crate::router::Route;
use crate::state::{DashboardFilters, FilterAction};
use crate::views::PostCard;

const ALL_COUNTRIES: &str = "all";

/// Title and subtitle; anything but a dev team reads as an order giver.
fn heading_for(viewer: Option<PostType>) -> (&'static str, &'static str) {
    match viewer {
        Some(PostType::DevTeam) => ("Dev Team Dashboard", "Manage and view posts from order givers"),
        _ => ("Order Giver Dashboard", "Manage and view posts from dev teams"),
    }
}

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let services = use_services();
    let notifier = use_toast();
    let navigator = use_navigator();

    let filters = use_reducer(DashboardFilters::default);
    let viewer = use_state(|| None::<PostType>);
    let posts = use_state(Vec::<Post>::new);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| true);

    {
        let services = services.clone();
        let notifier = notifier.clone();
        let viewer = viewer.clone();
        let posts = posts.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        use_effect_with((*filters).clone(), move |filters| {
            let scope = EffectScope::new();
            let filters = filters.clone();
            loading.set(true);
            {
                let scope = scope.clone();
                spawn_local(async move {
                    let token = services.access_token();
                    let outcome = match services.api.fetch_post_type(&token).await {
                        Ok(post_type) => {
                            let query = filters.query_for(post_type);
                            services
                                .api
                                .list_posts(&token, &query)
                                .await
                                .map(|page| (post_type, page))
                        }
                        Err(e) => Err(e),
                    };

                    if !scope.is_active() {
                        log::debug!("Dropping posts for superseded filters {:?}", filters);
                        return;
                    }

                    match outcome {
                        Ok((post_type, page)) => {
                            log::info!(
                                "📋 Page {}/{}: {} posts for {}",
                                filters.page,
                                page.total_pages,
                                page.posts.len(),
                                post_type.as_str()
                            );
                            viewer.set(Some(post_type));
                            total_pages.set(page.total_pages);
                            posts.set(page.posts);
                        }
                        Err(e) => {
                            log::error!("❌ Failed to load posts: {}", e);
                            notifier.problem(&e.user_message("Failed to fetch posts."));
                        }
                    }
                    loading.set(false);
                });
            }
            move || scope.cancel()
        });
    }

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetSearch(input.value()));
        })
    };

    let on_country = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filters.dispatch(FilterAction::SetCountry(PhoneCountry::from_code(&select.value())));
        })
    };

    let on_previous = {
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| {
            if filters.can_go_previous() {
                filters.dispatch(FilterAction::GoToPage(filters.page - 1));
            }
        })
    };

    let on_next = {
        let filters = filters.clone();
        let total_pages = *total_pages;
        Callback::from(move |_: MouseEvent| {
            if filters.can_go_next(total_pages) {
                filters.dispatch(FilterAction::GoToPage(filters.page + 1));
            }
        })
    };

    let on_logout = {
        let services = services.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            services.session.clear();
            log::info!("👋 Signed out");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::SignIn);
            }
        })
    };

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::CreatePost);
            }
        })
    };

    let (title, subtitle) = heading_for(*viewer);
    let selected_country = filters.country.map(|c| c.code()).unwrap_or(ALL_COUNTRIES);

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{title}</h1>
                    <p class="subtitle">{subtitle}</p>
                </div>
                <div class="header-actions">
                    <button type="button" class="btn-primary" onclick={on_create}>
                        {"Create New Post"}
                    </button>
                    <button type="button" class="btn-secondary" onclick={on_logout}>
                        {"Logout"}
                    </button>
                </div>
            </header>

            <div class="dashboard-filters">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by keyword"
                    value={filters.search.clone()}
                    oninput={on_search}
                />
                <select class="country-filter" onchange={on_country}>
                    <option value={ALL_COUNTRIES} selected={selected_country == ALL_COUNTRIES}>
                        {"All countries"}
                    </option>
                    {for PhoneCountry::ALL.iter().map(|country| html! {
                        <option value={country.code()} selected={selected_country == country.code()}>
                            {country.name()}
                        </option>
                    })}
                </select>
            </div>

            <section class="post-list" aria-busy={(*loading).to_string()}>
                {if *loading && posts.is_empty() {
                    html! { <p class="empty-state">{"Loading..."}</p> }
                } else if posts.is_empty() {
                    html! { <p class="empty-state">{"No posts found."}</p> }
                } else {
                    html! {
                        <>
                            {for posts.iter().map(|post| html! {
                                <PostCard key={post.id.clone()} post={post.clone()} />
                            })}
                        </>
                    }
                }}
            </section>

            <nav class="pagination">
                <button type="button" onclick={on_previous} disabled={!filters.can_go_previous()}>
                    {"Previous"}
                </button>
                <span class="page-indicator">{format!("Page {} of {}", filters.page, *total_pages)}</span>
                <button type="button" onclick={on_next} disabled={!filters.can_go_next(*total_pages)}>
                    {"Next"}
                </button>
            </nav>
        </div>
    }
}
