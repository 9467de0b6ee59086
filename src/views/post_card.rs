use yew::prelude::*;

use crate::models::{PhoneCountry, Post};

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let country = PhoneCountry::from_code(&post.phone_country)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| post.phone_country.clone());

    html! {
        <article class="post-card" data-id={post.id.clone()}>
            {if post.image.is_empty() {
                html! { <div class="post-image placeholder"></div> }
            } else {
                html! { <img class="post-image" src={post.image.clone()} alt={post.company_name.clone()} /> }
            }}
            <div class="post-body">
                <h3 class="post-company">{&post.company_name}</h3>
                if !country.is_empty() {
                    <span class="post-country">{country}</span>
                }
                <p class="post-description">{&post.description}</p>
                <ul class="post-keywords">
                    {for post.keywords.iter().map(|keyword| html! {
                        <li class="keyword-chip">{keyword}</li>
                    })}
                </ul>
            </div>
        </article>
    }
}
