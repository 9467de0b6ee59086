use serde::{Deserialize, Serialize};

use super::PhoneCountry;
use crate::utils::constants::POSTS_PAGE_SIZE;

/// Role of an account, and the kind of post it publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostType {
    OrderGiver,
    DevTeam,
}

impl PostType {
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::OrderGiver => "orderGiver",
            PostType::DevTeam => "devTeam",
        }
    }

    /// The role whose posts this role gets to browse.
    pub fn opposite(self) -> Self {
        match self {
            PostType::OrderGiver => PostType::DevTeam,
            PostType::DevTeam => PostType::OrderGiver,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostType::OrderGiver => "Order Giver",
            PostType::DevTeam => "Dev Team",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Data URL, rendered directly as an `<img src>`.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub phone_country: String,
    #[serde(default)]
    pub post_type: Option<PostType>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostTypeResponse {
    pub post_type: PostType,
}

/// Body of `POST /api/posts/create`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub phone_country: PhoneCountry,
    pub keywords: Vec<String>,
    pub description: String,
    pub image: String,
    pub post_type: PostType,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Query string of `GET /api/posts`.
#[derive(Clone, PartialEq, Debug)]
pub struct PostQuery {
    pub page: u32,
    pub limit: u32,
    pub keyword: Option<String>,
    pub country: Option<PhoneCountry>,
    pub post_type: PostType,
}

impl PostQuery {
    /// Query for what `viewer` is allowed to browse: always the other role's posts.
    pub fn for_viewer(viewer: PostType, page: u32, keyword: &str, country: Option<PhoneCountry>) -> Self {
        let keyword = keyword.trim();
        Self {
            page: page.max(1),
            limit: POSTS_PAGE_SIZE,
            keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
            country,
            post_type: viewer.opposite(),
        }
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        if let Some(country) = self.country {
            pairs.push(("country", country.code().to_string()));
        }
        pairs.push(("postType", self.post_type.as_str().to_string()));
        pairs
    }
}
