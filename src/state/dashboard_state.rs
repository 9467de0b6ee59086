// ============================================================================
// DASHBOARD STATE - page and filters of the post list
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{PhoneCountry, PostQuery, PostType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardFilters {
    /// 1-based
    pub page: u32,
    pub search: String,
    /// `None` means all countries.
    pub country: Option<PhoneCountry>,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            country: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    SetSearch(String),
    SetCountry(Option<PhoneCountry>),
    GoToPage(u32),
}

impl DashboardFilters {
    /// Filter changes jump back to the first page in the same transition.
    pub fn apply(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetSearch(search) => Self {
                page: 1,
                search,
                ..self.clone()
            },
            FilterAction::SetCountry(country) => Self {
                page: 1,
                country,
                ..self.clone()
            },
            FilterAction::GoToPage(page) => Self {
                page: page.max(1),
                ..self.clone()
            },
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self, total_pages: u32) -> bool {
        self.page < total_pages
    }

    pub fn query_for(&self, viewer: PostType) -> PostQuery {
        PostQuery::for_viewer(viewer, self.page, &self.search, self.country)
    }
}

impl Reducible for DashboardFilters {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_page_one_without_filters() {
        let filters = DashboardFilters::default();
        assert_eq!(filters.page, 1);
        assert!(filters.search.is_empty());
        assert_eq!(filters.country, None);
    }

    #[test]
    fn typing_a_search_resets_the_page() {
        let on_page_three = DashboardFilters::default().apply(FilterAction::GoToPage(3));
        assert_eq!(on_page_three.page, 3);

        let searched = on_page_three.apply(FilterAction::SetSearch("engineer".to_string()));
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "engineer");
    }

    #[test]
    fn changing_country_resets_the_page_and_keeps_the_search() {
        let filters = DashboardFilters::default()
            .apply(FilterAction::SetSearch("rust".to_string()))
            .apply(FilterAction::GoToPage(4))
            .apply(FilterAction::SetCountry(Some(PhoneCountry::France)));

        assert_eq!(filters.page, 1);
        assert_eq!(filters.search, "rust");
        assert_eq!(filters.country, Some(PhoneCountry::France));
    }

    #[test]
    fn pagination_bounds() {
        let first = DashboardFilters::default();
        assert!(!first.can_go_previous());
        assert!(first.can_go_next(3));

        let last = first.apply(FilterAction::GoToPage(3));
        assert!(last.can_go_previous());
        assert!(!last.can_go_next(3));

        // Empty result sets report zero pages
        assert!(!first.can_go_next(0));
    }

    #[test]
    fn page_never_drops_below_one() {
        let filters = DashboardFilters::default().apply(FilterAction::GoToPage(0));
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn query_follows_the_filters() {
        let filters = DashboardFilters::default()
            .apply(FilterAction::SetSearch("engineer".to_string()))
            .apply(FilterAction::GoToPage(2));
        let query = filters.query_for(PostType::DevTeam);

        assert_eq!(query.page, 2);
        assert_eq!(query.keyword.as_deref(), Some("engineer"));
        assert_eq!(query.post_type, PostType::OrderGiver);
    }
}
