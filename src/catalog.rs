use std::cmp::Ordering;

/// How many campaign cards fit on one page of the portfolio dialog.
pub const PAGE_SIZE: usize = 6;

/// Simulated fetch latency for the portfolio dialog, in milliseconds.
pub const LOAD_DELAY_MS: u64 = 700;

/// Banner text shown when the synthetic load failure triggers.
pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load results. Please adjust your search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TechGadgets,
    FoodBeverage,
    LifestyleHome,
    WellnessBeauty,
    FamilyKids,
    FashionOutdoors,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TechGadgets,
        Category::FoodBeverage,
        Category::LifestyleHome,
        Category::WellnessBeauty,
        Category::FamilyKids,
        Category::FashionOutdoors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::TechGadgets => "Tech & Gadgets",
            Category::FoodBeverage => "Food & Beverage",
            Category::LifestyleHome => "Lifestyle & Home",
            Category::WellnessBeauty => "Wellness & Beauty",
            Category::FamilyKids => "Family & Kids",
            Category::FashionOutdoors => "Fashion & Outdoors",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Video,
    Photo,
    Ads,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Video, ContentType::Photo, ContentType::Ads];

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Video => "Video",
            ContentType::Photo => "Photo",
            ContentType::Ads => "Ads",
        }
    }
}

/// One portfolio entry. The campaign list is fixed seed data for the lifetime
/// of the process; the browser only ever filters over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub kind: ContentType,
    pub engagement: f64,
    pub result: &'static str,
    pub featured: bool,
}

pub static CAMPAIGNS: [Campaign; 12] = [
    Campaign {
        id: "1",
        title: "Glow Serum Launch",
        category: Category::WellnessBeauty,
        kind: ContentType::Video,
        engagement: 4.9,
        result: "32% lift in CTR",
        featured: true,
    },
    Campaign {
        id: "2",
        title: "Smart Home Bundle",
        category: Category::TechGadgets,
        kind: ContentType::Video,
        engagement: 4.6,
        result: "18% ROAS boost",
        featured: false,
    },
    Campaign {
        id: "3",
        title: "Luxury Skincare Edit",
        category: Category::WellnessBeauty,
        kind: ContentType::Photo,
        engagement: 4.4,
        result: "40k saves",
        featured: true,
    },
    Campaign {
        id: "4",
        title: "Lifestyle Kitchen Series",
        category: Category::LifestyleHome,
        kind: ContentType::Video,
        engagement: 4.3,
        result: "27% conversion",
        featured: false,
    },
    Campaign {
        id: "5",
        title: "Weekend Coffee Ritual",
        category: Category::FoodBeverage,
        kind: ContentType::Photo,
        engagement: 4.2,
        result: "15k shares",
        featured: false,
    },
    Campaign {
        id: "6",
        title: "Family Essentials Ad",
        category: Category::FamilyKids,
        kind: ContentType::Ads,
        engagement: 4.7,
        result: "21% CPA drop",
        featured: true,
    },
    Campaign {
        id: "7",
        title: "Outdoor Adventure Drop",
        category: Category::FashionOutdoors,
        kind: ContentType::Video,
        engagement: 4.1,
        result: "12% retention",
        featured: false,
    },
    Campaign {
        id: "8",
        title: "Meal Prep Stories",
        category: Category::FoodBeverage,
        kind: ContentType::Video,
        engagement: 4.5,
        result: "28% engagement",
        featured: true,
    },
    Campaign {
        id: "9",
        title: "Beauty Kit Carousel",
        category: Category::WellnessBeauty,
        kind: ContentType::Photo,
        engagement: 4.0,
        result: "9k comments",
        featured: false,
    },
    Campaign {
        id: "10",
        title: "Tech Unboxing",
        category: Category::TechGadgets,
        kind: ContentType::Video,
        engagement: 4.8,
        result: "45% view-through",
        featured: true,
    },
    Campaign {
        id: "11",
        title: "Home Refresh",
        category: Category::LifestyleHome,
        kind: ContentType::Photo,
        engagement: 3.9,
        result: "20k saves",
        featured: false,
    },
    Campaign {
        id: "12",
        title: "Wellness Routine",
        category: Category::WellnessBeauty,
        kind: ContentType::Ads,
        engagement: 4.6,
        result: "19% CTR",
        featured: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Engagement,
    Title,
}

/// View parameters over the campaign catalog. `None` for category or tab
/// means "all"; `page` is kept in `[1, total_pages]` by the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub search: String,
    pub category: Option<Category>,
    pub tab: Option<ContentType>,
    pub featured_only: bool,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            tab: None,
            featured_only: false,
            sort: SortKey::Engagement,
            page: 1,
        }
    }
}

/// The computed slice handed to the portfolio dialog for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<&'static Campaign>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// Holds the static catalog and the current view parameters, and recomputes
/// the visible slice as a pure function of both. Closing the dialog calls
/// `reset()`; nothing survives across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogBrowser {
    items: &'static [Campaign],
    pub view: CatalogView,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self {
            items: &CAMPAIGNS,
            view: CatalogView::default(),
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.view.search = search;
        self.reclamp();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.view.category = category;
        self.reclamp();
    }

    pub fn set_tab(&mut self, tab: Option<ContentType>) {
        self.view.tab = tab;
        self.reclamp();
    }

    pub fn set_featured_only(&mut self, featured_only: bool) {
        self.view.featured_only = featured_only;
        self.reclamp();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.sort = sort;
        self.reclamp();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if self.view.page < total {
            self.view.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.view.page > 1 {
            self.view.page -= 1;
        }
    }

    /// Restore every view parameter to its default. Reopening the dialog
    /// always starts from here.
    pub fn reset(&mut self) {
        self.view = CatalogView::default();
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    /// Filter -> sort -> paginate, recomputed from scratch. The page is
    /// clamped against the filtered count before slicing so it can never
    /// point past the last page or below page 1.
    pub fn visible(&self) -> PageView {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let total_pages = total_pages(filtered_count);
        let page = self.view.page.clamp(1, total_pages);
        let start = (page - 1) * PAGE_SIZE;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect::<Vec<_>>();
        PageView {
            items,
            page,
            total_pages,
            filtered_count,
        }
    }

    fn filtered(&self) -> Vec<&'static Campaign> {
        let view = &self.view;
        let query = view.search.trim().to_lowercase();
        let mut result = self
            .items
            .iter()
            .filter(|c| view.category.is_none_or(|cat| c.category == cat))
            .filter(|c| view.tab.is_none_or(|t| c.kind == t))
            .filter(|c| !view.featured_only || c.featured)
            .filter(|c| query.is_empty() || c.title.to_lowercase().contains(&query))
            .collect::<Vec<_>>();
        match view.sort {
            SortKey::Engagement => {
                result.sort_by(|a, b| {
                    b.engagement
                        .partial_cmp(&a.engagement)
                        .unwrap_or(Ordering::Equal)
                });
            }
            SortKey::Title => result.sort_by(|a, b| a.title.cmp(b.title)),
        }
        result
    }

    fn reclamp(&mut self) {
        self.view.page = self.view.page.clamp(1, self.total_pages());
    }
}

fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

/// Deterministic failure trigger for the simulated load cycle: any search
/// text containing "error" fails, everything else clears the banner.
pub fn synthetic_failure(search: &str) -> Option<&'static str> {
    if search.to_lowercase().contains("error") {
        Some(LOAD_FAILURE_MESSAGE)
    } else {
        None
    }
}

/// Token source for cancellation-by-supersession of pending load cycles. A
/// cycle captures the token handed out by `begin()`; when its timer fires it
/// may only apply its outcome if that token is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(page: &PageView) -> Vec<&'static str> {
        page.items.iter().map(|c| c.title).collect()
    }

    #[test]
    fn test_defaults_show_first_page_by_engagement() {
        let browser = CatalogBrowser::new();
        let page = browser.visible();
        assert_eq!(page.page, 1);
        assert_eq!(page.filtered_count, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), PAGE_SIZE);
        // Engagement sort is descending.
        assert_eq!(titles(&page)[0], "Glow Serum Launch");
        assert_eq!(titles(&page)[1], "Tech Unboxing");
        for pair in page.items.windows(2) {
            assert!(pair[0].engagement >= pair[1].engagement);
        }
    }

    #[test]
    fn test_engagement_sort_is_stable_for_ties() {
        // Smart Home Bundle (id 2) and Wellness Routine (id 12) tie at 4.6;
        // seed order must be preserved between them.
        let browser = CatalogBrowser::new();
        let page = browser.visible();
        let smart = titles(&page)
            .iter()
            .position(|t| *t == "Smart Home Bundle")
            .unwrap();
        let wellness = titles(&page)
            .iter()
            .position(|t| *t == "Wellness Routine")
            .unwrap();
        assert!(smart < wellness);
    }

    #[test]
    fn test_title_sort_begins_with_alphabetical_first() {
        let mut browser = CatalogBrowser::new();
        browser.set_sort(SortKey::Title);
        let page = browser.visible();
        assert_eq!(titles(&page)[0], "Beauty Kit Carousel");
        assert_eq!(titles(&page)[1], "Family Essentials Ad");
        for pair in page.items.windows(2) {
            assert!(pair[0].title <= pair[1].title);
        }
    }

    #[test]
    fn test_category_filter() {
        let mut browser = CatalogBrowser::new();
        browser.set_category(Some(Category::WellnessBeauty));
        let page = browser.visible();
        assert_eq!(page.filtered_count, 4);
        assert!(page
            .items
            .iter()
            .all(|c| c.category == Category::WellnessBeauty));
    }

    #[test]
    fn test_tab_filter() {
        let mut browser = CatalogBrowser::new();
        browser.set_tab(Some(ContentType::Ads));
        let page = browser.visible();
        assert_eq!(page.filtered_count, 2);
        assert!(page.items.iter().all(|c| c.kind == ContentType::Ads));
    }

    #[test]
    fn test_featured_filter() {
        let mut browser = CatalogBrowser::new();
        browser.set_featured_only(true);
        let page = browser.visible();
        assert_eq!(page.filtered_count, 6);
        assert!(page.items.iter().all(|c| c.featured));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut browser = CatalogBrowser::new();
        browser.set_search("TECH".to_string());
        let page = browser.visible();
        assert_eq!(titles(&page), vec!["Tech Unboxing"]);

        browser.set_search("  ".to_string());
        assert_eq!(browser.visible().filtered_count, 12);
    }

    #[test]
    fn test_filters_compose() {
        let mut browser = CatalogBrowser::new();
        browser.set_category(Some(Category::WellnessBeauty));
        browser.set_tab(Some(ContentType::Photo));
        browser.set_featured_only(true);
        let page = browser.visible();
        assert_eq!(titles(&page), vec!["Luxury Skincare Edit"]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        // No campaign is both Tech & Gadgets and Photo.
        let mut browser = CatalogBrowser::new();
        browser.set_category(Some(Category::TechGadgets));
        browser.set_tab(Some(ContentType::Photo));
        let page = browser.visible();
        assert_eq!(page.filtered_count, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        // The load cycle itself still succeeds for this search text.
        assert_eq!(synthetic_failure(""), None);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut browser = CatalogBrowser::new();
        browser.set_search("e".to_string());
        browser.set_sort(SortKey::Title);
        let first = browser.visible();
        let second = browser.visible();
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_clamp_invariant_across_changes() {
        let mut browser = CatalogBrowser::new();
        browser.next_page();
        assert_eq!(browser.view.page, 2);

        // Shrinking the filtered set below one page pulls the page back in.
        browser.set_tab(Some(ContentType::Ads));
        assert_eq!(browser.view.page, 1);
        let page = browser.visible();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);

        // Widening again leaves the clamped value alone.
        browser.set_tab(None);
        assert_eq!(browser.view.page, 1);
        assert_eq!(browser.total_pages(), 2);
    }

    #[test]
    fn test_page_navigation_clamps_at_boundaries() {
        let mut browser = CatalogBrowser::new();
        browser.prev_page();
        assert_eq!(browser.view.page, 1);
        browser.next_page();
        assert_eq!(browser.view.page, 2);
        browser.next_page();
        assert_eq!(browser.view.page, 2);
        let second = browser.visible();
        assert_eq!(second.items.len(), 6);
        browser.prev_page();
        assert_eq!(browser.view.page, 1);
    }

    #[test]
    fn test_total_pages_matches_ceiling_of_count() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut browser = CatalogBrowser::new();
        browser.set_search("x".to_string());
        browser.set_featured_only(true);
        browser.set_sort(SortKey::Title);
        browser.next_page();
        browser.reset();
        assert_eq!(browser.view, CatalogView::default());
        assert_eq!(browser.view.page, 1);
        assert!(browser.view.search.is_empty());
    }

    #[test]
    fn test_synthetic_failure_trigger() {
        assert_eq!(synthetic_failure("error123"), Some(LOAD_FAILURE_MESSAGE));
        assert_eq!(synthetic_failure("an ERROR appears"), Some(LOAD_FAILURE_MESSAGE));
        assert_eq!(synthetic_failure("glow"), None);
        assert_eq!(synthetic_failure(""), None);
    }

    #[test]
    fn test_load_generation_supersession() {
        let mut generation = LoadGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        // Only the most recent cycle may apply its outcome.
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        let third = generation.begin();
        assert!(!generation.is_current(second));
        assert!(generation.is_current(third));
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        // The "all" option in the category select maps to no filter.
        assert_eq!(Category::from_label("all"), None);
    }
}
