//! Per-view state for the navigation stack
//!
//! Each screen owns its remote data, list cursor and image slots. A view is
//! identified by a [`ViewId`] handed out once per activation, so results for
//! a view that has since been popped can be told apart and dropped.

use std::collections::HashMap;
use std::fmt;

use mealdeck_core::{Category, Meal, Thumbnail};

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Identity of one view activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// Data owned by a view that arrives from the network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Remote<T> {
    #[default]
    Pending,
    Loaded(T),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Pending => None,
            Remote::Loaded(value) => Some(value),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Remote::Pending)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Images
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// A load is in flight (or failed; failures are never reported)
    Requested,
    Ready(Thumbnail),
}

/// Thumbnails requested by one view, keyed by URL
#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    slots: HashMap<String, ImageSlot>,
}

impl ImageSlots {
    /// Mark `url` as requested. Returns `false` for an empty URL or one
    /// this view already asked for.
    pub fn request(&mut self, url: &str) -> bool {
        if url.trim().is_empty() || self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Requested);
        true
    }

    /// Store a decoded image. Only URLs this view requested are accepted.
    pub fn store(&mut self, url: &str, thumbnail: Thumbnail) -> bool {
        match self.slots.get_mut(url) {
            Some(slot) => {
                *slot = ImageSlot::Ready(thumbnail);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        match self.slots.get(url) {
            Some(ImageSlot::Ready(thumbnail)) => Some(thumbnail),
            _ => None,
        }
    }

    pub fn is_requested(&self, url: &str) -> bool {
        self.slots.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────────────────────────

/// A row that can be shown in a filtered list
pub trait Listable {
    fn label(&self) -> &str;
    fn thumbnail_url(&self) -> &str;
}

impl Listable for Category {
    fn label(&self) -> &str {
        &self.name
    }

    fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }
}

impl Listable for Meal {
    fn label(&self) -> &str {
        &self.name
    }

    fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }
}

/// Highlight position and row filter for a list view.
///
/// `selected` indexes the *visible* (filtered) rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub filter: String,
}

impl ListCursor {
    /// Indices into `items` of the rows matching the filter
    pub fn visible_indices<T: Listable>(&self, items: &[T]) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..items.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.label().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Rows matching the filter, in order
    pub fn visible<'a, T: Listable>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.visible_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// The highlighted row, if any row is visible
    pub fn selected_item<'a, T: Listable>(&self, items: &'a [T]) -> Option<&'a T> {
        self.visible_indices(items)
            .get(self.selected)
            .map(|&i| &items[i])
    }

    /// Move the highlight by `delta` rows, stopping at either end.
    /// Returns `true` if the highlight changed.
    pub fn move_by(&mut self, delta: isize, visible_len: usize) -> bool {
        if visible_len == 0 {
            return false;
        }
        let last = visible_len - 1;
        let target = if delta.is_negative() {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(last)
        };
        self.set_selected(target)
    }

    pub fn select_first(&mut self) -> bool {
        self.set_selected(0)
    }

    pub fn select_last(&mut self, visible_len: usize) -> bool {
        self.set_selected(visible_len.saturating_sub(1))
    }

    /// Keep the highlight inside `0..visible_len`
    pub fn clamp(&mut self, visible_len: usize) {
        self.selected = self.selected.min(visible_len.saturating_sub(1));
    }

    /// Replace the filter, keeping the same row highlighted when it is
    /// still visible and falling back to the first row otherwise.
    pub fn set_filter<T: Listable>(&mut self, items: &[T], filter: &str) {
        let current = self.visible_indices(items).get(self.selected).copied();
        self.filter = filter.to_string();
        let visible = self.visible_indices(items);
        self.selected = current
            .and_then(|index| visible.iter().position(|&i| i == index))
            .unwrap_or(0);
    }

    fn set_selected(&mut self, index: usize) -> bool {
        let changed = self.selected != index;
        self.selected = index;
        changed
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screens
// ─────────────────────────────────────────────────────────────────────────────

/// Root view: every category
#[derive(Debug, Clone)]
pub struct CategoryListView {
    pub id: ViewId,
    pub categories: Remote<Vec<Category>>,
    pub cursor: ListCursor,
    pub images: ImageSlots,
}

impl CategoryListView {
    pub fn new(id: ViewId) -> Self {
        Self {
            id,
            categories: Remote::Pending,
            cursor: ListCursor::default(),
            images: ImageSlots::default(),
        }
    }

    /// Loaded categories, or an empty slice while pending
    pub fn items(&self) -> &[Category] {
        self.categories.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<&Category> {
        self.cursor.selected_item(self.items())
    }
}

/// The meals filed under one category
#[derive(Debug, Clone)]
pub struct CategoryDetailView {
    pub id: ViewId,
    pub category: Category,
    pub meals: Remote<Vec<Meal>>,
    pub cursor: ListCursor,
    pub images: ImageSlots,
}

impl CategoryDetailView {
    pub fn new(id: ViewId, category: Category) -> Self {
        Self {
            id,
            category,
            meals: Remote::Pending,
            cursor: ListCursor::default(),
            images: ImageSlots::default(),
        }
    }

    pub fn items(&self) -> &[Meal] {
        self.meals.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<&Meal> {
        self.cursor.selected_item(self.items())
    }

    /// Pending and empty lists both read as still loading
    pub fn is_loading(&self) -> bool {
        self.items().is_empty()
    }
}

/// Instruction text as last drawn, in terminal rows after wrapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextViewport {
    pub content_rows: u16,
    pub visible_rows: u16,
}

/// A single meal. Renders from the held value; never fetches data.
#[derive(Debug, Clone)]
pub struct MealDetailView {
    pub id: ViewId,
    pub meal: Meal,
    pub images: ImageSlots,
    /// Instruction scroll offset, in wrapped rows
    pub scroll: u16,
    /// Set by the renderer every frame
    pub viewport: Option<TextViewport>,
}

impl MealDetailView {
    pub fn new(id: ViewId, meal: Meal) -> Self {
        Self {
            id,
            meal,
            images: ImageSlots::default(),
            scroll: 0,
            viewport: None,
        }
    }

    /// Largest useful scroll offset.
    ///
    /// Once drawn, this puts the last wrapped row at the bottom of the pane.
    /// Before the first frame each logical line may reach the top.
    pub fn max_scroll(&self) -> u16 {
        match self.viewport {
            Some(viewport) => viewport.content_rows.saturating_sub(viewport.visible_rows),
            None => {
                let lines = self.meal.instructions().map_or(0, |text| text.lines().count());
                u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
            }
        }
    }

    /// Scroll the instructions by `delta` rows, clamped to the text.
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let max = self.max_scroll() as isize;
        let target = (self.scroll as isize + delta).clamp(0, max) as u16;
        let changed = target != self.scroll;
        self.scroll = target;
        changed
    }

    /// Record the drawn geometry and pull the offset back inside it
    pub fn set_viewport(&mut self, viewport: TextViewport) {
        self.viewport = Some(viewport);
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// One entry on the navigation stack
#[derive(Debug, Clone)]
pub enum Screen {
    CategoryList(CategoryListView),
    CategoryDetail(CategoryDetailView),
    MealDetail(MealDetailView),
}

impl Screen {
    pub fn id(&self) -> ViewId {
        match self {
            Screen::CategoryList(view) => view.id,
            Screen::CategoryDetail(view) => view.id,
            Screen::MealDetail(view) => view.id,
        }
    }

    /// Short label for the breadcrumb
    pub fn title(&self) -> &str {
        match self {
            Screen::CategoryList(_) => "Categories",
            Screen::CategoryDetail(view) => &view.category.name,
            Screen::MealDetail(view) => &view.meal.name,
        }
    }

    pub fn images(&self) -> &ImageSlots {
        match self {
            Screen::CategoryList(view) => &view.images,
            Screen::CategoryDetail(view) => &view.images,
            Screen::MealDetail(view) => &view.images,
        }
    }

    pub fn images_mut(&mut self) -> &mut ImageSlots {
        match self {
            Screen::CategoryList(view) => &mut view.images,
            Screen::CategoryDetail(view) => &mut view.images,
            Screen::MealDetail(view) => &mut view.images,
        }
    }

    /// The list cursor, for screens that show a list
    pub fn cursor(&self) -> Option<&ListCursor> {
        match self {
            Screen::CategoryList(view) => Some(&view.cursor),
            Screen::CategoryDetail(view) => Some(&view.cursor),
            Screen::MealDetail(_) => None,
        }
    }

    pub fn cursor_mut(&mut self) -> Option<&mut ListCursor> {
        match self {
            Screen::CategoryList(view) => Some(&mut view.cursor),
            Screen::CategoryDetail(view) => Some(&mut view.cursor),
            Screen::MealDetail(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        self.cursor().is_some()
    }

    /// Number of rows currently visible through the filter
    pub fn visible_len(&self) -> usize {
        match self {
            Screen::CategoryList(view) => view.cursor.visible_indices(view.items()).len(),
            Screen::CategoryDetail(view) => view.cursor.visible_indices(view.items()).len(),
            Screen::MealDetail(_) => 0,
        }
    }

    /// Image URLs this screen shows right now: the header image of a
    /// detail view and the highlighted row's thumbnail.
    pub fn wanted_images(&self) -> Vec<String> {
        let mut urls = Vec::new();
        match self {
            Screen::CategoryList(view) => {
                if let Some(category) = view.selected() {
                    urls.push(category.thumbnail_url.clone());
                }
            }
            Screen::CategoryDetail(view) => {
                urls.push(view.category.thumbnail_url.clone());
                if let Some(meal) = view.selected() {
                    urls.push(meal.thumbnail_url.clone());
                }
            }
            Screen::MealDetail(view) => urls.push(view.meal.thumbnail_url.clone()),
        }
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdeck_api::test_utils::{test_category, test_meal};

    fn thumb() -> Thumbnail {
        Thumbnail::new(1, 1, vec![[1, 2, 3]]).unwrap()
    }

    fn categories() -> Vec<Category> {
        vec![
            test_category("1", "Beef"),
            test_category("2", "Chicken"),
            test_category("3", "Dessert"),
            test_category("4", "Side"),
        ]
    }

    fn long_paragraph_meal() -> Meal {
        let mut meal = test_meal("52874", "Beef Stew");
        meal.instructions = Some(format!("{} FINALSTEP", "Simmer gently. ".repeat(120)));
        meal
    }

    #[test]
    fn test_meal_scroll_follows_wrapped_rows() {
        let mut view = MealDetailView::new(ViewId(3), long_paragraph_meal());
        assert_eq!(view.max_scroll(), 0);

        view.set_viewport(TextViewport {
            content_rows: 40,
            visible_rows: 8,
        });
        assert_eq!(view.max_scroll(), 32);
        assert!(view.scroll_by(100));
        assert_eq!(view.scroll, 32);
        assert!(!view.scroll_by(1));
    }

    #[test]
    fn test_meal_viewport_change_clamps_scroll() {
        let mut view = MealDetailView::new(ViewId(3), long_paragraph_meal());
        view.set_viewport(TextViewport {
            content_rows: 40,
            visible_rows: 8,
        });
        view.scroll_by(30);

        // A wider pane wraps into fewer rows
        view.set_viewport(TextViewport {
            content_rows: 20,
            visible_rows: 8,
        });
        assert_eq!(view.scroll, 12);
    }

    #[test]
    fn test_view_id_display() {
        assert_eq!(ViewId(7).to_string(), "view-7");
    }

    #[test]
    fn test_image_slots_request_once() {
        let mut images = ImageSlots::default();
        assert!(images.request("http://img.test/a.png"));
        assert!(!images.request("http://img.test/a.png"));
        assert!(!images.request(""));
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_image_slots_store_only_requested() {
        let mut images = ImageSlots::default();
        assert!(!images.store("http://img.test/a.png", thumb()));
        assert!(images.get("http://img.test/a.png").is_none());

        images.request("http://img.test/a.png");
        assert!(images.get("http://img.test/a.png").is_none());
        assert!(images.store("http://img.test/a.png", thumb()));
        assert_eq!(images.get("http://img.test/a.png"), Some(&thumb()));
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.move_by(-1, 4));
        assert!(cursor.move_by(1, 4));
        assert_eq!(cursor.selected, 1);
        assert!(cursor.move_by(PAGE_SIZE as isize, 4));
        assert_eq!(cursor.selected, 3);
        assert!(!cursor.move_by(1, 4));
        assert!(cursor.move_by(-(PAGE_SIZE as isize), 4));
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_cursor_ignores_empty_list() {
        let mut cursor = ListCursor::default();
        assert!(!cursor.move_by(1, 0));
        assert!(!cursor.select_last(0));
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = categories();
        let cursor = ListCursor {
            selected: 0,
            filter: "E".to_string(),
        };
        let names: Vec<_> = cursor.visible(&items).iter().map(|c| c.label()).collect();
        assert_eq!(names, vec!["Beef", "Chicken", "Dessert", "Side"]);

        let cursor = ListCursor {
            selected: 0,
            filter: "ss".to_string(),
        };
        assert_eq!(cursor.visible_indices(&items), vec![2]);
    }

    #[test]
    fn test_set_filter_keeps_highlighted_row() {
        let items = categories();
        let mut cursor = ListCursor {
            selected: 1,
            filter: String::new(),
        };

        cursor.set_filter(&items, "chi");
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.selected_item(&items).unwrap().name, "Chicken");

        cursor.set_filter(&items, "");
        assert_eq!(cursor.selected, 1);
        assert_eq!(cursor.selected_item(&items).unwrap().name, "Chicken");
    }

    #[test]
    fn test_set_filter_falls_back_to_first_row() {
        let items = categories();
        let mut cursor = ListCursor {
            selected: 0,
            filter: String::new(),
        };

        cursor.set_filter(&items, "s");
        assert_eq!(cursor.selected_item(&items).unwrap().name, "Dessert");
    }

    #[test]
    fn test_category_detail_loading_while_empty() {
        let mut view = CategoryDetailView::new(ViewId(2), test_category("1", "Beef"));
        assert!(view.is_loading());

        view.meals = Remote::Loaded(vec![]);
        assert!(view.is_loading());

        view.meals = Remote::Loaded(vec![test_meal("52874", "Beef Stew")]);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_wanted_images_per_screen() {
        let mut list = CategoryListView::new(ViewId(1));
        assert!(Screen::CategoryList(list.clone()).wanted_images().is_empty());

        list.categories = Remote::Loaded(categories());
        assert_eq!(
            Screen::CategoryList(list).wanted_images(),
            vec!["http://img.test/beef.png".to_string()]
        );

        let mut detail = CategoryDetailView::new(ViewId(2), test_category("1", "Beef"));
        detail.meals = Remote::Loaded(vec![test_meal("52874", "Beef Stew")]);
        assert_eq!(
            Screen::CategoryDetail(detail).wanted_images(),
            vec![
                "http://img.test/beef.png".to_string(),
                "http://img.test/meal-52874.png".to_string(),
            ]
        );

        let meal = MealDetailView::new(ViewId(3), test_meal("52874", "Beef Stew"));
        assert_eq!(
            Screen::MealDetail(meal).wanted_images(),
            vec!["http://img.test/meal-52874.png".to_string()]
        );
    }
}
