//! Fluent construction of a laid-out tab bar.

use super::tab_bar::{ScrollStyle, TabBar, TabSelection};
use super::types::Size;
use crate::config::TabBarConfig;
use crate::model::TabItem;

/// Items per page used by [`TabBarBuilder::scrollable_default`].
pub const DEFAULT_ITEMS_IN_PAGE: f64 = 3.0;

/// Builder for [`TabBar`].
///
/// ```
/// # use tabstrip::view_state::builder::TabBarBuilder;
/// # use tabstrip::view_state::types::Size;
/// let (bar, selection) = TabBarBuilder::new()
///     .items(["News", "Sports", "Weather", "Finance"])
///     .scrollable(true, true, 3.0, None)
///     .build(Size::new(375.0, 60.0));
///
/// assert_eq!(bar.engine().policy_width(), 125.0);
/// assert_eq!(selection.map(|s| s.to.get()), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabBarBuilder {
    items: Vec<TabItem>,
    config: TabBarConfig,
    scroll_style: ScrollStyle,
}

impl TabBarBuilder {
    /// Start with no items, default metrics, and no scrolling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the items in display order.
    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TabItem>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the geometry metrics.
    pub fn config(mut self, config: TabBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure scrolling.
    ///
    /// `items_in_page` and `max_width` only matter when `is_scrollable` is set.
    pub fn scrollable(
        mut self,
        is_scrollable: bool,
        is_paging: bool,
        items_in_page: f64,
        max_width: Option<f64>,
    ) -> Self {
        self.scroll_style = ScrollStyle {
            scrollable: is_scrollable,
            paging: is_paging,
            items_in_page,
            max_width,
        };
        self
    }

    /// Configure scrolling with three items per page and no max width.
    pub fn scrollable_default(self, is_scrollable: bool, is_paging: bool) -> Self {
        self.scrollable(is_scrollable, is_paging, DEFAULT_ITEMS_IN_PAGE, None)
    }

    /// Lay out the bar in `container_size` and select the configured default tab.
    ///
    /// Returns the bar and the initial selection. The selection is `None` when the
    /// default tab does not exist.
    pub fn build(self, container_size: Size) -> (TabBar, Option<TabSelection>) {
        let default_tab = self.config.default_select_page;
        let mut bar = TabBar::new(self.items, self.config);
        bar.set_scroll_style(self.scroll_style);
        bar.resize(container_size);
        let selection = bar.select_tab(default_tab);
        (bar, selection)
    }
}
