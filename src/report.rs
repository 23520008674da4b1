//! Layout report - plain-text and JSON views of a laid-out tab bar.

use crate::view_state::frame::ContentBounds;
use crate::view_state::tab_bar::{IndicatorGeometry, TabBar};
use crate::view_state::types::{ItemIndex, Size};
use serde::Serialize;
use std::fmt::Write as _;

/// One item's geometry in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    /// Zero-based item index.
    pub index: ItemIndex,
    /// Item title.
    pub title: String,
    /// Left edge in content coordinates.
    pub origin_x: f64,
    /// Item width.
    pub width: f64,
    /// Whether the item overlaps the container at the current offset.
    pub visible: bool,
}

/// Snapshot of a tab bar's geometry and selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Container size.
    pub container: Size,
    /// Whether the row scrolls.
    pub scroll_enabled: bool,
    /// Whether scrolling snaps to pages.
    pub paging_enabled: bool,
    /// Items per page, only while scrolling.
    pub items_per_page: Option<f64>,
    /// Max self-sized item width, if bounded.
    pub max_item_width: Option<f64>,
    /// Uniform width before self-sizing.
    pub policy_width: f64,
    /// Total content size.
    pub content_size: ContentBounds,
    /// Horizontal scroll offset.
    pub content_offset_x: f64,
    /// Selected tab.
    pub selected: Option<ItemIndex>,
    /// Selection indicator in container coordinates.
    pub indicator: Option<IndicatorGeometry>,
    /// Every laid-out item.
    pub items: Vec<ItemReport>,
}

impl LayoutReport {
    /// Capture the current state of `bar`.
    pub fn from_tab_bar(bar: &TabBar) -> Self {
        let engine = bar.engine();
        // Visible frames are a contiguous index run.
        let visible = bar.visible_items();
        let visible_run = match (visible.first(), visible.last()) {
            (Some(first), Some(last)) => first.index.get()..last.index.get() + 1,
            _ => 0..0,
        };
        let config = bar.layout_config();

        let items = engine
            .frames()
            .iter()
            .map(|frame| ItemReport {
                index: frame.index,
                title: bar
                    .items()
                    .get(frame.index.get())
                    .map(|item| item.title.clone())
                    .unwrap_or_default(),
                origin_x: frame.origin_x,
                width: frame.width,
                visible: visible_run.contains(&frame.index.get()),
            })
            .collect();

        Self {
            container: bar.container_size(),
            scroll_enabled: config.scroll_enabled,
            paging_enabled: config.effective_paging(),
            items_per_page: bar.items_in_page(),
            max_item_width: config.effective_max_item_width(),
            policy_width: engine.policy_width(),
            content_size: engine.total_content_size(),
            content_offset_x: bar.content_offset_x(),
            selected: bar.current_tab(),
            indicator: bar.indicator(),
            items,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns the serializer error; only non-finite numbers can trigger one.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary, one item per line.
    ///
    /// Visible items are marked `*`, hidden ones `-`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let mut mode = if self.scroll_enabled {
            String::from("scrolling")
        } else {
            String::from("fixed")
        };
        if self.paging_enabled {
            mode.push_str(", paging");
        }
        if let Some(per_page) = self.items_per_page {
            let _ = write!(mode, ", {per_page} per page");
        }
        if let Some(max) = self.max_item_width {
            let _ = write!(mode, ", max width {max}");
        }

        let _ = writeln!(
            out,
            "container {}x{}, {mode}",
            self.container.width, self.container.height
        );
        let _ = writeln!(out, "policy width {}", self.policy_width);
        let _ = writeln!(
            out,
            "content {}x{}, offset {}",
            self.content_size.width, self.content_size.height, self.content_offset_x
        );

        match (self.selected, self.indicator) {
            (Some(index), Some(indicator)) => {
                let _ = writeln!(
                    out,
                    "selected #{}, indicator at {} width {}",
                    index.display(),
                    indicator.left,
                    indicator.width
                );
            }
            (Some(index), None) => {
                let _ = writeln!(out, "selected #{}", index.display());
            }
            (None, _) => out.push_str("selected none\n"),
        }

        for item in &self.items {
            let _ = writeln!(
                out,
                "{} #{} {:?} x={} w={}",
                if item.visible { '*' } else { '-' },
                item.index.display(),
                item.title,
                item.origin_x,
                item.width
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::builder::TabBarBuilder;

    fn nine_titles() -> Vec<&'static str> {
        vec![
            "Item1",
            "Item2WithLongTitle",
            "Item3",
            "Item4",
            "Item5",
            "Item6",
            "Item7",
            "Item8",
            "Item9",
        ]
    }

    fn scrolling_report() -> LayoutReport {
        let (mut bar, _) = TabBarBuilder::new()
            .items(nine_titles())
            .scrollable_default(true, true)
            .build(Size::new(375.0, 60.0));
        bar.self_size_visible();
        bar.select_tab(1);
        LayoutReport::from_tab_bar(&bar)
    }

    #[test]
    fn report_marks_visible_items() {
        let report = scrolling_report();
        let visible: Vec<usize> = report
            .items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.index.get())
            .collect();
        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn report_marks_scrolled_run_visible() {
        let (mut bar, _) = TabBarBuilder::new()
            .items(nine_titles())
            .scrollable_default(true, false)
            .build(Size::new(375.0, 60.0));
        bar.self_size_visible();
        bar.set_content_offset(400.0);

        let visible: Vec<usize> = LayoutReport::from_tab_bar(&bar)
            .items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.index.get())
            .collect();
        // 400..775 overlaps x=321..446 through x=696..821
        assert_eq!(visible, vec![2, 3, 4, 5]);
    }

    #[test]
    fn report_carries_indicator() {
        let report = scrolling_report();
        let indicator = report.indicator.unwrap();
        assert_eq!(indicator.left, 125.0);
        assert_eq!(indicator.width, 196.0);
    }

    #[test]
    fn scrolling_report_text() {
        insta::assert_snapshot!(scrolling_report().render_text(), @r#"
        container 375x60, scrolling, paging, 3 per page
        policy width 125
        content 1196x60, offset 0
        selected #2, indicator at 125 width 196
        * #1 "Item1" x=0 w=125
        * #2 "Item2WithLongTitle" x=125 w=196
        * #3 "Item3" x=321 w=125
        - #4 "Item4" x=446 w=125
        - #5 "Item5" x=571 w=125
        - #6 "Item6" x=696 w=125
        - #7 "Item7" x=821 w=125
        - #8 "Item8" x=946 w=125
        - #9 "Item9" x=1071 w=125
        "#);
    }

    #[test]
    fn fixed_report_text() {
        let (bar, _) = TabBarBuilder::new()
            .items(["A", "B", "C", "D"])
            .build(Size::new(400.0, 60.0));
        let report = LayoutReport::from_tab_bar(&bar);

        insta::assert_snapshot!(report.render_text(), @r#"
        container 400x60, fixed
        policy width 100
        content 400x60, offset 0
        selected #1, indicator at 0 width 100
        * #1 "A" x=0 w=100
        * #2 "B" x=100 w=100
        * #3 "C" x=200 w=100
        * #4 "D" x=300 w=100
        "#);
    }

    #[test]
    fn empty_report_text() {
        let (bar, _) = TabBarBuilder::new().build(Size::new(375.0, 60.0));
        let text = LayoutReport::from_tab_bar(&bar).render_text();
        assert_eq!(
            text,
            "container 375x60, fixed\npolicy width 0\ncontent 0x0, offset 0\nselected none\n"
        );
    }

    #[test]
    fn json_report_uses_plain_indices() {
        let json = scrolling_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["selected"], 1);
        assert_eq!(value["items_per_page"], 3.0);
        assert_eq!(value["content_size"]["width"], 1196.0);
        assert_eq!(value["items"][1]["title"], "Item2WithLongTitle");
        assert_eq!(value["items"][3]["visible"], false);
        assert_eq!(value["max_item_width"], serde_json::Value::Null);
    }
}
