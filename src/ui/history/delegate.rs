//! History list delegate.

use crate::history::{HistoryEntry, HistoryLog};
use crate::ui::history::render_history_item;
use crate::ui::theme::theme;
use gpui::{App, Context, SharedString, Task, Window, div, prelude::*};
use gpui_component::IndexPath;
use gpui_component::list::{ListDelegate, ListItem as GpuiListItem, ListState};
use std::sync::Arc;

/// Delegate for browsing and selecting past calculations.
pub struct HistoryListDelegate {
    history: HistoryLog,
    /// Entries matching the current query, newest first.
    items: Vec<HistoryEntry>,
    selected_index: Option<usize>,
    query: String,
    on_select: Option<Arc<dyn Fn(&HistoryEntry) + Send + Sync>>,
    on_back: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Default for HistoryListDelegate {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryListDelegate {
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
            items: Vec::new(),
            selected_index: None,
            query: String::new(),
            on_select: None,
            on_back: None,
        }
    }

    /// Set callback for when a history entry is selected.
    pub fn set_on_select(&mut self, callback: impl Fn(&HistoryEntry) + Send + Sync + 'static) {
        self.on_select = Some(Arc::new(callback));
    }

    /// Set callback for going back to the keypad.
    pub fn set_on_back(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_back = Some(Arc::new(callback));
    }

    /// Replace the shown history and re-apply the current query.
    pub fn set_history(&mut self, history: &HistoryLog) {
        self.history = history.clone();
        self.filter();
    }

    /// Set the search query and filter entries.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.filter();
    }

    /// Filter history entries based on query.
    pub fn filter(&mut self) {
        self.items = self
            .history
            .search(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.selected_index = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Get currently selected entry.
    pub fn selected_item(&self) -> Option<&HistoryEntry> {
        self.selected_index.and_then(|idx| self.items.get(idx))
    }

    /// Confirm selection (load the result into the calculator).
    pub fn do_confirm(&self) {
        if let Some(item) = self.selected_item()
            && let Some(ref on_select) = self.on_select
        {
            on_select(item);
        }
    }

    /// Cancel (go back).
    pub fn do_back(&self) {
        if let Some(ref on_back) = self.on_back {
            on_back();
        }
    }
}

impl ListDelegate for HistoryListDelegate {
    type Item = GpuiListItem;

    fn sections_count(&self, _cx: &App) -> usize {
        1
    }

    fn items_count(&self, _section: usize, _cx: &App) -> usize {
        self.items.len()
    }

    fn render_item(
        &mut self,
        ix: IndexPath,
        _window: &mut Window,
        _cx: &mut Context<'_, ListState<Self>>,
    ) -> Option<Self::Item> {
        let item = self.items.get(ix.row)?;
        let is_selected = self.selected_index == Some(ix.row);

        let element = render_history_item(item, is_selected, ix.row);

        Some(
            GpuiListItem::new(("history-item", ix.row))
                .py_0()
                .px_0()
                .child(element),
        )
    }

    fn set_selected_index(
        &mut self,
        ix: Option<IndexPath>,
        _window: &mut Window,
        _cx: &mut Context<ListState<Self>>,
    ) {
        self.selected_index = ix.map(|i| i.row);
    }

    fn perform_search(
        &mut self,
        query: &str,
        _window: &mut Window,
        _cx: &mut Context<ListState<Self>>,
    ) -> Task<()> {
        self.set_query(query.to_string());
        Task::ready(())
    }

    fn confirm(
        &mut self,
        _secondary: bool,
        _window: &mut Window,
        _cx: &mut Context<ListState<Self>>,
    ) {
        self.do_confirm();
    }

    fn cancel(&mut self, _window: &mut Window, _cx: &mut Context<ListState<Self>>) {
        self.do_back();
    }

    fn render_empty(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<'_, ListState<Self>>,
    ) -> impl IntoElement {
        let t = theme();
        let message = if self.history.is_empty() {
            "No calculations yet"
        } else {
            "No matching calculations"
        };

        div()
            .w_full()
            .h(t.empty_state_height)
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .text_sm()
                    .text_color(t.empty_state_color)
                    .child(SharedString::from(message)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn delegate_with(expressions: &[(&str, &str)]) -> HistoryListDelegate {
        let mut log = HistoryLog::new();
        for (expression, result) in expressions {
            log.append(expression.to_string(), result.to_string());
        }
        let mut delegate = HistoryListDelegate::new();
        delegate.set_history(&log);
        delegate
    }

    #[test]
    fn test_empty_history_has_no_selection() {
        let delegate = HistoryListDelegate::new();
        assert_eq!(delegate.items.len(), 0);
        assert!(delegate.selected_item().is_none());
    }

    #[test]
    fn test_newest_selected_first() {
        let delegate = delegate_with(&[("3 + 4", "7"), ("sin(30)", "0.5")]);
        assert_eq!(delegate.items.len(), 2);
        assert_eq!(delegate.selected_item().map(|e| e.result.as_str()), Some("0.5"));
    }

    #[test]
    fn test_set_history_keeps_query() {
        let mut delegate = delegate_with(&[("3 + 4", "7")]);
        delegate.set_query("sqrt".to_string());
        assert!(delegate.items.is_empty());

        let mut log = HistoryLog::new();
        log.append("3 + 4".to_string(), "7".to_string());
        log.append("sqrt(16)".to_string(), "4".to_string());
        delegate.set_history(&log);
        assert_eq!(delegate.items.len(), 1);
        assert_eq!(
            delegate.selected_item().map(|e| e.expression.as_str()),
            Some("sqrt(16)")
        );
    }

    #[test]
    fn test_query_filters_entries() {
        let mut delegate = delegate_with(&[("3 + 4", "7"), ("sqrt(16)", "4"), ("sin(30)", "0.5")]);
        delegate.set_query("sqrt".to_string());
        assert_eq!(delegate.items.len(), 1);
        assert_eq!(
            delegate.selected_item().map(|e| e.expression.as_str()),
            Some("sqrt(16)")
        );

        delegate.set_query(String::new());
        assert_eq!(delegate.items.len(), 3);
    }

    #[test]
    fn test_confirm_invokes_callback() {
        let mut delegate = delegate_with(&[("3 + 4", "7")]);
        let chosen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&chosen);
        delegate.set_on_select(move |entry| {
            *sink.lock().unwrap() = Some(entry.id);
        });

        delegate.do_confirm();
        let expected = delegate.selected_item().map(|e| e.id);
        assert_eq!(*chosen.lock().unwrap(), expected);
    }
}
