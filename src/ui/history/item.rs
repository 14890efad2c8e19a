//! History row rendering.

use crate::history::HistoryEntry;
use crate::ui::theme::theme;
use gpui::{Div, ElementId, FontWeight, SharedString, Stateful, div, prelude::*, px};

/// Render one history row: expression, `= result` and the time it was made.
pub fn render_history_item(entry: &HistoryEntry, selected: bool, row: usize) -> Stateful<Div> {
    let t = theme();

    let bg_color = if selected {
        t.item_background_selected
    } else {
        t.item_background
    };

    div()
        .id(ElementId::NamedInteger("history-item".into(), row as u64))
        .w_full()
        .my(t.item_margin_y)
        .px(t.item_padding_x)
        .py(t.item_padding_y)
        .bg(bg_color)
        .rounded(t.item_border_radius)
        .overflow_hidden()
        .cursor_pointer()
        .flex()
        .flex_row()
        .items_start()
        .justify_between()
        .gap_2()
        .child(render_history_content(entry))
        .child(
            div()
                .flex_shrink_0()
                .text_xs()
                .text_color(t.item_time_color)
                .child(SharedString::from(entry.time_label())),
        )
}

fn render_history_content(entry: &HistoryEntry) -> Div {
    let t = theme();

    let expression = div()
        .w_full()
        .text_sm()
        .text_color(t.item_expression_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .child(SharedString::from(entry.expression.clone()));

    let result = div()
        .w_full()
        .text_lg()
        .font_weight(FontWeight::MEDIUM)
        .text_color(t.item_result_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .child(SharedString::from(format!("= {}", entry.result)));

    div()
        .flex_1()
        .min_w_0()
        .flex()
        .flex_col()
        .gap(px(2.0))
        .child(expression)
        .child(result)
}
