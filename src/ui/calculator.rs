//! The calculator window.
//!
//! [`CalculatorView`] owns the engine and renders it: display card, keypad,
//! optional scientific rows and the history panel. All state changes go
//! through [`Calculator::apply`]; the view only tracks presentation state.

use crate::calculator::{Calculator, EntryMode, Input, copy_to_clipboard, group_digits};
use crate::config::Config;
use crate::history::{HistoryId, HistoryLog};
use crate::ui::history::HistoryListDelegate;
use crate::ui::keypad::{KeyKind, KeypadKey, basic_rows, render_key, scientific_rows};
use crate::ui::theme::theme;
use gpui::{
    App, ClickEvent, Context, Div, ElementId, Entity, FocusHandle, FontWeight, KeyDownEvent,
    SharedString, Stateful, Window, div, prelude::*, px,
};
use gpui_component::list::{List, ListState};

/// Which panel fills the card below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Panel {
    Keypad,
    History,
}

/// Requests coming back from the history list callbacks.
#[derive(Clone, Copy, Debug)]
enum HistoryRequest {
    Select(HistoryId),
    Back,
}

pub struct CalculatorView {
    calculator: Calculator,
    panel: Panel,
    scientific: bool,
    group_digits: bool,
    /// Short feedback line, e.g. after copying.
    status: Option<SharedString>,
    history_list: Entity<ListState<HistoryListDelegate>>,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(config: &Config, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let (request_tx, request_rx) = flume::unbounded::<HistoryRequest>();

        let mut delegate = HistoryListDelegate::new();
        let select_tx = request_tx.clone();
        delegate.set_on_select(move |entry| {
            let _ = select_tx.send(HistoryRequest::Select(entry.id));
        });
        delegate.set_on_back(move || {
            let _ = request_tx.send(HistoryRequest::Back);
        });

        let history_list = cx.new(|cx| ListState::new(delegate, window, cx).searchable(true));

        // The list callbacks run without access to this view, so they hand
        // requests over a channel that is drained on the UI thread.
        cx.spawn(async move |this, cx| {
            while let Ok(request) = request_rx.recv_async().await {
                let handled = this.update(cx, |view, cx| match request {
                    HistoryRequest::Select(id) => view.recall(id, cx),
                    HistoryRequest::Back => view.show_panel(Panel::Keypad, cx),
                });
                if handled.is_err() {
                    break;
                }
            }
        })
        .detach();

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle, cx);

        Self {
            calculator: Calculator::with_history(HistoryLog::with_capacity(
                config.history.capacity,
            )),
            panel: Panel::Keypad,
            scientific: config.display.scientific,
            group_digits: config.display.group_digits,
            status: None,
            history_list,
            focus_handle,
        }
    }

    /// Apply one input to the engine and refresh.
    fn press(&mut self, input: Input, cx: &mut Context<Self>) {
        let newest = self.calculator.history().newest_id();
        self.calculator.apply(&input);
        self.status = None;

        if self.calculator.history().newest_id() != newest {
            self.sync_history(cx);
        }
        cx.notify();
    }

    fn recall(&mut self, id: HistoryId, cx: &mut Context<Self>) {
        if self.calculator.select_history(id) {
            tracing::debug!(%id, "recalled history entry");
            self.status = None;
            self.panel = Panel::Keypad;
        }
        cx.notify();
    }

    fn show_panel(&mut self, panel: Panel, cx: &mut Context<Self>) {
        if panel == Panel::History {
            self.sync_history(cx);
        }
        self.panel = panel;
        cx.notify();
    }

    fn sync_history(&mut self, cx: &mut Context<Self>) {
        let history = self.calculator.history();
        self.history_list.update(cx, |list, cx| {
            list.delegate_mut().set_history(history);
            cx.notify();
        });
    }

    fn copy_result(&mut self, cx: &mut Context<Self>) {
        let text = self.calculator.committed_display().to_string();
        self.status = Some(match copy_to_clipboard(&text) {
            Ok(()) => SharedString::from(format!("Copied {}", text)),
            Err(err) => {
                tracing::warn!(%err, "copy failed");
                SharedString::from("Copy failed")
            }
        });
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }
        let key = keystroke.key.as_str();

        if self.panel == Panel::History {
            if key == "escape" {
                self.show_panel(Panel::Keypad, cx);
                cx.stop_propagation();
            }
            return;
        }

        if let EntryMode::Editing(raw) = self.calculator.mode() {
            let mut text = raw.clone();
            let input = match key {
                "enter" => Input::CommitEdit,
                "escape" => Input::CancelEdit,
                "backspace" => {
                    text.pop();
                    Input::SetEditText(text)
                }
                _ => match keystroke.key_char.as_deref() {
                    Some(typed) if !typed.chars().any(char::is_control) => {
                        text.push_str(typed);
                        Input::SetEditText(text)
                    }
                    _ => return,
                },
            };
            self.press(input, cx);
            cx.stop_propagation();
            return;
        }

        let input = keystroke
            .key_char
            .as_deref()
            .and_then(Input::from_keystroke)
            .or_else(|| Input::from_keystroke(key));
        if let Some(input) = input {
            self.press(input, cx);
            cx.stop_propagation();
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();

        let title = div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_color(t.accent_color)
                    .font_weight(FontWeight::BOLD)
                    .child(SharedString::from("=")),
            )
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(t.header_title_color)
                    .child(SharedString::from("Calculator")),
            );

        let actions = div()
            .flex()
            .items_center()
            .gap_1()
            .child(header_button(
                "edit",
                "Edit",
                self.calculator.edit_mode(),
                cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.press(Input::ToggleEdit, cx)
                }),
            ))
            .child(header_button(
                "copy",
                "Copy",
                false,
                cx.listener(|this, _: &ClickEvent, _window, cx| this.copy_result(cx)),
            ))
            .child(header_button(
                "history",
                "History",
                false,
                cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.show_panel(Panel::History, cx)
                }),
            ))
            .child(header_button(
                "advanced",
                if self.scientific { "Normal" } else { "Advanced" },
                false,
                cx.listener(|this, _: &ClickEvent, _window, cx| {
                    this.scientific = !this.scientific;
                    cx.notify();
                }),
            ));

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(title)
            .child(actions)
    }

    fn render_display(&self) -> Div {
        let t = theme();
        let editing = self.calculator.edit_mode();

        let shown = if editing || !self.group_digits {
            self.calculator.display().to_string()
        } else {
            group_digits(self.calculator.display())
        };

        let expression = self.calculator.running_expression().unwrap_or_default();

        let mut value = div()
            .w_full()
            .text_3xl()
            .text_color(if editing {
                t.display_edit_color
            } else {
                t.display_text_color
            })
            .whitespace_nowrap()
            .overflow_hidden()
            .text_ellipsis()
            .child(SharedString::from(shown));

        if editing {
            value = value.border_b_1().border_color(t.accent_color);
        }

        let mut display = div()
            .w_full()
            .p(t.display_padding)
            .bg(t.display_background)
            .rounded(t.display_border_radius)
            .flex()
            .flex_col()
            .items_end()
            .gap_1()
            .child(
                div()
                    .h(px(18.0))
                    .text_sm()
                    .text_color(t.expression_color)
                    .child(SharedString::from(expression)),
            )
            .child(value);

        if let Some(status) = &self.status {
            display = display.child(
                div()
                    .text_xs()
                    .text_color(t.status_color)
                    .child(status.clone()),
            );
        }

        display
    }

    fn render_keys(
        &self,
        rows: Vec<Vec<KeypadKey>>,
        prefix: &'static str,
        cx: &mut Context<Self>,
    ) -> Div {
        let t = theme();
        let pending_operator = self.calculator.pending_operator();

        let mut grid = div().w_full().flex().flex_col().gap(t.key_gap);
        for (row_ix, row) in rows.into_iter().enumerate() {
            let mut line = div().w_full().flex().flex_row().gap(t.key_gap);
            for (col_ix, key) in row.into_iter().enumerate() {
                let active = key.kind == KeyKind::Operator
                    && matches!(key.input, Input::Operator(op) if Some(op) == pending_operator);
                let input = key.input.clone();
                let id = ElementId::NamedInteger(prefix.into(), (row_ix * 8 + col_ix) as u64);

                line = line.child(render_key(
                    &key,
                    id,
                    active,
                    cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.press(input.clone(), cx)
                    }),
                ));
            }
            grid = grid.child(line);
        }
        grid
    }

    fn render_keypad_panel(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();
        let mut panel = div()
            .w_full()
            .flex()
            .flex_col()
            .gap(t.key_gap)
            .child(self.render_display());

        if self.scientific {
            panel = panel.child(self.render_keys(scientific_rows(), "sci-key", cx));
        }

        panel.child(self.render_keys(basic_rows(), "key", cx))
    }

    fn render_history_panel(&self, cx: &mut Context<Self>) -> Div {
        let t = theme();
        let has_entries = !self.calculator.history().is_empty();

        let mut header = div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(header_button(
                        "history-back",
                        "←",
                        false,
                        cx.listener(|this, _: &ClickEvent, _window, cx| {
                            this.show_panel(Panel::Keypad, cx)
                        }),
                    ))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(t.header_title_color)
                            .child(SharedString::from("History")),
                    ),
            );

        if has_entries {
            header = header.child(
                header_button(
                    "history-clear",
                    "Clear",
                    false,
                    cx.listener(|this, _: &ClickEvent, _window, cx| {
                        this.press(Input::ClearHistory, cx)
                    }),
                )
                .text_color(t.danger_color),
            );
        }

        div()
            .w_full()
            .flex_1()
            .min_h_0()
            .flex()
            .flex_col()
            .gap(t.key_gap)
            .child(header)
            .child(
                div()
                    .w_full()
                    .flex_1()
                    .min_h_0()
                    .child(List::new(&self.history_list)),
            )
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        let body = match self.panel {
            Panel::Keypad => self.render_keypad_panel(cx),
            Panel::History => self.render_history_panel(cx),
        };

        let mut card = div()
            .size_full()
            .p(t.card_padding)
            .bg(t.card_background)
            .rounded(t.card_border_radius)
            .flex()
            .flex_col()
            .gap(t.key_gap);
        if self.panel == Panel::Keypad {
            card = card.child(self.render_header(cx));
        }

        div()
            .key_context("Calculator")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .bg(t.window_background)
            .child(card.child(body))
    }
}

/// Small text button used in the card headers.
fn header_button(
    id: &'static str,
    label: &'static str,
    active: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let t = theme();

    div()
        .id(id)
        .px_2()
        .py_1()
        .rounded(px(8.0))
        .text_sm()
        .text_color(t.accent_color)
        .cursor_pointer()
        .when(active, |this| this.bg(t.accent_background))
        .hover(|style| style.bg(t.accent_background))
        .on_click(on_click)
        .child(SharedString::from(label))
}
