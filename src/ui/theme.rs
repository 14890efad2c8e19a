//! Colors and metrics for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

pub struct CalculatorTheme {
    pub window_background: Hsla,
    pub card_background: Hsla,
    pub card_border_radius: Pixels,
    pub card_padding: Pixels,

    pub header_title_color: Hsla,
    pub accent_color: Hsla,
    pub accent_background: Hsla,

    pub display_background: Hsla,
    pub display_text_color: Hsla,
    pub display_edit_color: Hsla,
    pub display_padding: Pixels,
    pub display_border_radius: Pixels,
    pub expression_color: Hsla,

    pub key_gap: Pixels,
    pub key_height: Pixels,
    pub key_border_radius: Pixels,
    pub key_number_background: Hsla,
    pub key_function_background: Hsla,
    pub key_operator_background: Hsla,
    pub key_operator_active_background: Hsla,
    pub key_text_color: Hsla,

    pub item_background: Hsla,
    pub item_background_selected: Hsla,
    pub item_padding_x: Pixels,
    pub item_padding_y: Pixels,
    pub item_margin_y: Pixels,
    pub item_border_radius: Pixels,
    pub item_expression_color: Hsla,
    pub item_result_color: Hsla,
    pub item_time_color: Hsla,

    pub danger_color: Hsla,
    pub status_color: Hsla,

    pub empty_state_color: Hsla,
    pub empty_state_height: Pixels,
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme::dark();
}

/// The active theme.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}

impl CalculatorTheme {
    fn dark() -> Self {
        let orange = hsla(25.0 / 360.0, 0.95, 0.53, 1.0);

        Self {
            window_background: hsla(0.0, 0.0, 0.08, 1.0),
            card_background: hsla(0.0, 0.0, 0.0, 0.9),
            card_border_radius: px(24.0),
            card_padding: px(20.0),

            header_title_color: hsla(0.0, 0.0, 1.0, 1.0),
            accent_color: orange,
            accent_background: hsla(25.0 / 360.0, 0.95, 0.53, 0.2),

            display_background: hsla(220.0 / 360.0, 0.2, 0.12, 0.5),
            display_text_color: hsla(0.0, 0.0, 1.0, 1.0),
            display_edit_color: orange,
            display_padding: px(20.0),
            display_border_radius: px(16.0),
            expression_color: hsla(0.0, 0.0, 0.6, 1.0),

            key_gap: px(10.0),
            key_height: px(56.0),
            key_border_radius: px(12.0),
            key_number_background: hsla(220.0 / 360.0, 0.1, 0.3, 1.0),
            key_function_background: hsla(220.0 / 360.0, 0.1, 0.4, 1.0),
            key_operator_background: orange,
            key_operator_active_background: hsla(25.0 / 360.0, 0.95, 0.7, 1.0),
            key_text_color: hsla(0.0, 0.0, 1.0, 1.0),

            item_background: hsla(220.0 / 360.0, 0.2, 0.12, 0.5),
            item_background_selected: hsla(220.0 / 360.0, 0.15, 0.22, 0.8),
            item_padding_x: px(14.0),
            item_padding_y: px(10.0),
            item_margin_y: px(4.0),
            item_border_radius: px(12.0),
            item_expression_color: hsla(0.0, 0.0, 0.8, 1.0),
            item_result_color: hsla(0.0, 0.0, 1.0, 1.0),
            item_time_color: hsla(0.0, 0.0, 0.45, 1.0),

            danger_color: hsla(0.0, 0.8, 0.6, 1.0),
            status_color: hsla(0.0, 0.0, 0.55, 1.0),

            empty_state_color: hsla(0.0, 0.0, 0.6, 1.0),
            empty_state_height: px(120.0),
        }
    }
}
