pub mod calculator;
pub mod history;
pub mod keypad;
pub mod theme;

pub use calculator::CalculatorView;
pub use history::HistoryListDelegate;
pub use theme::{CalculatorTheme, theme};

use crate::config::Config;
use gpui::{
    App, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size,
};

/// Open the calculator window and run the event loop until it is closed.
pub fn run(config: Config) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            let bounds = Bounds::centered(
                None,
                size(px(config.window.width), px(config.window.height)),
                cx,
            );
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Calculator".into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                cx.new(|cx| CalculatorView::new(&config, window, cx))
            });
            if let Err(err) = opened {
                tracing::error!(%err, "failed to open calculator window");
                cx.quit();
                return;
            }

            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();
            cx.activate(true);
        });
}
