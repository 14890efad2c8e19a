mod delegate;
mod item;

pub use delegate::HistoryListDelegate;
pub use item::render_history_item;
