//! zcalc: a basic/scientific calculator with calculation history.
//!
//! The [`calculator`] engine and [`history`] store hold all behavior; [`ui`]
//! (a GPUI window) and [`cli`] (headless evaluation) are presentation layers
//! on top of them.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod ui;
