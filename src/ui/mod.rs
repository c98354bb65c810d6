//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, screen flow
//!   (welcome prompts, menu, register/view/drop)
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (prompt, menu, catalog, registrations, code input, activity log,
//!   status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a seeded
//! [`Catalog`] and call [`App::run`] to start the event loop.
//!
//! [`Catalog`]: crate::catalog::Catalog
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
