//! # Introduction
//!
//! Registrar is a single-session course registration terminal.  A fixed
//! catalog of courses is seeded at startup; one student registers for and
//! drops courses subject to seat capacity, and reviews their registration
//! status, all through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Session pipeline
//!
//! ```text
//! Seed list → Catalog ⇄ Ledger ⇄ Student
//!                          │
//!                     ActivityLog → TUI
//! ```
//!
//! 1. [`catalog`] — the fixed course catalog: [`catalog::Course`] records
//!    with seat accounting, indexed for case-insensitive code lookup.
//! 2. [`enrollment`] — the registration core: the session's
//!    [`enrollment::Student`], and the ledger through which every
//!    register/drop mutation flows so both sides of the relationship stay
//!    consistent.
//! 3. [`session`] — the in-memory [`session::ActivityLog`] transcript the
//!    front end renders.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Everything lives in memory for the process duration.  There is no
//! persistence, no networking, and no multi-user coordination.

pub mod catalog;
pub mod enrollment;
pub mod session;
pub mod ui;
