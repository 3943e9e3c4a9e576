//! folio
//!
//! A paginated terminal book reader for portfolio and resume content.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `pagination` and
//! `state` are plain data and transitions testable without a terminal;
//! `view` owns the terminal and the event loop; `storage`, `content`,
//! `config` and `logging` are the edges that touch the filesystem.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod state;
pub mod storage;
pub mod view;
