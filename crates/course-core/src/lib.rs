//! # Course Core Library
//!
//! This crate provides the core functionality for the Course List TUI application.
//! It contains the catalog data, the search filter and the session state,
//! independent of any specific user interface.
//!
//! ## Modules
//!
//! - `course`: The course record
//! - `catalog`: Built-in and file-backed read-only catalogs
//! - `filter`: Case-insensitive title/code search
//! - `browser`: Query, dark-mode, expanded-card and selection state
//! - `settings`: Application configuration management
//! - `theme`: UI theming system

pub mod browser;
pub mod catalog;
pub mod course;
pub mod filter;
pub mod settings;
pub mod theme;
