//! HTTP service hosting minesweeper sessions.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod store;
