//! HTTP-level tests against the full router and an in-memory database

mod api_tests;
mod common;
