//! Integration tests for the full pipeline

mod config_tests;
