//! Integration tests for parsing and evaluating arithmetic expressions

mod concurrency_tests;
mod error_tests;
mod precedence_tests;
