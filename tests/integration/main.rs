//! Integration test harness

mod helpers;

mod cli_test;
mod config_test;
mod cycle_test;
mod faq_test;
mod highlight_test;
