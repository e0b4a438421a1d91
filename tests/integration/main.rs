//! Integration tests for sortviz

mod helpers;

mod cli_test;
mod compare_test;
mod headless_test;
mod inspect_test;
mod snapshot_test;
