//! Invoke command: run the service's test suite through the test runner.


pub use test::{export_function_environment, run_tests};
