mod identifiers_tests;
mod record_tests;
