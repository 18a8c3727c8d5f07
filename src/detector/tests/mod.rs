mod test_utils;
mod locator_tests;
