mod test_utils;
mod set_operation_tests;
mod morphology_tests;
