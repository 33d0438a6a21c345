mod cursor_tests;
mod plane_stack_tests;
