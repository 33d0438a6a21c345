mod byte_order_tests;
mod text_format_tests;
