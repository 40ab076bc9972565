#![allow(dead_code, unused_imports)]

pub use gerror_test_utils::builders;
pub use gerror_test_utils::init_tracing;
