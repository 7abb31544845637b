//! Record source tests
