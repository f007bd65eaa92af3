//! Tests for the cache module

mod memory_store_tests;
