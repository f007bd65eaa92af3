mod account_tests;
mod announcement_tests;
