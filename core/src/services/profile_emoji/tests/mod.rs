mod announcement_tests;
