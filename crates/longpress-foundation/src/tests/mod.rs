mod exclusive_tests;
