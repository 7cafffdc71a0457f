mod archive_tests;
