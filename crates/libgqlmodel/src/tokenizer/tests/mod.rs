mod line_normalizer_tests;
