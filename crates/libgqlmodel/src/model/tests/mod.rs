mod model_builder_tests;
