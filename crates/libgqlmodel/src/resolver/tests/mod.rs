mod type_resolver_tests;
