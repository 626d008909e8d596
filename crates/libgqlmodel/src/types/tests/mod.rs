mod object_type_tests;
mod type_annotation_tests;
