mod argument_declaration;
mod declaration_body;
mod entity_declaration;
mod field_declaration;
mod member_list_parser;
mod model_builder;
mod schema_model;

pub(crate) use argument_declaration::ArgumentDeclaration;
pub(crate) use declaration_body::DeclarationBody;
pub(crate) use entity_declaration::EntityDeclaration;
pub(crate) use field_declaration::FieldDeclaration;
pub(crate) use member_list_parser::MemberListParser;
pub use model_builder::ModelBuilder;
pub use schema_model::SchemaModel;

#[cfg(test)]
mod tests;
