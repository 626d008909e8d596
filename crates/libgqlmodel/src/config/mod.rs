mod array_representation;
mod field_naming;
mod float_representation;
mod int_representation;
mod model_config;

pub use array_representation::ArrayRepresentation;
pub use field_naming::FieldNaming;
pub use float_representation::FloatRepresentation;
pub use int_representation::IntRepresentation;
pub use model_config::ModelConfig;
