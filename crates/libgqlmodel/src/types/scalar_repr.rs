/// The concrete representation chosen for a scalar-typed field.
///
/// `primitive` is only ever `true` for a field that is not wrapped in a
/// sequence and only when primitives were requested by the configuration;
/// sequence elements are always boxed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ScalarRepr {
    BigDecimal,
    BigInteger,
    Boolean {
        primitive: bool,
    },
    /// A custom scalar mapped onto a named target by configuration.
    Custom {
        scalar_name: String,
        target: String,
    },
    Double {
        primitive: bool,
    },
    Float {
        primitive: bool,
    },
    Int32 {
        primitive: bool,
    },
    Int64 {
        primitive: bool,
    },
    String,
}
impl ScalarRepr {
    pub fn is_primitive(&self) -> bool {
        match self {
            Self::Boolean { primitive }
            | Self::Double { primitive }
            | Self::Float { primitive }
            | Self::Int32 { primitive }
            | Self::Int64 { primitive } => *primitive,

            Self::BigDecimal
            | Self::BigInteger
            | Self::Custom { .. }
            | Self::String => false,
        }
    }

    /// Rendered name: boxed kinds are capitalized (`Int32`), primitives are
    /// lower-cased (`int32`).
    pub fn type_name(&self) -> String {
        let boxed_name = match self {
            Self::BigDecimal => "BigDecimal",
            Self::BigInteger => "BigInteger",
            Self::Boolean { .. } => "Boolean",
            Self::Custom { target, .. } => return target.to_string(),
            Self::Double { .. } => "Double",
            Self::Float { .. } => "Float",
            Self::Int32 { .. } => "Int32",
            Self::Int64 { .. } => "Int64",
            Self::String => "String",
        };

        if self.is_primitive() {
            boxed_name.to_ascii_lowercase()
        } else {
            boxed_name.to_string()
        }
    }
}
