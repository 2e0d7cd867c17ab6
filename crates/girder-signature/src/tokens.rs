/// The eight JVM base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveToken {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl PrimitiveToken {
    pub(crate) fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            b'B' => PrimitiveToken::Byte,
            b'C' => PrimitiveToken::Char,
            b'D' => PrimitiveToken::Double,
            b'F' => PrimitiveToken::Float,
            b'I' => PrimitiveToken::Int,
            b'J' => PrimitiveToken::Long,
            b'S' => PrimitiveToken::Short,
            b'Z' => PrimitiveToken::Boolean,
            _ => return None,
        })
    }
}

/// One unlinked type occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeToken {
    Primitive(PrimitiveToken),
    Class(ClassToken),
    /// Reference to a type variable by name (`TT;`).
    Variable(String),
    Array(Box<TypeToken>),
}

/// A class reference with its type arguments.
///
/// Nested signatures like `Lcom/x/Outer<TT;>.Inner<TU;>;` are flattened: the
/// internal name becomes `com/x/Outer$Inner` and the argument lists are
/// concatenated in segment order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassToken {
    /// Slash-separated internal name, `$` separating nested classes.
    pub internal_name: String,
    pub args: Vec<ArgToken>,
}

impl ClassToken {
    pub fn raw(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            args: Vec::new(),
        }
    }

    pub fn is_raw(&self) -> bool {
        self.args.is_empty()
    }
}

/// One type argument position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgToken {
    /// `*`
    Any,
    Exact(TypeToken),
    /// `+Sig`, an upper-bounded wildcard.
    Extends(TypeToken),
    /// `-Sig`, a lower-bounded wildcard.
    Super(TypeToken),
}

/// One declared type parameter: `T:ClassBound:IfaceBound...`.
///
/// The class bound slot is `None` when the declaration leaves it empty
/// (`T::Liface;`); an entirely unbounded parameter in source still arrives
/// with an explicit `java/lang/Object` class bound from the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParamToken {
    pub name: String,
    pub class_bound: Option<TypeToken>,
    pub interface_bounds: Vec<TypeToken>,
}

impl TypeParamToken {
    /// All declared bounds in JLS order: the class bound first (when present),
    /// then the interface bounds.
    pub fn bounds(&self) -> impl Iterator<Item = &TypeToken> {
        self.class_bound.iter().chain(self.interface_bounds.iter())
    }
}

/// Parsed `Signature` attribute of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignatureToken {
    pub type_params: Vec<TypeParamToken>,
    pub superclass: ClassToken,
    pub interfaces: Vec<ClassToken>,
}

/// Parsed `Signature` attribute of a method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignatureToken {
    pub type_params: Vec<TypeParamToken>,
    pub params: Vec<TypeToken>,
    /// `None` means `void`.
    pub return_type: Option<TypeToken>,
    pub throws: Vec<TypeToken>,
}

/// Parsed (non-generic) method descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptorToken {
    pub params: Vec<TypeToken>,
    /// `None` means `void`.
    pub return_type: Option<TypeToken>,
}
