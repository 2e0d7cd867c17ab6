//! The type-system value model.
//!
//! Classes and type variables live at stable ids inside a [`crate::ClassGraph`];
//! `Type` values reference them by id instead of embedding them. That is what
//! makes self-referential generics (`T extends Comparable<T>`) representable
//! without infinite structures: the bound holds the variable's id, and reading
//! it goes back through the graph.

/// Stable key of a class entry inside one [`crate::ClassGraph`].
///
/// Ids are interned per name, so id equality is name equality for the whole
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable key of a type-variable declaration inside one [`crate::ClassGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVarId(pub(crate) u32);

impl TypeVarId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// The eight primitive types. `void` is modelled as an absent return type,
/// not a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

/// One type occurrence.
///
/// Equality is structural; since class ids are interned per name, two `Type`
/// values built independently from equal inputs compare equal, which makes
/// them safe map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A raw class or interface reference.
    Class(ClassId),
    Parameterized(ParameterizedType),
    Wildcard(WildcardBound),
    Variable(TypeVarId),
    Array(Box<Type>),
    Primitive(Primitive),
}

impl Type {
    pub fn parameterized(raw: ClassId, args: Vec<Type>) -> Type {
        Type::Parameterized(ParameterizedType { raw, args })
    }

    pub fn array(component: Type) -> Type {
        Type::Array(Box::new(component))
    }

    /// The raw class behind a class or parameterized reference.
    pub fn raw(&self) -> Option<ClassId> {
        match self {
            Type::Class(id) => Some(*id),
            Type::Parameterized(p) => Some(p.raw),
            _ => None,
        }
    }

    /// Array nesting depth: `0` for non-arrays, `2` for `int[][]`.
    pub fn dimensions(&self) -> usize {
        match self {
            Type::Array(component) => 1 + component.dimensions(),
            _ => 0,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }
}

/// A generic type instantiation: raw class plus ordered type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterizedType {
    pub raw: ClassId,
    pub args: Vec<Type>,
}

/// A wildcard type argument. At most one meaningful bound exists on each side;
/// `Unbounded` has neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Unbounded,
    Extends(Box<Type>),
    Super(Box<Type>),
}

impl WildcardBound {
    pub fn upper_bound(&self) -> Option<&Type> {
        match self {
            WildcardBound::Extends(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn lower_bound(&self) -> Option<&Type> {
        match self {
            WildcardBound::Super(ty) => Some(ty),
            _ => None,
        }
    }
}

/// One declared type parameter.
///
/// `bounds` is never empty once the owning declaration is complete: an
/// unbounded parameter carries the implicit `java.lang.Object` bound. The
/// first bound may be a class, the rest are interfaces; any bound may
/// reference the variable itself or a sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVarDef {
    pub name: String,
    pub owner: TypeVarOwner,
    pub bounds: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeVarOwner {
    Class(ClassId),
    Method { class: ClassId, method: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn structurally_equal_types_collide_as_map_keys() {
        let raw = ClassId(7);
        let arg = Type::Class(ClassId(3));
        let a = Type::parameterized(raw, vec![arg.clone()]);
        let b = Type::parameterized(raw, vec![arg]);
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 1);
        map.insert(b, 2);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn dimensions_count_array_nesting() {
        let ty = Type::array(Type::array(Type::Primitive(Primitive::Int)));
        assert_eq!(ty.dimensions(), 2);
        assert_eq!(Type::Primitive(Primitive::Int).dimensions(), 0);
    }

    #[test]
    fn raw_sees_through_parameterization_but_not_arrays() {
        let id = ClassId(4);
        assert_eq!(Type::Class(id).raw(), Some(id));
        assert_eq!(Type::parameterized(id, vec![]).raw(), Some(id));
        assert_eq!(Type::array(Type::Class(id)).raw(), None);
    }
}
