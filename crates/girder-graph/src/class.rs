use girder_record::{AnnotationValue, TypeKind};

use crate::error::ImportError;
use crate::ty::{ClassId, Type, TypeVarId};

/// Lifecycle of a class entry. Forward-only: `Stub → Building → Complete`.
///
/// `Stub` is a legitimate permanent state: it marks a type that was referenced
/// during the run but never supplied a record (an out-of-scope dependency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Stub,
    Building,
    Complete,
}

/// One class in the finished graph.
///
/// For a stub, every structural accessor answers "empty"/"absent" rather than
/// failing; only the name is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// Dotted binary name, the unique key for the whole run.
    pub name: String,
    pub kind: TypeKind,
    pub access_flags: u16,
    pub state: Completion,
    pub superclass: Option<Type>,
    pub interfaces: Vec<Type>,
    pub type_params: Vec<TypeVarId>,
    pub fields: Vec<FieldDef>,
    pub methods: Vec<MethodDef>,
    pub annotations: Vec<Annotation>,
    /// Failures captured while importing this declaration. A non-empty list
    /// means parts of the class were degraded, not that the class is unusable.
    pub diagnostics: Vec<ImportError>,
}

impl ClassDef {
    pub(crate) fn stub(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: TypeKind::Class,
            access_flags: 0,
            state: Completion::Stub,
            superclass: None,
            interfaces: Vec::new(),
            type_params: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_stub(&self) -> bool {
        self.state == Completion::Stub
    }

    pub fn is_complete(&self) -> bool {
        self.state == Completion::Complete
    }

    /// Name after the last `.` and `$`, e.g. `Inner` for `com.x.Outer$Inner`.
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit(['.', '$'])
            .next()
            .unwrap_or(self.name.as_str())
    }

    /// Dotted package prefix, empty for the default package.
    pub fn package_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All methods with the given name (overloads), excluding constructors.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDef> {
        self.methods
            .iter()
            .filter(move |m| !m.is_constructor() && m.name == name)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodDef> {
        self.methods.iter().filter(|m| m.is_constructor())
    }

    pub fn is_annotated_with(&self, annotation: ClassId) -> bool {
        self.annotations.iter().any(|a| a.class == annotation)
    }
}

/// One imported field with its linked type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub access_flags: u16,
    pub ty: Type,
    pub annotations: Vec<Annotation>,
}

/// One imported method or constructor (JVM name `<init>`).
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    pub name: String,
    pub access_flags: u16,
    /// Method-level type parameters; they shadow class-level ones of the same
    /// name inside this method's types.
    pub type_params: Vec<TypeVarId>,
    pub params: Vec<Type>,
    /// `None` means `void`.
    pub return_type: Option<Type>,
    /// Generic throws clause, when a generic signature declared one.
    pub throws: Vec<Type>,
    pub annotations: Vec<Annotation>,
}

impl MethodDef {
    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }
}

/// An annotation use, linked to the annotation type's class entry. The entry
/// is a stub when the annotation type itself was out of scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub class: ClassId,
    pub elements: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn element(&self, name: &str) -> Option<&AnnotationValue> {
        self.elements
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_and_package_names() {
        let class = ClassDef::stub("com.x.Outer$Inner");
        assert_eq!(class.simple_name(), "Inner");
        assert_eq!(class.package_name(), "com.x");

        let unpackaged = ClassDef::stub("Top");
        assert_eq!(unpackaged.simple_name(), "Top");
        assert_eq!(unpackaged.package_name(), "");
    }

    #[test]
    fn stubs_answer_structural_accessors_with_empty_results() {
        let class = ClassDef::stub("com.x.Missing");
        assert!(class.is_stub());
        assert_eq!(class.superclass, None);
        assert!(class.interfaces.is_empty());
        assert!(class.type_params.is_empty());
        assert!(class.field("any").is_none());
        assert_eq!(class.constructors().count(), 0);
    }
}
