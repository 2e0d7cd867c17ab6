use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationRecord;

/// What sort of declaration a [`ClassRecord`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// One decoded type declaration.
///
/// `name` is the binary name in dotted form (`com.example.Outer$Inner`); it is
/// the unique key of the declaration for a whole analysis run. `signature`
/// carries the raw generic class signature when the declaration is generic or
/// extends/implements generic types; the plain `superclass_name` /
/// `interface_names` are always present as the erased fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub access_flags: u16,
    #[serde(default)]
    pub superclass_name: Option<String>,
    #[serde(default)]
    pub interface_names: Vec<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    #[serde(default)]
    pub methods: Vec<MethodRecord>,
    #[serde(default)]
    pub annotations: Vec<AnnotationRecord>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            access_flags: 0,
            superclass_name: None,
            interface_names: Vec::new(),
            signature: None,
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(default)]
    pub access_flags: u16,
    /// JVM field descriptor, e.g. `Ljava/util/List;` or `[I`.
    pub descriptor: String,
    /// Raw generic signature, when the field type is generic.
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationRecord>,
}

impl FieldRecord {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_flags: 0,
            descriptor: descriptor.into(),
            signature: None,
            annotations: Vec::new(),
        }
    }
}

/// One decoded method or constructor. Constructors use the JVM name `<init>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    #[serde(default)]
    pub access_flags: u16,
    /// JVM method descriptor, e.g. `(ILjava/lang/String;)V`.
    pub descriptor: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationRecord>,
}

impl MethodRecord {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_flags: 0,
            descriptor: descriptor.into(),
            signature: None,
            annotations: Vec::new(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_record_round_trips_through_json() {
        let record = ClassRecord {
            superclass_name: Some("java.lang.Object".to_string()),
            interface_names: vec!["java.io.Serializable".to_string()],
            signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;".to_string()),
            fields: vec![FieldRecord::new("value", "TT;")],
            methods: vec![MethodRecord::new("get", "()Ljava/lang/Object;")],
            ..ClassRecord::new("com.example.Box", TypeKind::Class)
        };

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: ClassRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn omitted_fields_default_when_deserializing() {
        let record: ClassRecord =
            serde_json::from_str(r#"{ "name": "com.example.A", "kind": "Interface" }"#).unwrap();
        assert_eq!(record.kind, TypeKind::Interface);
        assert_eq!(record.superclass_name, None);
        assert!(record.fields.is_empty());
        assert!(record.methods.is_empty());
    }

    #[test]
    fn constructors_are_recognized_by_jvm_name() {
        assert!(MethodRecord::new("<init>", "()V").is_constructor());
        assert!(!MethodRecord::new("init", "()V").is_constructor());
    }
}
