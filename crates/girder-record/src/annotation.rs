use serde::{Deserialize, Serialize};

/// A decoded annotation use: the annotation type's field descriptor plus the
/// explicitly supplied element values, in declaration order.
///
/// Defaulted elements are absent; recovering defaults requires the annotation
/// type's own record and is left to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Field descriptor of the annotation type, e.g. `Lcom/example/Marker;`.
    pub type_descriptor: String,
    #[serde(default)]
    pub elements: Vec<(String, AnnotationValue)>,
}

impl AnnotationRecord {
    pub fn new(type_descriptor: impl Into<String>) -> Self {
        Self {
            type_descriptor: type_descriptor.into(),
            elements: Vec::new(),
        }
    }
}

/// One annotation element value, mirroring the `element_value` union of the
/// classfile format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Enum constant: the enum type's descriptor and the constant name.
    Enum {
        type_descriptor: String,
        const_name: String,
    },
    /// A class literal, as a field descriptor.
    Class(String),
    Annotation(Box<AnnotationRecord>),
    Array(Vec<AnnotationValue>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn annotation_round_trips_through_json() {
        let record = AnnotationRecord {
            type_descriptor: "Lcom/example/Tagged;".to_string(),
            elements: vec![
                ("value".to_string(), AnnotationValue::String("x".to_string())),
                (
                    "targets".to_string(),
                    AnnotationValue::Array(vec![AnnotationValue::Enum {
                        type_descriptor: "Lcom/example/Target;".to_string(),
                        const_name: "FIELD".to_string(),
                    }]),
                ),
            ],
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: AnnotationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
