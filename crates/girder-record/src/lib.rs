//! Structural records: the decoded, language-agnostic description of one
//! compiled declaration, as handed over by a bytecode decoder.
//!
//! Records are plain data. Names inside descriptors and signatures are raw
//! strings; nothing here is linked against other declarations. Linking is the
//! job of `girder-graph`.

#![forbid(unsafe_code)]

mod annotation;
pub mod flags;
mod record;

pub use crate::annotation::{AnnotationRecord, AnnotationValue};
pub use crate::record::{ClassRecord, FieldRecord, MethodRecord, TypeKind};
