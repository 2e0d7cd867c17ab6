//! Parsers for JVM type descriptors and generic signatures (JVMS 4.3, 4.7.9.1).
//!
//! Everything here produces *unlinked* tokens: class references stay raw
//! internal names (`java/util/List`) and type-variable references stay plain
//! names. Linking names against actual declarations is deliberately someone
//! else's job, so forward and circular references never block parsing.

#![forbid(unsafe_code)]

mod cursor;
mod descriptor;
mod error;
mod signature;
mod tokens;

pub use crate::descriptor::{parse_field_descriptor, parse_method_descriptor};
pub use crate::error::{Result, SignatureError};
pub use crate::signature::{parse_class_signature, parse_field_signature, parse_method_signature};
pub use crate::tokens::{
    ArgToken, ClassSignatureToken, ClassToken, MethodDescriptorToken, MethodSignatureToken,
    PrimitiveToken, TypeParamToken, TypeToken,
};
