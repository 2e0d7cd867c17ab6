//! An in-memory, fully cross-referenced model of a compiled Java type system,
//! built from decoded structural records.
//!
//! The pipeline: records arrive (one per analyzed class), their descriptors
//! and generic signatures are parsed into unlinked tokens, and a single
//! completion pass links everything into one [`ClassGraph`] — classes,
//! generic superclasses and interfaces, type parameters with (possibly
//! self-referential) bounds, members, and annotations. Types referenced but
//! never supplied a record become permanent stubs instead of errors, so a
//! partial classpath still yields a usable graph.
//!
//! ```
//! use girder_graph::import;
//! use girder_record::{ClassRecord, TypeKind};
//!
//! let base = ClassRecord {
//!     signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;".to_string()),
//!     ..ClassRecord::new("com.x.Box", TypeKind::Class)
//! };
//! let (graph, report) = import(vec![base]);
//! assert!(report.is_clean());
//! assert_eq!(graph.get("com.x.Box").unwrap().type_params.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod class;
mod error;
mod graph;
mod import;
mod link;
mod stage;
mod ty;

pub use crate::class::{Annotation, ClassDef, Completion, FieldDef, MethodDef};
pub use crate::error::{ImportError, ImportReport, ReportedError};
pub use crate::graph::ClassGraph;
pub use crate::import::{import, import_into};
pub use crate::stage::ClassStage;
pub use crate::ty::{
    ClassId, ParameterizedType, Primitive, Type, TypeVarDef, TypeVarId, TypeVarOwner,
    WildcardBound,
};
