//! The staging layer: per-declaration parse results waiting for completion.
//!
//! A [`ClassStage`] is built from one record by pure parsing (no graph
//! access), so a batch of stages can be produced on worker threads. The stage
//! is later consumed, by value, by the graph's completion pass; it cannot be
//! reused afterwards.

use girder_record::{AnnotationRecord, ClassRecord, TypeKind};
use girder_signature::{
    parse_class_signature, parse_field_descriptor, parse_field_signature, parse_method_descriptor,
    parse_method_signature, ClassSignatureToken, MethodDescriptorToken, MethodSignatureToken,
    TypeToken,
};

use crate::class::{Completion, FieldDef, MethodDef};
use crate::error::ImportError;
use crate::graph::ClassGraph;
use crate::link::{self, VarScope};
use crate::ty::{ClassId, Type, TypeVarDef, TypeVarOwner};

/// One staged class declaration: the record's plain structure plus its parsed
/// but still unlinked signature tokens.
#[derive(Debug)]
pub struct ClassStage {
    name: String,
    kind: TypeKind,
    access_flags: u16,
    superclass_name: Option<String>,
    interface_names: Vec<String>,
    signature: Option<ClassSignatureToken>,
    fields: Vec<FieldStage>,
    methods: Vec<MethodStage>,
    annotations: Vec<AnnotationRecord>,
    diagnostics: Vec<ImportError>,
}

#[derive(Debug)]
struct FieldStage {
    name: String,
    access_flags: u16,
    descriptor: TypeToken,
    signature: Option<TypeToken>,
    annotations: Vec<AnnotationRecord>,
}

#[derive(Debug)]
struct MethodStage {
    name: String,
    access_flags: u16,
    descriptor: MethodDescriptorToken,
    signature: Option<MethodSignatureToken>,
    annotations: Vec<AnnotationRecord>,
}

impl ClassStage {
    /// Parse one record into a stage. Never fails as a whole: a malformed
    /// generic signature degrades the declaration to its non-generic shape, an
    /// unparsable member descriptor drops that member; both are captured in
    /// the stage's diagnostics.
    pub fn parse(record: ClassRecord) -> ClassStage {
        let mut diagnostics = Vec::new();

        let signature = record.signature.as_deref().and_then(|raw| {
            match parse_class_signature(raw) {
                Ok(sig) => Some(sig),
                Err(err) => {
                    tracing::warn!(
                        target: "girder.graph",
                        class = record.name.as_str(),
                        error = %err,
                        "malformed class signature; importing non-generic structure"
                    );
                    diagnostics.push(ImportError::MalformedSignature {
                        name: record.name.clone(),
                        source: err,
                    });
                    None
                }
            }
        });

        let mut fields = Vec::with_capacity(record.fields.len());
        for field in record.fields {
            let descriptor = match parse_field_descriptor(&field.descriptor) {
                Ok(token) => token,
                Err(err) => {
                    diagnostics.push(ImportError::UnresolvableMember {
                        class: record.name.clone(),
                        member: field.name.clone(),
                        source: err,
                    });
                    continue;
                }
            };
            let signature = field.signature.as_deref().and_then(|raw| {
                match parse_field_signature(raw) {
                    Ok(token) => Some(token),
                    Err(err) => {
                        diagnostics.push(ImportError::MalformedSignature {
                            name: format!("{}.{}", record.name, field.name),
                            source: err,
                        });
                        None
                    }
                }
            });
            fields.push(FieldStage {
                name: field.name,
                access_flags: field.access_flags,
                descriptor,
                signature,
                annotations: field.annotations,
            });
        }

        let mut methods = Vec::with_capacity(record.methods.len());
        for method in record.methods {
            let descriptor = match parse_method_descriptor(&method.descriptor) {
                Ok(token) => token,
                Err(err) => {
                    diagnostics.push(ImportError::UnresolvableMember {
                        class: record.name.clone(),
                        member: method.name.clone(),
                        source: err,
                    });
                    continue;
                }
            };
            let signature = method.signature.as_deref().and_then(|raw| {
                match parse_method_signature(raw) {
                    Ok(token) => Some(token),
                    Err(err) => {
                        diagnostics.push(ImportError::MalformedSignature {
                            name: format!("{}.{}", record.name, method.name),
                            source: err,
                        });
                        None
                    }
                }
            });
            methods.push(MethodStage {
                name: method.name,
                access_flags: method.access_flags,
                descriptor,
                signature,
                annotations: method.annotations,
            });
        }

        ClassStage {
            name: record.name,
            kind: record.kind,
            access_flags: record.access_flags,
            superclass_name: record.superclass_name,
            interface_names: record.interface_names,
            signature,
            fields,
            methods,
            annotations: record.annotations,
            diagnostics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn kind(&self) -> TypeKind {
        self.kind
    }

    pub(crate) fn access_flags(&self) -> u16 {
        self.access_flags
    }

    /// Complete this declaration inside the graph. Consumes the stage.
    ///
    /// Type-variable ids are published (allocated, named, attached to the
    /// class) *before* their bound tokens are resolved, so a bound naming the
    /// variable itself, a sibling, or the owning class links against the
    /// already-present entry instead of recursing into construction.
    pub(crate) fn finish(self, id: ClassId, graph: &mut ClassGraph) {
        let ClassStage {
            name,
            kind: _,
            access_flags: _,
            superclass_name,
            interface_names,
            signature,
            fields,
            methods,
            annotations,
            mut diagnostics,
        } = self;

        let mut scope = VarScope::root();
        if let Some(sig) = &signature {
            let mut class_params = Vec::with_capacity(sig.type_params.len());
            for param in &sig.type_params {
                let var = graph.add_type_var(TypeVarDef {
                    name: param.name.clone(),
                    owner: TypeVarOwner::Class(id),
                    bounds: Vec::new(),
                });
                scope.insert(&param.name, var);
                class_params.push(var);
            }
            graph.class_mut(id).type_params = class_params.clone();
            for (param, var) in sig.type_params.iter().zip(class_params) {
                let bounds = link::resolve_bounds(graph, &scope, param);
                graph.set_type_var_bounds(var, bounds);
            }
        }

        let superclass = match &signature {
            Some(sig) => Some(link::resolve_class_token(graph, &scope, &sig.superclass)),
            None => superclass_name
                .as_deref()
                .map(|n| Type::Class(graph.resolve(n))),
        };
        let interfaces: Vec<Type> = match &signature {
            Some(sig) => sig
                .interfaces
                .iter()
                .map(|iface| link::resolve_class_token(graph, &scope, iface))
                .collect(),
            None => interface_names
                .iter()
                .map(|n| Type::Class(graph.resolve(n)))
                .collect(),
        };

        let mut field_defs = Vec::with_capacity(fields.len());
        for field in fields {
            let token = field.signature.as_ref().unwrap_or(&field.descriptor);
            let ty = link::resolve_type(graph, &scope, token);
            let field_annotations =
                link::resolve_annotations(graph, &name, &field.annotations, &mut diagnostics);
            field_defs.push(FieldDef {
                name: field.name,
                access_flags: field.access_flags,
                ty,
                annotations: field_annotations,
            });
        }

        let mut method_defs = Vec::with_capacity(methods.len());
        for method in methods {
            method_defs.push(finish_method(method, id, graph, &name, &scope, &mut diagnostics));
        }

        let class_annotations =
            link::resolve_annotations(graph, &name, &annotations, &mut diagnostics);

        let class = graph.class_mut(id);
        class.superclass = superclass;
        class.interfaces = interfaces;
        class.fields = field_defs;
        class.methods = method_defs;
        class.annotations = class_annotations;
        class.diagnostics = diagnostics;
        class.state = Completion::Complete;
    }
}

fn finish_method(
    method: MethodStage,
    class_id: ClassId,
    graph: &mut ClassGraph,
    class_name: &str,
    class_scope: &VarScope<'_>,
    diagnostics: &mut Vec<ImportError>,
) -> MethodDef {
    let mut scope = class_scope.child();
    let mut type_params = Vec::new();
    if let Some(sig) = &method.signature {
        for param in &sig.type_params {
            let var = graph.add_type_var(TypeVarDef {
                name: param.name.clone(),
                owner: TypeVarOwner::Method {
                    class: class_id,
                    method: method.name.clone(),
                },
                bounds: Vec::new(),
            });
            scope.insert(&param.name, var);
            type_params.push(var);
        }
        for (param, var) in sig.type_params.iter().zip(type_params.iter().copied()) {
            let bounds = link::resolve_bounds(graph, &scope, param);
            graph.set_type_var_bounds(var, bounds);
        }
    }

    let (params, return_type, throws) = match &method.signature {
        Some(sig) => (
            sig.params
                .iter()
                .map(|p| link::resolve_type(graph, &scope, p))
                .collect(),
            sig.return_type
                .as_ref()
                .map(|r| link::resolve_type(graph, &scope, r)),
            sig.throws
                .iter()
                .map(|t| link::resolve_type(graph, &scope, t))
                .collect(),
        ),
        None => (
            method
                .descriptor
                .params
                .iter()
                .map(|p| link::resolve_type(graph, &scope, p))
                .collect(),
            method
                .descriptor
                .return_type
                .as_ref()
                .map(|r| link::resolve_type(graph, &scope, r)),
            Vec::new(),
        ),
    };

    let annotations = link::resolve_annotations(graph, class_name, &method.annotations, diagnostics);

    MethodDef {
        name: method.name,
        access_flags: method.access_flags,
        type_params,
        params,
        return_type,
        throws,
        annotations,
    }
}
