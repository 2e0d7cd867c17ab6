//! Translation of unlinked signature tokens into graph-backed types.
//!
//! Every class name a token mentions is resolved through the graph, which
//! interns a stub on first sight. Tokens are therefore linkable in any order,
//! including forward and circular references.

use std::collections::HashMap;

use girder_record::AnnotationRecord;
use girder_signature::{
    parse_field_descriptor, ArgToken, ClassToken, PrimitiveToken, TypeParamToken, TypeToken,
};

use crate::class::Annotation;
use crate::error::ImportError;
use crate::graph::ClassGraph;
use crate::ty::{Primitive, Type, TypeVarId, WildcardBound};

/// Lexical scope of type-variable names during linking. Method scopes chain
/// onto their class scope; inner names shadow outer ones.
pub(crate) struct VarScope<'a> {
    parent: Option<&'a VarScope<'a>>,
    vars: HashMap<String, TypeVarId>,
}

impl<'a> VarScope<'a> {
    pub(crate) fn root() -> VarScope<'static> {
        VarScope {
            parent: None,
            vars: HashMap::new(),
        }
    }

    pub(crate) fn child(&'a self) -> VarScope<'a> {
        VarScope {
            parent: Some(self),
            vars: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &str, var: TypeVarId) {
        self.vars.insert(name.to_string(), var);
    }

    pub(crate) fn get(&self, name: &str) -> Option<TypeVarId> {
        self.vars
            .get(name)
            .copied()
            .or_else(|| self.parent.and_then(|p| p.get(name)))
    }
}

/// `java/lang/Object` → `java.lang.Object`. `$` separators are kept as-is.
pub(crate) fn binary_name(internal: &str) -> String {
    internal.replace('/', ".")
}

pub(crate) fn resolve_type(graph: &mut ClassGraph, scope: &VarScope<'_>, token: &TypeToken) -> Type {
    match token {
        TypeToken::Primitive(p) => Type::Primitive(primitive(*p)),
        TypeToken::Class(c) => resolve_class_token(graph, scope, c),
        TypeToken::Variable(name) => match scope.get(name) {
            Some(var) => Type::Variable(var),
            None => {
                // Inconsistent input: a variable reference with no enclosing
                // declaration. Fall back to the erasure rather than failing
                // the whole declaration.
                tracing::warn!(
                    target: "girder.graph",
                    variable = name.as_str(),
                    "type variable not in scope; erasing to java.lang.Object"
                );
                Type::Class(graph.object())
            }
        },
        TypeToken::Array(component) => Type::array(resolve_type(graph, scope, component)),
    }
}

pub(crate) fn resolve_class_token(
    graph: &mut ClassGraph,
    scope: &VarScope<'_>,
    token: &ClassToken,
) -> Type {
    let raw = graph.resolve(&binary_name(&token.internal_name));
    if token.args.is_empty() {
        return Type::Class(raw);
    }
    let args = token
        .args
        .iter()
        .map(|arg| resolve_arg(graph, scope, arg))
        .collect();
    Type::parameterized(raw, args)
}

fn resolve_arg(graph: &mut ClassGraph, scope: &VarScope<'_>, arg: &ArgToken) -> Type {
    match arg {
        ArgToken::Any => Type::Wildcard(WildcardBound::Unbounded),
        ArgToken::Exact(token) => resolve_type(graph, scope, token),
        ArgToken::Extends(token) => Type::Wildcard(WildcardBound::Extends(Box::new(resolve_type(
            graph, scope, token,
        )))),
        ArgToken::Super(token) => Type::Wildcard(WildcardBound::Super(Box::new(resolve_type(
            graph, scope, token,
        )))),
    }
}

/// Resolve a parameter's declared bounds, keeping class-then-interfaces order.
/// A parameter with no declared bound still gets the implicit top-type bound,
/// so the result is never empty.
pub(crate) fn resolve_bounds(
    graph: &mut ClassGraph,
    scope: &VarScope<'_>,
    param: &TypeParamToken,
) -> Vec<Type> {
    let mut bounds: Vec<Type> = param
        .bounds()
        .map(|b| resolve_type(graph, scope, b))
        .collect();
    if bounds.is_empty() {
        bounds.push(Type::Class(graph.object()));
    }
    bounds
}

/// Link annotation uses against their annotation types. An unparsable type
/// descriptor degrades only that annotation, recorded in `diagnostics`.
pub(crate) fn resolve_annotations(
    graph: &mut ClassGraph,
    class_name: &str,
    records: &[AnnotationRecord],
    diagnostics: &mut Vec<ImportError>,
) -> Vec<Annotation> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        match parse_field_descriptor(&record.type_descriptor) {
            Ok(TypeToken::Class(token)) => {
                let class = graph.resolve(&binary_name(&token.internal_name));
                out.push(Annotation {
                    class,
                    elements: record.elements.clone(),
                });
            }
            Ok(_) => {
                // Parsable but not a class reference, e.g. `I`. Treat the same
                // as an unparsable descriptor.
                diagnostics.push(ImportError::UnresolvableMember {
                    class: class_name.to_string(),
                    member: format!("@{}", record.type_descriptor),
                    source: girder_signature::SignatureError::Malformed {
                        input: record.type_descriptor.clone(),
                        offset: 0,
                    },
                });
            }
            Err(err) => {
                diagnostics.push(ImportError::UnresolvableMember {
                    class: class_name.to_string(),
                    member: format!("@{}", record.type_descriptor),
                    source: err,
                });
            }
        }
    }
    out
}

fn primitive(token: PrimitiveToken) -> Primitive {
    match token {
        PrimitiveToken::Boolean => Primitive::Boolean,
        PrimitiveToken::Byte => Primitive::Byte,
        PrimitiveToken::Char => Primitive::Char,
        PrimitiveToken::Short => Primitive::Short,
        PrimitiveToken::Int => Primitive::Int,
        PrimitiveToken::Long => Primitive::Long,
        PrimitiveToken::Float => Primitive::Float,
        PrimitiveToken::Double => Primitive::Double,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_names_keep_nesting_markers() {
        assert_eq!(binary_name("com/x/Outer$Inner"), "com.x.Outer$Inner");
        assert_eq!(binary_name("Top"), "Top");
    }

    #[test]
    fn scopes_shadow_outer_names() {
        let mut outer = VarScope::root();
        outer.insert("T", TypeVarId(0));
        outer.insert("U", TypeVarId(1));

        let mut inner = outer.child();
        inner.insert("T", TypeVarId(2));

        assert_eq!(inner.get("T"), Some(TypeVarId(2)));
        assert_eq!(inner.get("U"), Some(TypeVarId(1)));
        assert_eq!(inner.get("V"), None);
        assert_eq!(outer.get("T"), Some(TypeVarId(0)));
    }
}
