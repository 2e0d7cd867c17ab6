//! The run-scoped class registry and resolution graph.

use std::collections::{HashMap, HashSet, VecDeque};

use girder_record::ClassRecord;

use crate::class::{ClassDef, Completion};
use crate::error::{ImportError, ImportReport, ReportedError};
use crate::stage::ClassStage;
use crate::ty::{ClassId, Type, TypeVarDef, TypeVarId};

pub(crate) const OBJECT: &str = "java.lang.Object";

/// The central name→class table of one analysis run.
///
/// Every class and type variable of the run lives here at a stable id;
/// `resolve` interns a stub on first reference, `register` attaches records,
/// `finalize_all` runs the completion pass. Mutation requires `&mut self`, so
/// ingestion is serialized by construction; after finalization the graph is
/// queried through `&self` from any number of threads. Dropping the graph
/// releases the whole run at once.
#[derive(Debug)]
pub struct ClassGraph {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
    type_vars: Vec<TypeVarDef>,
    staged: Vec<(ClassId, ClassStage)>,
    batch_errors: Vec<ReportedError>,
    object: ClassId,
}

impl Default for ClassGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassGraph {
    pub fn new() -> Self {
        let mut graph = Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
            type_vars: Vec::new(),
            staged: Vec::new(),
            batch_errors: Vec::new(),
            object: ClassId(0),
        };
        // The top type always exists; it backs implicit bounds and erasure.
        graph.object = graph.resolve(OBJECT);
        graph
    }

    /// The entry for `java.lang.Object` (a stub unless a record was supplied).
    pub fn object(&self) -> ClassId {
        self.object
    }

    /// Return the entry for `name`, interning a fresh stub on first sight.
    ///
    /// Idempotent and referentially stable: the same name maps to the same id
    /// for the lifetime of the run.
    pub fn resolve(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDef::stub(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Parse and attach one record. See [`ClassGraph::register_stage`].
    pub fn register(&mut self, record: ClassRecord) -> Result<ClassId, ImportError> {
        self.register_stage(ClassStage::parse(record))
    }

    /// Attach a parsed record to its (possibly pre-existing stub) entry,
    /// moving it to `Building`.
    ///
    /// A second record for the same name is rejected: the error is returned
    /// *and* recorded for the batch report, and the first record's effects
    /// stand untouched.
    pub fn register_stage(&mut self, stage: ClassStage) -> Result<ClassId, ImportError> {
        let id = self.resolve(stage.name());
        if self.classes[id.index()].state != Completion::Stub {
            tracing::warn!(
                target: "girder.graph",
                class = stage.name(),
                "duplicate record rejected; keeping the first definition"
            );
            let error = ImportError::DuplicateDefinition {
                name: stage.name().to_string(),
            };
            self.batch_errors.push(ReportedError {
                class: stage.name().to_string(),
                error: error.clone(),
            });
            return Err(error);
        }

        let class = &mut self.classes[id.index()];
        class.kind = stage.kind();
        class.access_flags = stage.access_flags();
        class.state = Completion::Building;
        self.staged.push((id, stage));
        Ok(id)
    }

    /// Run the completion pass over every `Building` entry, in registration
    /// (first-discovery) order, and aggregate every captured failure.
    ///
    /// Cycle safety comes from stub publication, not from ordering: completing
    /// one declaration only ever links against table entries, never re-enters
    /// another declaration's construction. Entries still `Stub` afterwards are
    /// out-of-scope dependencies and stay that way; they are not reported.
    pub fn finalize_all(&mut self) -> ImportReport {
        let staged = std::mem::take(&mut self.staged);
        let completed: Vec<ClassId> = staged.iter().map(|(id, _)| *id).collect();
        for (id, stage) in staged {
            stage.finish(id, self);
        }

        let mut report = ImportReport {
            errors: std::mem::take(&mut self.batch_errors),
        };
        for id in &completed {
            let class = self.class(*id);
            for error in &class.diagnostics {
                report.errors.push(ReportedError {
                    class: class.name.clone(),
                    error: error.clone(),
                });
            }
        }
        tracing::debug!(
            target: "girder.graph",
            classes = self.classes.len(),
            completed = completed.len(),
            errors = report.errors.len(),
            "completion pass finished"
        );
        report
    }

    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.index()]
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> &mut ClassDef {
        &mut self.classes[id.index()]
    }

    /// The entry for `name`, absent only if the name was never referenced
    /// during the run.
    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.class_id(name).map(|id| self.class(id))
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn type_var(&self, id: TypeVarId) -> &TypeVarDef {
        &self.type_vars[id.index()]
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (ClassId(idx as u32), class))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub(crate) fn add_type_var(&mut self, def: TypeVarDef) -> TypeVarId {
        let id = TypeVarId(self.type_vars.len() as u32);
        self.type_vars.push(def);
        id
    }

    pub(crate) fn set_type_var_bounds(&mut self, id: TypeVarId, bounds: Vec<Type>) {
        self.type_vars[id.index()].bounds = bounds;
    }

    /// The superclass chain of `id`, nearest first, raw (erased) references.
    /// Guards against cyclic input rather than looping.
    pub fn superclasses_of(&self, id: ClassId) -> Vec<ClassId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = id;
        while let Some(next) = self.class(current).superclass.as_ref().and_then(Type::raw) {
            if !seen.insert(next) {
                break;
            }
            out.push(next);
            current = next;
        }
        out
    }

    /// Direct subclasses of `id`, in id (first-discovery) order.
    pub fn subclasses_of(&self, id: ClassId) -> Vec<ClassId> {
        self.classes()
            .filter(|(_, class)| {
                class.superclass.as_ref().and_then(Type::raw) == Some(id)
            })
            .map(|(sub, _)| sub)
            .collect()
    }

    /// All transitive subclasses of `id`, breadth-first.
    pub fn all_subclasses_of(&self, id: ClassId) -> Vec<ClassId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for sub in self.subclasses_of(current) {
                if seen.insert(sub) {
                    out.push(sub);
                    queue.push_back(sub);
                }
            }
        }
        out
    }

    /// Every interface `id` implements, directly, through superclasses, or
    /// through superinterfaces.
    pub fn all_interfaces_of(&self, id: ClassId) -> Vec<ClassId> {
        let mut out = Vec::new();
        let mut collected = HashSet::new();
        let mut visited: HashSet<ClassId> = HashSet::from([id]);
        let mut queue: VecDeque<ClassId> = VecDeque::from([id]);
        for sup in self.superclasses_of(id) {
            if visited.insert(sup) {
                queue.push_back(sup);
            }
        }
        while let Some(current) = queue.pop_front() {
            for iface in self.class(current).interfaces.iter().filter_map(Type::raw) {
                if collected.insert(iface) {
                    out.push(iface);
                }
                if visited.insert(iface) {
                    queue.push_back(iface);
                }
            }
        }
        out
    }

    /// Widening reference assignability over the erased hierarchy:
    /// `from` is assignable to itself, its superclasses, its interfaces, and
    /// to `java.lang.Object`.
    pub fn is_assignable_to(&self, from: ClassId, to: ClassId) -> bool {
        if from == to || to == self.object {
            return true;
        }
        self.superclasses_of(from).contains(&to) || self.all_interfaces_of(from).contains(&to)
    }

    /// Type erasure: parameterized types drop their arguments, variables erase
    /// to their leftmost bound, wildcards to their upper bound, arrays
    /// component-wise.
    pub fn erasure(&self, ty: &Type) -> Type {
        fn inner(graph: &ClassGraph, ty: &Type, seen: &mut HashSet<TypeVarId>) -> Type {
            match ty {
                Type::Class(_) | Type::Primitive(_) => ty.clone(),
                Type::Parameterized(p) => Type::Class(p.raw),
                Type::Variable(var) => {
                    // Mutually-recursive variable bounds (`T extends U, U
                    // extends T`) terminate at the top type.
                    if !seen.insert(*var) {
                        return Type::Class(graph.object);
                    }
                    let erased = match graph.type_var(*var).bounds.first() {
                        Some(bound) => inner(graph, bound, seen),
                        None => Type::Class(graph.object),
                    };
                    seen.remove(var);
                    erased
                }
                Type::Wildcard(bound) => match bound.upper_bound() {
                    Some(upper) => inner(graph, upper, seen),
                    None => Type::Class(graph.object),
                },
                Type::Array(component) => Type::array(inner(graph, component, seen)),
            }
        }
        inner(self, ty, &mut HashSet::new())
    }

    /// Source-like rendering of a type, e.g.
    /// `java.util.List<? extends java.lang.Number>` or `int[]`.
    pub fn display_type(&self, ty: &Type) -> String {
        match ty {
            Type::Class(id) => self.class(*id).name.clone(),
            Type::Parameterized(p) => {
                let args: Vec<String> = p.args.iter().map(|a| self.display_type(a)).collect();
                format!("{}<{}>", self.class(p.raw).name, args.join(", "))
            }
            Type::Wildcard(bound) => match bound {
                crate::ty::WildcardBound::Unbounded => "?".to_string(),
                crate::ty::WildcardBound::Extends(upper) => {
                    format!("? extends {}", self.display_type(upper))
                }
                crate::ty::WildcardBound::Super(lower) => {
                    format!("? super {}", self.display_type(lower))
                }
            },
            Type::Variable(var) => self.type_var(*var).name.clone(),
            Type::Array(component) => format!("{}[]", self.display_type(component)),
            Type::Primitive(p) => p.keyword().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_is_idempotent_and_stable() {
        let mut graph = ClassGraph::new();
        let a = graph.resolve("com.x.A");
        let b = graph.resolve("com.x.B");
        assert_ne!(a, b);
        assert_eq!(graph.resolve("com.x.A"), a);
        assert_eq!(graph.class(a).name, "com.x.A");
        assert!(graph.class(a).is_stub());
    }

    #[test]
    fn the_top_type_is_always_present() {
        let graph = ClassGraph::new();
        let object = graph.object();
        assert_eq!(graph.class(object).name, OBJECT);
        assert!(graph.class(object).is_stub());
        assert_eq!(graph.class_id(OBJECT), Some(object));
    }

    #[test]
    fn superclass_walk_stops_on_cyclic_input() {
        let mut graph = ClassGraph::new();
        let a = graph.resolve("com.x.A");
        let b = graph.resolve("com.x.B");
        graph.class_mut(a).superclass = Some(Type::Class(b));
        graph.class_mut(b).superclass = Some(Type::Class(a));
        assert_eq!(graph.superclasses_of(a), vec![b]);
    }
}
