use girder_graph::{import, Primitive, Type};
use girder_record::{ClassRecord, FieldRecord, TypeKind};

use pretty_assertions::assert_eq;

fn class(name: &str) -> ClassRecord {
    ClassRecord {
        superclass_name: Some("java.lang.Object".to_string()),
        ..ClassRecord::new(name, TypeKind::Class)
    }
}

fn interface(name: &str) -> ClassRecord {
    ClassRecord::new(name, TypeKind::Interface)
}

/// Object <- Vehicle <- Car <- SportsCar; Vehicle implements Movable
/// (Movable extends Trackable); Bike extends Vehicle.
fn hierarchy() -> Vec<ClassRecord> {
    vec![
        ClassRecord {
            interface_names: vec!["com.x.Movable".to_string()],
            ..class("com.x.Vehicle")
        },
        ClassRecord {
            superclass_name: Some("com.x.Vehicle".to_string()),
            ..class("com.x.Car")
        },
        ClassRecord {
            superclass_name: Some("com.x.Car".to_string()),
            ..class("com.x.SportsCar")
        },
        ClassRecord {
            superclass_name: Some("com.x.Vehicle".to_string()),
            ..class("com.x.Bike")
        },
        ClassRecord {
            interface_names: vec!["com.x.Trackable".to_string()],
            ..interface("com.x.Movable")
        },
        interface("com.x.Trackable"),
    ]
}

#[test]
fn superclass_chain_is_nearest_first() {
    let (graph, report) = import(hierarchy());
    assert!(report.is_clean());

    let sports_car = graph.class_id("com.x.SportsCar").unwrap();
    let chain: Vec<&str> = graph
        .superclasses_of(sports_car)
        .into_iter()
        .map(|id| graph.class(id).name.as_str())
        .collect();
    assert_eq!(
        chain,
        vec!["com.x.Car", "com.x.Vehicle", "java.lang.Object"]
    );
}

#[test]
fn subclass_queries_are_computed_by_traversal() {
    let (graph, _) = import(hierarchy());
    let vehicle = graph.class_id("com.x.Vehicle").unwrap();
    let car = graph.class_id("com.x.Car").unwrap();
    let sports_car = graph.class_id("com.x.SportsCar").unwrap();
    let bike = graph.class_id("com.x.Bike").unwrap();

    assert_eq!(graph.subclasses_of(vehicle), vec![car, bike]);
    assert_eq!(graph.all_subclasses_of(vehicle), vec![car, bike, sports_car]);
    assert!(graph.all_subclasses_of(sports_car).is_empty());
}

#[test]
fn interfaces_are_collected_transitively_through_superclasses() {
    let (graph, _) = import(hierarchy());
    let car = graph.class_id("com.x.Car").unwrap();
    let movable = graph.class_id("com.x.Movable").unwrap();
    let trackable = graph.class_id("com.x.Trackable").unwrap();

    assert_eq!(graph.all_interfaces_of(car), vec![movable, trackable]);
    assert_eq!(graph.all_interfaces_of(movable), vec![trackable]);
}

#[test]
fn assignability_follows_the_erased_hierarchy() {
    let (graph, _) = import(hierarchy());
    let object = graph.object();
    let vehicle = graph.class_id("com.x.Vehicle").unwrap();
    let car = graph.class_id("com.x.Car").unwrap();
    let bike = graph.class_id("com.x.Bike").unwrap();
    let movable = graph.class_id("com.x.Movable").unwrap();
    let trackable = graph.class_id("com.x.Trackable").unwrap();

    assert!(graph.is_assignable_to(car, car));
    assert!(graph.is_assignable_to(car, vehicle));
    assert!(graph.is_assignable_to(car, movable));
    assert!(graph.is_assignable_to(car, trackable));
    assert!(graph.is_assignable_to(car, object));
    assert!(!graph.is_assignable_to(vehicle, car));
    assert!(!graph.is_assignable_to(bike, car));
}

#[test]
fn erasure_drops_arguments_and_follows_variable_bounds() {
    let (graph, report) = import(vec![ClassRecord {
        signature: Some(
            "<T:Ljava/lang/Number;>Ljava/lang/Object;".to_string(),
        ),
        fields: vec![FieldRecord {
            signature: Some("Ljava/util/List<TT;>;".to_string()),
            ..FieldRecord::new("items", "Ljava/util/List;")
        }],
        ..class("com.x.Holder")
    }]);
    assert!(report.is_clean());

    let holder = graph.get("com.x.Holder").unwrap();
    let t = holder.type_params[0];
    let list = graph.class_id("java.util.List").unwrap();
    let number = graph.class_id("java.lang.Number").unwrap();

    // List<T> erases to List.
    assert_eq!(
        graph.erasure(&holder.field("items").unwrap().ty),
        Type::Class(list)
    );
    // T erases to its leftmost bound.
    assert_eq!(graph.erasure(&Type::Variable(t)), Type::Class(number));
    // T[] erases component-wise.
    assert_eq!(
        graph.erasure(&Type::array(Type::Variable(t))),
        Type::array(Type::Class(number))
    );
    // Primitives are their own erasure.
    assert_eq!(
        graph.erasure(&Type::Primitive(Primitive::Int)),
        Type::Primitive(Primitive::Int)
    );
}

#[test]
fn erasure_terminates_on_self_referential_bounds() {
    let (graph, report) = import(vec![ClassRecord {
        signature: Some("<T::Lcom/x/Rec<TT;>;>Ljava/lang/Object;".to_string()),
        superclass_name: Some("java.lang.Object".to_string()),
        ..ClassRecord::new("com.x.Rec", TypeKind::Interface)
    }]);
    assert!(report.is_clean());

    let rec = graph.class_id("com.x.Rec").unwrap();
    let t = graph.class(rec).type_params[0];
    // T's bound is Rec<T>; erasing T must stop at the raw bound.
    assert_eq!(graph.erasure(&Type::Variable(t)), Type::Class(rec));
}

#[test]
fn types_render_like_source() {
    let (graph, report) = import(vec![ClassRecord {
        signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;".to_string()),
        fields: vec![
            FieldRecord {
                signature: Some(
                    "Ljava/util/Map<Ljava/lang/String;+Ljava/lang/Number;>;".to_string(),
                ),
                ..FieldRecord::new("scores", "Ljava/util/Map;")
            },
            FieldRecord::new("matrix", "[[I"),
            FieldRecord {
                signature: Some("Ljava/util/List<TT;>;".to_string()),
                ..FieldRecord::new("items", "Ljava/util/List;")
            },
        ],
        ..class("com.x.Render")
    }]);
    assert!(report.is_clean());

    let def = graph.get("com.x.Render").unwrap();
    assert_eq!(
        graph.display_type(&def.field("scores").unwrap().ty),
        "java.util.Map<java.lang.String, ? extends java.lang.Number>"
    );
    assert_eq!(graph.display_type(&def.field("matrix").unwrap().ty), "int[][]");
    assert_eq!(
        graph.display_type(&def.field("items").unwrap().ty),
        "java.util.List<T>"
    );
}
