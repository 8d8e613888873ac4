//! End-to-end behavior of the global registry with derived types.
//!
//! Eager ids follow `(ordinal, name, rust type)`, not declaration order, so
//! `BarObject` carries `ordinal = 1` to come after `FooObject`. Without it,
//! `"BarObject" < "FooObject"` would give Bar the first id.

use pretty_assertions::assert_eq;
use rtti::{
	Dispatcher, Identifiable, Identify, TypeRef, TypeRegistry, find_type_by_name,
	peek_type_descriptor, type_descriptor, type_of, type_of_val,
};

#[derive(Identifiable)]
struct FooObject {
	x: i32,
	y: i32,
}

#[derive(Identifiable)]
#[rtti(ordinal = 1)]
struct BarObject {
	base: FooObject,
	m: [f32; 4],
	n: [f32; 4],
}

#[derive(Identifiable)]
#[rtti(name = "geometry.Point", ordinal = 2)]
struct Point;

// Declared in reverse name order on purpose.
#[derive(Identifiable)]
#[rtti(ordinal = 3)]
struct Zebra;

#[derive(Identifiable)]
#[rtti(ordinal = 3)]
struct Apple;

struct Unregistered;

impl Identify for Unregistered {}

fn foo_type() -> &'static TypeRef {
	FooObject::type_descriptor().expect("FooObject registered")
}

fn bar_type() -> &'static TypeRef {
	BarObject::type_descriptor().expect("BarObject registered")
}

fn bar() -> BarObject {
	BarObject {
		base: FooObject { x: 1, y: 2 },
		m: [0.0; 4],
		n: [1.0; 4],
	}
}

fn report(value: &dyn Identify) -> Option<&'static str> {
	value.type_ref().map(|d| d.name())
}

#[test]
fn identity_is_stable() {
	assert!(std::ptr::eq(foo_type(), foo_type()));
	assert_eq!(type_descriptor::<FooObject>(), Some(foo_type()));
	assert_eq!(peek_type_descriptor::<FooObject>(), Some(foo_type()));
}

#[test]
fn distinct_types_have_distinct_descriptors() {
	assert_ne!(foo_type(), bar_type());
	assert_ne!(Some(bar_type()), Point::type_descriptor());
}

#[test]
fn names_follow_registration() {
	assert_eq!(foo_type().name(), "FooObject");
	assert_eq!(bar_type().name(), "BarObject");
	assert_eq!(Point::type_descriptor().map(|d| d.name()), Some("geometry.Point"));
	assert_eq!(Point::NAME, "geometry.Point");
}

/// Eager registration follows ordinals, so ids are deterministic.
#[test]
fn runtime_ids_follow_ordinals() {
	assert_eq!(foo_type().runtime_id().get(), 1);
	assert_eq!(bar_type().runtime_id().get(), foo_type().runtime_id().get() + 1);
	assert_eq!(foo_type().size(), 8);
	assert_eq!(bar_type().size(), std::mem::size_of::<BarObject>());
}

/// Within one ordinal, names decide the order regardless of declaration.
#[test]
fn equal_ordinals_order_by_name() {
	let apple = Apple::type_descriptor().expect("Apple registered");
	let zebra = Zebra::type_descriptor().expect("Zebra registered");
	assert_eq!(zebra.runtime_id().get(), apple.runtime_id().get() + 1);
}

#[test]
fn derived_value_reports_its_own_descriptor() {
	let bar = bar();
	let as_capability: &dyn Identify = &bar;
	assert_eq!(as_capability.type_ref(), Some(bar_type()));
	assert_eq!(report(&bar), Some("BarObject"));
	assert_eq!(report(&bar.base), Some("FooObject"));
	assert_eq!(bar.base.x + bar.base.y, 3);
	assert_eq!(bar.m.len() + bar.n.len(), 8);
}

#[test]
fn non_participants_report_no_type() {
	assert_eq!(report(&Unregistered), None);
	assert!(type_of::<Unregistered>().is_none());
	assert!(type_of_val(&42u8).is_none());
	assert_eq!(type_of::<FooObject>().as_ref(), Some(foo_type()));
	assert_eq!(type_of_val(&Point).as_ref(), Point::type_descriptor());
}

#[test]
fn name_lookup() {
	assert_eq!(find_type_by_name("BarObject").as_ref(), Some(bar_type()));
	assert!(find_type_by_name("BazObject").is_none());
	assert_eq!(TypeRegistry::global().label(), "global");
}

#[test]
fn dispatch_bar_foo_unregistered() {
	let values: Vec<Box<dyn Identify>> = vec![
		Box::new(bar()),
		Box::new(FooObject { x: 0, y: 0 }),
		Box::new(Unregistered),
	];

	let visitor = Dispatcher::new()
		.on::<BarObject, _>(|_| "Bar handler")
		.on::<FooObject, _>(|_| "Foo handler")
		.fallback(|_| "fallback handler");
	let out = visitor
		.dispatch_all(values.iter().map(|v| v.as_ref()))
		.expect("fallback installed");
	assert_eq!(out, vec!["Bar handler", "Foo handler", "fallback handler"]);

	let via_macro: Vec<&str> = values
		.iter()
		.map(|value| {
			rtti::dispatch!(value.as_ref(), {
				BarObject => |_bar| "Bar handler",
				FooObject => |_foo| "Foo handler",
				else => |_other| "fallback handler",
			})
		})
		.collect();
	assert_eq!(via_macro, out);
}

#[test]
fn diagnostics_dump() {
	let report = rtti::diagnostics();
	let text = report.to_string();
	assert!(!report.has_collisions());
	assert_eq!(report.descriptors.len(), 5);
	assert!(text.contains("TYPE FooObject:\n   SIZE: 8\n   RUNTIME ID: 1"));
	assert!(text.contains("TYPE geometry.Point:"));
}
