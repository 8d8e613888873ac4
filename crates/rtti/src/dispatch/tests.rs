use pretty_assertions::assert_eq;

use super::Dispatcher;
use crate::core::{DispatchError, TypeRef};
use crate::identify::{Identifiable, Identify, downcast_box};

#[derive(crate::Identifiable)]
#[rtti(name = "dispatch::Circle")]
struct Circle {
	radius: f32,
}

#[derive(crate::Identifiable)]
#[rtti(name = "dispatch::Square")]
struct Square {
	side: f32,
}

/// Participates in nothing; keeps the default `type_ref`.
struct Blob;

impl Identify for Blob {}

/// Claims to be a Circle without being one.
struct Impostor;

impl Identify for Impostor {
	fn type_ref(&self) -> Option<&'static TypeRef> {
		Circle::type_descriptor()
	}
}

fn area_visitor<'h>() -> Dispatcher<'h, String> {
	Dispatcher::new()
		.on::<Circle, _>(|c| format!("circle {}", c.radius))
		.on::<Square, _>(|s| format!("square {}", s.side))
		.fallback(|other| match other.type_ref() {
			Some(d) => format!("fallback {}", d.name()),
			None => String::from("fallback"),
		})
}

#[test]
fn routes_by_descriptor_in_order() {
	let values: Vec<Box<dyn Identify>> = vec![
		Box::new(Square { side: 2.0 }),
		Box::new(Circle { radius: 1.5 }),
		Box::new(Blob),
	];
	let visitor = area_visitor();

	let out = visitor
		.dispatch_all(values.iter().map(|v| v.as_ref()))
		.expect("all handled");
	assert_eq!(out, vec!["square 2", "circle 1.5", "fallback"]);
}

#[test]
fn first_matching_arm_wins() {
	let visitor = Dispatcher::new()
		.on::<Circle, _>(|_| "first")
		.on::<Circle, _>(|_| "second");
	assert_eq!(visitor.len(), 2);
	assert_eq!(visitor.dispatch(&Circle { radius: 0.0 }), Ok("first"));
}

#[test]
fn missing_fallback_reports_unhandled() {
	let visitor: Dispatcher<'_, ()> = Dispatcher::new().on::<Circle, _>(|_| ());

	assert_eq!(
		visitor.dispatch(&Square { side: 1.0 }),
		Err(DispatchError::Unhandled {
			descriptor: Some("dispatch::Square".into())
		})
	);
	assert_eq!(
		visitor.dispatch(&Blob),
		Err(DispatchError::Unhandled { descriptor: None })
	);
}

/// A misreported descriptor is caught instead of reinterpreting memory.
#[test]
fn impostor_is_a_mismatch() {
	let visitor = area_visitor();
	let err = visitor.dispatch(&Impostor).unwrap_err();
	assert!(matches!(
		err,
		DispatchError::Mismatch {
			ref descriptor,
			expected
		} if &**descriptor == "dispatch::Circle" && expected.ends_with("Circle")
	));

	let value: &dyn Identify = &Impostor;
	assert!(value.downcast_ref::<Circle>().is_none());
	assert!(!value.is::<Circle>());
}

#[test]
fn checked_downcasts() {
	let mut circle = Circle { radius: 3.0 };
	{
		let value: &mut dyn Identify = &mut circle;
		assert!(value.downcast_mut::<Square>().is_none());
		value.downcast_mut::<Circle>().expect("circle").radius = 4.0;
	}
	assert_eq!(circle.radius, 4.0);

	let boxed: Box<dyn Identify> = Box::new(Square { side: 5.0 });
	let rejected = downcast_box::<Circle>(boxed).err().expect("not a circle");
	let boxed: Box<dyn Identify> = rejected.downcast::<Square>().ok().expect("box handed back intact");
	let square = downcast_box::<Square>(boxed).ok().expect("a square");
	assert_eq!(square.side, 5.0);

	let impostor: Box<dyn Identify> = Box::new(Impostor);
	let handed_back = downcast_box::<Circle>(impostor).err().expect("impostor is no circle");
	assert!(handed_back.is::<Impostor>());
}

#[test]
fn dispatch_macro_matches_dispatcher() {
	let values: Vec<Box<dyn Identify>> = vec![
		Box::new(Circle { radius: 1.0 }),
		Box::new(Impostor),
		Box::new(Square { side: 2.0 }),
	];

	let labels: Vec<String> = values
		.iter()
		.map(|value| {
			crate::dispatch!(value.as_ref(), {
				Circle => |c| format!("circle {}", c.radius),
				Square => |s| format!("square {}", s.side),
				else => |other| format!("other {}", other.type_ref().is_some()),
			})
		})
		.collect();

	assert_eq!(labels, vec!["circle 1", "other true", "square 2"]);
}
