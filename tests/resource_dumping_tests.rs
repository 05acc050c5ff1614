//! Integration tests for rendering resource instances into JSON:API
//! documents.

use std::sync::Arc;
use std::thread;

use grappelli::{
	AttributeSelector, FieldDescriptor, FieldKind, RenderError, ResourceDefinition,
	ResourceInstance,
};
use rstest::*;
use serde::Serialize;
use serde_json::json;

fn simple_definition() -> Arc<ResourceDefinition> {
	Arc::new(
		ResourceDefinition::builder("less")
			.field(FieldDescriptor::new("id", FieldKind::Integer))
			.field(FieldDescriptor::new("name", FieldKind::String))
			.link("self", |id| format!("http://example.com/less/{id}"))
			.build()
			.unwrap(),
	)
}

fn more_definition() -> Arc<ResourceDefinition> {
	Arc::new(
		ResourceDefinition::builder("more")
			.field(FieldDescriptor::new("id", FieldKind::Integer))
			.field(FieldDescriptor::new("name", FieldKind::String))
			.field(FieldDescriptor::new("last_name", FieldKind::String))
			.field(FieldDescriptor::new("birth_date", FieldKind::Integer))
			.field(FieldDescriptor::new("optional_attr", FieldKind::String).optional())
			.field(
				FieldDescriptor::new("default_attr", FieldKind::String)
					.with_default("default"),
			)
			.build()
			.unwrap(),
	)
}

#[fixture]
fn simple_object() -> ResourceInstance {
	ResourceInstance::builder(simple_definition())
		.set("id", 0)
		.set("name", "Simple Name")
		.build()
		.unwrap()
}

#[fixture]
fn more_object() -> ResourceInstance {
	ResourceInstance::builder(more_definition())
		.set("id", 1)
		.set("name", "Name")
		.set("last_name", "Last")
		.set("birth_date", 1991)
		.build()
		.unwrap()
}

#[rstest]
fn test_simple_dumping(simple_object: ResourceInstance) {
	let document = simple_object.render(&AttributeSelector::All).unwrap();

	assert_eq!(
		document.to_value(),
		json!({
			"type": "less",
			"id": 0,
			"attributes": {"name": "Simple Name"},
		})
	);
}

#[rstest]
fn test_simple_dumping_with_link(simple_object: ResourceInstance) {
	let document = simple_object
		.render_with_links(&AttributeSelector::All, &["self"])
		.unwrap();

	assert_eq!(
		document.to_value(),
		json!({
			"type": "less",
			"id": 0,
			"attributes": {"name": "Simple Name"},
			"links": {"self": "http://example.com/less/0"},
		})
	);
}

#[rstest]
fn test_invalid_link(simple_object: ResourceInstance) {
	let result = simple_object.render_with_links(&AttributeSelector::All, &["invalid"]);

	assert!(matches!(
		result,
		Err(RenderError::UnknownLink(ref name)) if name == "invalid"
	));
}

#[rstest]
fn test_dumping_with_filtered_attrs(more_object: ResourceInstance) {
	let document = more_object
		.render(&AttributeSelector::only(["birth_date"]))
		.unwrap();

	assert_eq!(
		document.to_value(),
		json!({
			"type": "more",
			"id": 1,
			"attributes": {"birthDate": 1991},
		})
	);
}

#[rstest]
fn test_dumping_optional_and_defaulted_attrs(more_object: ResourceInstance) {
	let document = more_object
		.render(&AttributeSelector::only([
			"birth_date",
			"optional_attr",
			"default_attr",
		]))
		.unwrap();

	assert_eq!(
		document.to_value(),
		json!({
			"type": "more",
			"id": 1,
			"attributes": {
				"birthDate": 1991,
				"optionalAttr": null,
				"defaultAttr": "default",
			},
		})
	);
}

#[rstest]
fn test_dumping_unexpected_attribute(more_object: ResourceInstance) {
	let result = more_object.render(&AttributeSelector::only(["invalid"]));

	match result {
		Err(RenderError::UnknownAttribute(name)) => {
			assert_eq!(name, "invalid");
		}
		other => panic!("expected UnknownAttribute, got {other:?}"),
	}
}

#[rstest]
fn test_dumping_without_id() {
	let instance = ResourceInstance::builder(simple_definition())
		.set("name", "No Id")
		.build()
		.unwrap();

	let result = instance.render(&AttributeSelector::All);

	match result {
		Err(RenderError::MissingIdentifier(resource)) => {
			assert_eq!(resource, "less");
		}
		other => panic!("expected MissingIdentifier, got {other:?}"),
	}
}

#[rstest]
fn test_missing_required_attribute() {
	let instance = ResourceInstance::builder(more_definition())
		.set("id", 1)
		.build()
		.unwrap();

	let result = instance.render(&AttributeSelector::All);

	// the first required field in declaration order is reported
	match result {
		Err(RenderError::MissingAttribute(name)) => {
			assert_eq!(name, "name");
		}
		other => panic!("expected MissingAttribute, got {other:?}"),
	}
}

#[rstest]
fn test_identifier_in_selector_is_excluded_from_attributes(simple_object: ResourceInstance) {
	let document = simple_object
		.render(&AttributeSelector::only(["id", "name"]))
		.unwrap();

	assert!(!document.attributes.contains_key("id"));
	assert_eq!(document.attributes.len(), 1);
	assert_eq!(document.id, json!(0));
}

#[rstest]
fn test_attribute_order_mirrors_declaration(more_object: ResourceInstance) {
	let document = more_object.render(&AttributeSelector::All).unwrap();
	let keys: Vec<&str> = document.attributes.keys().map(String::as_str).collect();

	assert_eq!(
		keys,
		["name", "lastName", "birthDate", "optionalAttr", "defaultAttr"]
	);
}

#[rstest]
fn test_selection_does_not_change_order(more_object: ResourceInstance) {
	// selector order differs from declaration order on purpose
	let document = more_object
		.render(&AttributeSelector::only(["birth_date", "name"]))
		.unwrap();
	let keys: Vec<&str> = document.attributes.keys().map(String::as_str).collect();

	assert_eq!(keys, ["name", "birthDate"]);
}

#[rstest]
fn test_dump_produces_stable_json(simple_object: ResourceInstance) {
	let dumped = simple_object.dump(&AttributeSelector::All).unwrap();

	assert_eq!(
		dumped,
		r#"{"type":"less","id":0,"attributes":{"name":"Simple Name"}}"#
	);
}

#[test]
fn test_person_scenario() {
	let person = Arc::new(
		ResourceDefinition::builder("person")
			.field(FieldDescriptor::new("id", FieldKind::Integer))
			.field(FieldDescriptor::new("first_name", FieldKind::String))
			.field(FieldDescriptor::new("last_name", FieldKind::String))
			.build()
			.unwrap(),
	);
	let guido = ResourceInstance::builder(Arc::clone(&person))
		.set("id", 1)
		.set("first_name", "Guido")
		.set("last_name", "Van Rossum")
		.build()
		.unwrap();

	let all = guido.render(&AttributeSelector::All).unwrap();
	assert_eq!(
		all.to_value(),
		json!({
			"type": "person",
			"id": 1,
			"attributes": {"firstName": "Guido", "lastName": "Van Rossum"},
		})
	);

	let subset = guido
		.render(&AttributeSelector::only(["first_name"]))
		.unwrap();
	assert_eq!(
		subset.to_value(),
		json!({
			"type": "person",
			"id": 1,
			"attributes": {"firstName": "Guido"},
		})
	);
}

#[test]
fn test_from_serialize_model() {
	#[derive(Serialize)]
	struct Person {
		id: i64,
		first_name: String,
		last_name: String,
		// not declared on the definition, ignored by from_serialize
		password: String,
	}

	let person = Arc::new(
		ResourceDefinition::builder("person")
			.field(FieldDescriptor::new("id", FieldKind::Integer))
			.field(FieldDescriptor::new("first_name", FieldKind::String))
			.field(FieldDescriptor::new("last_name", FieldKind::String))
			.build()
			.unwrap(),
	);

	let model = Person {
		id: 1,
		first_name: "Guido".to_string(),
		last_name: "Van Rossum".to_string(),
		password: "hunter2".to_string(),
	};

	let instance = ResourceInstance::from_serialize(person, &model).unwrap();
	let document = instance.render(&AttributeSelector::All).unwrap();

	assert_eq!(
		document.to_value(),
		json!({
			"type": "person",
			"id": 1,
			"attributes": {"firstName": "Guido", "lastName": "Van Rossum"},
		})
	);
}

#[rstest]
fn test_parallel_rendering(more_object: ResourceInstance) {
	let rendered: Vec<_> = thread::scope(|scope| {
		(0..4)
			.map(|_| {
				let instance = more_object.clone();
				scope.spawn(move || instance.render(&AttributeSelector::All).unwrap())
			})
			.collect::<Vec<_>>()
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect()
	});

	assert!(rendered.windows(2).all(|pair| pair[0] == pair[1]));
}
