//! Fixture: predicates recorded as present with no values.
//!
//! Validates: an empty value list fails for optional and mandatory
//! predicates alike, and is reported before any missing mandatory one.

/// Entity document for the empty-values fixture.
pub const EMPTY_VALUES: &str = r#"{
  "entities": [
    {
      "id": "urn:hqdm:test:empty-name",
      "type": "thing",
      "values": { "entity_name": [] },
      "expect": { "empty_property_value": "entity_name" }
    },
    {
      "id": "urn:hqdm:test:empty-optional",
      "type": "activity",
      "values": { "determines": [] },
      "expect": { "empty_property_value": "determines" }
    },
    {
      "id": "urn:hqdm:test:empty-mandatory",
      "type": "event",
      "values": { "part_of_possible_world": [] },
      "expect": { "empty_property_value": "part_of_possible_world" }
    },
    {
      "id": "urn:hqdm:test:inapplicable-empty",
      "type": "thing",
      "values": { "causes": [] },
      "expect": "ok"
    }
  ]
}"#;
