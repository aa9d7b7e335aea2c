//! Fixture: the smallest entities that build, and the smallest that don't.
//!
//! Validates: a bare thing builds; a bare activity names its first
//! mandatory predicate; an activity with its three mandatory predicates
//! builds.

/// Entity document for the minimal fixture.
pub const MINIMAL: &str = r#"{
  "entities": [
    {
      "id": "urn:hqdm:test:id1",
      "type": "thing",
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:id2",
      "type": "activity",
      "expect": { "missing_mandatory_property": "part_of_possible_world" }
    },
    {
      "id": "urn:hqdm:test:id3",
      "type": "activity",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-activity" }]
      },
      "expect": { "missing_mandatory_property": "causes" }
    },
    {
      "id": "urn:hqdm:test:id4",
      "type": "activity",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-activity" }],
        "causes": [{ "ref": "urn:hqdm:test:event" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:world",
      "type": "possible_world",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "entity_name": [{ "string": "Test world" }]
      },
      "expect": "ok"
    }
  ]
}"#;
