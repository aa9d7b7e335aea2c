//! Fixture: ownership and its participants.
//!
//! Validates: an association needs a kind and at least one participant; a
//! participant needs a role.

/// Entity document for the ownership fixture.
pub const OWNERSHIP: &str = r#"{
  "entities": [
    {
      "id": "urn:hqdm:test:owner",
      "type": "participant",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:role-owner" }],
        "temporal_part_of": [{ "ref": "urn:hqdm:test:alice" }],
        "participant_in": [{ "ref": "urn:hqdm:test:ownership" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:owned",
      "type": "participant",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "participant_in": [{ "ref": "urn:hqdm:test:ownership" }]
      },
      "expect": { "missing_mandatory_property": "member_of_kind" }
    },
    {
      "id": "urn:hqdm:test:ownership",
      "type": "ownership",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-ownership" }],
        "consists_of_participant": [
          { "ref": "urn:hqdm:test:owner" },
          { "ref": "urn:hqdm:test:owned" }
        ]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:alice",
      "type": "person",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "entity_name": [{ "string": "Alice" }]
      },
      "expect": "ok"
    }
  ]
}"#;
