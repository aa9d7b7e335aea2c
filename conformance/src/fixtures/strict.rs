//! Fixture: the checks that only run with strict upper bounds.

/// Entity document for the strict-bounds fixture.
pub const STRICT_BOUNDS: &str = r#"{
  "config": { "upper_bounds": "strict" },
  "entities": [
    {
      "id": "urn:hqdm:test:two-worlds",
      "type": "event",
      "values": {
        "part_of_possible_world": [
          { "ref": "urn:hqdm:test:world" },
          { "ref": "urn:hqdm:test:other-world" }
        ]
      },
      "expect": { "too_many_values": "part_of_possible_world" }
    },
    {
      "id": "urn:hqdm:test:extent-two-worlds",
      "type": "spatio_temporal_extent",
      "values": {
        "part_of_possible_world": [
          { "ref": "urn:hqdm:test:world" },
          { "ref": "urn:hqdm:test:other-world" }
        ]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:sign-as-ref",
      "type": "sign",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "value_": [{ "ref": "urn:hqdm:test:not-a-literal" }]
      },
      "expect": { "wrong_value_kind": "value_" }
    },
    {
      "id": "urn:hqdm:test:sign",
      "type": "sign",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "value_": [{ "string": "ACME-42" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:thing-with-cause",
      "type": "thing",
      "values": { "causes": [{ "ref": "urn:hqdm:test:event" }] },
      "expect": { "inapplicable_property": "causes" }
    }
  ]
}"#;
