//! Fixture: an agreement process from offer to contract execution.
//!
//! Validates the narrowing of `part_of`: optional for an offer, exactly one
//! for reaching agreement, acceptance and execution.

/// Entity document for the agreement lifecycle fixture.
pub const AGREEMENT_LIFECYCLE: &str = r#"{
  "entities": [
    {
      "id": "urn:hqdm:test:process",
      "type": "agreement_process",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-agreement-process" }],
        "causes": [{ "ref": "urn:hqdm:test:contract-complete" }],
        "consists_of": [
          { "ref": "urn:hqdm:test:agree" },
          { "ref": "urn:hqdm:test:execute" }
        ]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:offer",
      "type": "offer",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-offer" }],
        "causes": [{ "ref": "urn:hqdm:test:offer-made" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:agree",
      "type": "agree_contract",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-agree-contract" }],
        "causes": [{ "ref": "urn:hqdm:test:agreed" }],
        "part_of": [{ "ref": "urn:hqdm:test:process" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:accept-without-whole",
      "type": "acceptance_of_offer",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-acceptance" }],
        "causes": [{ "ref": "urn:hqdm:test:agreed" }],
        "references": [{ "ref": "urn:hqdm:test:offer" }]
      },
      "expect": { "missing_mandatory_property": "part_of" }
    },
    {
      "id": "urn:hqdm:test:accept",
      "type": "acceptance_of_offer_for_goods",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-acceptance" }],
        "causes": [{ "ref": "urn:hqdm:test:agreed" }],
        "references": [{ "ref": "urn:hqdm:test:offer" }],
        "part_of": [{ "ref": "urn:hqdm:test:agree" }]
      },
      "expect": "ok"
    },
    {
      "id": "urn:hqdm:test:execute",
      "type": "contract_execution",
      "values": {
        "part_of_possible_world": [{ "ref": "urn:hqdm:test:world" }],
        "member_of_kind": [{ "ref": "urn:hqdm:test:kind-of-execution" }],
        "causes": [{ "ref": "urn:hqdm:test:contract-complete" }]
      },
      "expect": { "missing_mandatory_property": "part_of" }
    }
  ]
}"#;
