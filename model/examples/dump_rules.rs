//! Demonstrates resolving the bundled rule table and building an entity.
//!
//! Run with: `cargo run --example dump_rules -p hqdm-model`

use hqdm_model::{AcceptanceOfOfferBuilder, Iri, RuleTable};

fn main() {
    let table = match RuleTable::hqdm() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("rule table error: {err}");
            return;
        }
    };

    println!("HQDM rule table: {} entity types", table.len());
    println!();

    for rules in table.types() {
        let supertypes: Vec<String> = rules.supertypes().iter().map(|t| t.to_string()).collect();
        println!(
            "  {:32} <: {:40} {:>2} applicable, {:>2} mandatory",
            rules.entity_type().label(),
            supertypes.join(", "),
            rules.len(),
            rules.mandatory().count(),
        );
    }

    println!();

    // Leaving out the narrowed part_of is rejected.
    let acceptance = AcceptanceOfOfferBuilder::new("urn:ex:acceptance")
        .part_of_possible_world(Iri::from("urn:ex:world"))
        .member_of_kind(Iri::from("urn:ex:kind-of-acceptance"))
        .causes(Iri::from("urn:ex:agreed"))
        .references(Iri::from("urn:ex:offer"));
    match acceptance.build() {
        Ok(entity) => println!("built {}", entity.id()),
        Err(err) => println!("rejected: {err}"),
    }

    match acceptance.part_of(Iri::from("urn:ex:agreement")).build() {
        Ok(entity) => println!("built {} with {} predicates", entity.id(), entity.predicates().count()),
        Err(err) => println!("rejected: {err}"),
    }
}
