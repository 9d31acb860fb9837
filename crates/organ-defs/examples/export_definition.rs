//! Print a taproot parameter definition as JSON.
//!
//! Usage: cargo run -p organ-defs --example export_definition

use organs::organism::{OrganismId, SubTypeId};
use organs::parameter::OrganTypeParameters;
use organs::sampling::TraitDistribution;
use organs::spacing::SpacingShape;
use organs::successor::SuccessorTable;

use organ_defs::save_string;

fn main() {
    let mut params =
        OrganTypeParameters::new(SubTypeId(1), OrganismId::from_seed_name("example-field"));
    params.name = "taproot".to_string();
    params.basal_zone = TraitDistribution::new(2.0, 0.4);
    params.apical_zone = TraitDistribution::new(5.0, 0.8);
    params.lateral_spacing = TraitDistribution::new(1.0, 0.25);
    params.branch_count = TraitDistribution::new(9.0, 3.0);
    params.spacing_shape = SpacingShape::LinearIncreasing;
    params.successors = SuccessorTable::new(vec![SubTypeId(2)], vec![1.0])
        .expect("parallel successor sequences");

    match save_string(&params) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to serialize definition: {}", e),
    }
}
