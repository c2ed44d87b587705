use schema::TypeData;
use std::collections::HashMap;
use std::sync::OnceLock;

// Process-wide chart, published once on first use
static TYPE_CHART: OnceLock<TypeChart> = OnceLock::new();

/// The complete attacking-type x defending-type multiplier table, derived
/// from the catalog's damage-relation declarations.
#[derive(Debug, Clone, Default)]
pub struct TypeChart {
    matrix: HashMap<String, HashMap<String, f64>>,
    names: Vec<String>,
}

impl TypeChart {
    /// Build the chart from a set of type records.
    ///
    /// Every (attacker, defender) pair starts at 1.0, then the attacker's
    /// relation lists overwrite entries in the order double, half, no-damage.
    /// A defender named in more than one list resolves to the last rule
    /// applied. Relation entries naming types outside the set are stored
    /// too; they only matter if such a name is ever queried as a defender.
    pub fn from_types(types: &[TypeData]) -> Self {
        let mut matrix = HashMap::new();

        for attacking in types {
            let row: &mut HashMap<String, f64> =
                matrix.entry(attacking.name.clone()).or_default();

            for defending in types {
                row.insert(defending.name.clone(), 1.0);
            }

            let relations = &attacking.damage_relations;
            for name in &relations.double_damage_to {
                row.insert(name.clone(), 2.0);
            }
            for name in &relations.half_damage_to {
                row.insert(name.clone(), 0.5);
            }
            for name in &relations.no_damage_to {
                row.insert(name.clone(), 0.0);
            }
        }

        let mut names: Vec<String> = types.iter().map(|t| t.name.clone()).collect();
        names.sort();

        Self { matrix, names }
    }

    /// Get the shared chart, building it from the global catalog on first
    /// use. The chart is never rebuilt for the life of the process; a
    /// catalog reload after this point is not reflected until restart.
    pub fn global() -> &'static TypeChart {
        TYPE_CHART.get_or_init(|| TypeChart::from_types(&crate::catalog::all_types()))
    }

    /// Single-pair multiplier. Unknown attackers, defenders, or pairs are
    /// neutral (1.0) rather than an error; incomplete catalog data must not
    /// fail a lookup.
    pub fn multiplier(&self, attacking: &str, defending: &str) -> f64 {
        self.matrix
            .get(attacking)
            .and_then(|row| row.get(defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Effectiveness of an attacking type against a defending type
    /// combination: the product of the pairwise multipliers.
    pub fn effectiveness<S: AsRef<str>>(&self, attacking: &str, defending_types: &[S]) -> f64 {
        defending_types
            .iter()
            .fold(1.0, |product, defending| {
                product * self.multiplier(attacking, defending.as_ref())
            })
    }

    /// All type names the chart was built from, sorted.
    pub fn type_names(&self) -> &[String] {
        &self.names
    }

    /// Defending types that take reduced (or no) damage from the attacker.
    pub fn types_resisting(&self, attacking: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|defending| self.multiplier(attacking, defending) < 1.0)
            .cloned()
            .collect()
    }
}
