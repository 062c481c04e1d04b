//! Seeded synthetic phone books for benchmarking without input files

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::Record;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adele", "Amy", "Bob", "Bruno", "Carla", "Cid", "Dana", "Dmitri",
    "Elena", "Emil", "Farah", "Felix", "Greta", "Hugo", "Ines", "Ivan", "Jonas", "Julia",
    "Kenji", "Lara", "Liam", "Marta", "Nadia", "Omar", "Paula", "Quinn", "Rosa", "Sven",
    "Tara", "Ugo", "Vera", "Wanda", "Xavier", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hansen",
    "Ivanova", "Jensen", "Kowalski", "Lopez", "Moreau", "Nakamura", "Olsen", "Petrov",
    "Quispe", "Rossi", "Schmidt", "Tanaka", "Ueda", "Varga", "Weber", "Xu", "Yilmaz",
    "Zimmermann",
];

/// Shape of a generated data set
#[derive(Debug, Clone, Copy)]
pub struct DataSpec {
    pub records: usize,
    pub queries: usize,
    /// Fraction of queries drawn from names that exist in the book
    pub hit_rate: f64,
    pub seed: u64,
}

impl Default for DataSpec {
    fn default() -> Self {
        Self {
            records: 10_000,
            queries: 500,
            hit_rate: 0.9,
            seed: 12345,
        }
    }
}

fn random_name(rng: &mut Xoshiro256PlusPlus) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    // suffix keeps names mostly distinct on large books
    format!("{first} {last} {:04}", rng.gen_range(0..10_000))
}

/// Generate an unsorted phone book and a query list, reproducible per seed
pub fn generate(spec: &DataSpec) -> (Vec<Record>, Vec<String>) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(spec.seed);

    let records: Vec<Record> = (0..spec.records)
        .map(|_| {
            let phone = rng.gen_range(1_000_000..10_000_000u64);
            Record::new(random_name(&mut rng), phone)
        })
        .collect();

    let queries = (0..spec.queries)
        .map(|_| match records.choose(&mut rng) {
            Some(record) if rng.gen::<f64>() < spec.hit_rate => record.name.clone(),
            // lowercase first letter never collides with generated names
            _ => random_name(&mut rng).to_lowercase(),
        })
        .collect();

    (records, queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::LinearSearch;
    use crate::Searcher;

    #[test]
    fn test_deterministic() {
        let spec = DataSpec {
            records: 200,
            queries: 50,
            ..Default::default()
        };
        assert_eq!(generate(&spec), generate(&spec));

        let other = DataSpec { seed: 1, ..spec };
        assert_ne!(generate(&spec).0, generate(&other).0);
    }

    #[test]
    fn test_sizes_and_hit_rate() {
        let spec = DataSpec {
            records: 1_000,
            queries: 400,
            hit_rate: 1.0,
            seed: 9,
        };
        let (records, queries) = generate(&spec);
        assert_eq!(records.len(), 1_000);
        assert_eq!(queries.len(), 400);
        assert_eq!(LinearSearch.search(&records, &queries).found, 400);

        let misses = DataSpec { hit_rate: 0.0, ..spec };
        let (records, queries) = generate(&misses);
        assert_eq!(LinearSearch.search(&records, &queries).found, 0);
    }

    #[test]
    fn test_empty_book() {
        let spec = DataSpec {
            records: 0,
            queries: 10,
            ..Default::default()
        };
        let (records, queries) = generate(&spec);
        assert!(records.is_empty());
        assert_eq!(queries.len(), 10);
    }
}
