use crate::engine::core::{FieldSpec, Schema, TableSource};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

const WORDS: [&str; 8] = ["ab", "bc", "cd", "de", "ef", "fg", "gh", "hi"];

pub struct SourceFactory {
    fields: Vec<FieldSpec>,
    rows: Vec<Value>,
}

impl SourceFactory {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The four-person table used throughout the operator tests.
    pub fn people() -> Self {
        Self::new()
            .field("name", "string")
            .field("age", "number")
            .row(json!({"name": "Ann", "age": 27}))
            .row(json!({"name": "Liza", "age": 32}))
            .row(json!({"name": "John", "age": 29}))
            .row(json!({"name": "Kate", "age": 25}))
    }

    /// Seeded rows with ~20% nulls and many ties: `value_a` and `value_c`
    /// numeric, `value_b` drawn from a small word list.
    pub fn random(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut factory = Self::new()
            .field("value_a", "number")
            .field("value_b", "string")
            .field("value_c", "number");
        for _ in 0..count {
            let a = if rng.gen_bool(0.8) {
                json!(rng.gen_range(0..500))
            } else {
                Value::Null
            };
            let b = if rng.gen_bool(0.8) {
                json!(WORDS[rng.gen_range(0..WORDS.len())])
            } else {
                Value::Null
            };
            let c = if rng.gen_bool(0.8) {
                json!(rng.gen_range(-20..20))
            } else {
                Value::Null
            };
            factory = factory.row(json!({"value_a": a, "value_b": b, "value_c": c}));
        }
        factory
    }

    pub fn field(mut self, name: &str, kind: &str) -> Self {
        self.fields.push(FieldSpec::new(name, kind));
        self
    }

    pub fn row(mut self, row: Value) -> Self {
        self.rows.push(row);
        self
    }

    pub fn create(self) -> TableSource {
        TableSource::new(
            self.rows,
            Schema {
                fields: self.fields,
            },
        )
    }
}
