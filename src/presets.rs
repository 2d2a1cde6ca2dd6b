//! Built-in example inputs for the "load example" action.

use rand::Rng;

use crate::FormInput;

/// A ready-to-submit formula/limits triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub formula: &'static str,
    pub lower_limit: &'static str,
    pub upper_limit: &'static str,
}

impl Preset {
    pub fn to_form_input(self) -> FormInput {
        FormInput {
            lower_limit: self.lower_limit.to_string(),
            upper_limit: self.upper_limit.to_string(),
            formula: self.formula.to_string(),
        }
    }
}

/// The fixed example table.
pub const PRESETS: [Preset; 5] = [
    Preset { formula: "1/k", lower_limit: "10", upper_limit: "30" },
    Preset { formula: "k^2", lower_limit: "1", upper_limit: "5" },
    Preset { formula: "2*k + 1", lower_limit: "3", upper_limit: "7" },
    Preset { formula: "k/2", lower_limit: "4", upper_limit: "10" },
    Preset { formula: "3*k", lower_limit: "1", upper_limit: "6" },
];

/// Pick one preset uniformly. Takes the RNG as an argument so callers can
/// inject a seeded generator and get deterministic picks in tests.
pub fn pick_preset<R: Rng + ?Sized>(rng: &mut R) -> Preset {
    PRESETS[rng.random_range(0..PRESETS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn picks_come_from_the_table() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let preset = pick_preset(&mut rng);
            assert!(PRESETS.contains(&preset));
        }
    }

    #[test]
    fn same_seed_gives_same_pick() {
        let a = pick_preset(&mut SmallRng::seed_from_u64(42));
        let b = pick_preset(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn presets_all_pass_validation() {
        for preset in PRESETS {
            crate::validate_form(&preset.to_form_input()).unwrap();
        }
    }
}
