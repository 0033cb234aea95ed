use serde::{Deserialize, Serialize};

/// Fuzzy conjunction operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNorm {
    #[default]
    Product,
    Minimum,
    Lukasiewicz,
    Drastic,
}

impl TNorm {
    #[inline]
    pub fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            TNorm::Product => a * b,
            TNorm::Minimum => a.min(b),
            TNorm::Lukasiewicz => (a + b - 1.0).max(0.0),
            TNorm::Drastic => {
                if a >= 1.0 {
                    b
                } else if b >= 1.0 {
                    a
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TNorm;

    const ALL: [TNorm; 4] = [TNorm::Product, TNorm::Minimum, TNorm::Lukasiewicz, TNorm::Drastic];

    #[test]
    fn one_is_neutral_and_zero_absorbs() {
        for t in ALL {
            for &x in &[0.0f32, 0.25, 0.7, 1.0] {
                assert!((t.apply(x, 1.0) - x).abs() < 1e-6, "{t:?}");
                assert!((t.apply(1.0, x) - x).abs() < 1e-6, "{t:?}");
                assert_eq!(t.apply(x, 0.0), 0.0, "{t:?}");
            }
        }
    }

    #[test]
    fn norms_are_ordered() {
        let (a, b) = (0.6, 0.7);
        assert!(TNorm::Drastic.apply(a, b) <= TNorm::Lukasiewicz.apply(a, b));
        assert!(TNorm::Lukasiewicz.apply(a, b) <= TNorm::Product.apply(a, b));
        assert!(TNorm::Product.apply(a, b) <= TNorm::Minimum.apply(a, b));
    }
}
