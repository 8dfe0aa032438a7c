use crate::error::InferenceError;
use crate::freshness::Freshness;

/// Index of the largest value. The first maximal entry wins ties.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &value) in values.iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }

    best.map(|(index, _)| index)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    freshness: Freshness,
    probabilities: [f32; Freshness::COUNT],
}

impl ClassificationResult {
    pub fn from_probabilities(probabilities: &[f32]) -> Result<Self, InferenceError> {
        let probabilities: [f32; Freshness::COUNT] =
            probabilities
                .try_into()
                .map_err(|_| InferenceError::OutputLength {
                    got: probabilities.len(),
                    expected: Freshness::COUNT,
                })?;

        if let Some(index) = probabilities.iter().position(|p| !p.is_finite()) {
            return Err(InferenceError::NonFinite { index });
        }

        let freshness = argmax(&probabilities)
            .and_then(Freshness::from_index)
            .ok_or(InferenceError::OutputLength {
                got: 0,
                expected: Freshness::COUNT,
            })?;

        Ok(Self {
            freshness,
            probabilities,
        })
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    pub fn probabilities(&self) -> &[f32; Freshness::COUNT] {
        &self.probabilities
    }

    pub fn probability(&self, freshness: Freshness) -> f32 {
        self.probabilities[freshness.index()]
    }

    pub fn confidence(&self) -> f32 {
        self.probability(self.freshness)
    }

    pub fn confidence_text(&self) -> String {
        format_percentage(self.confidence())
    }
}

pub fn format_percentage(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}
