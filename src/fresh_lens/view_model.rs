use crate::classification::{format_percentage, ClassificationResult};
use crate::freshness::Freshness;
use egui::Color32;

#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub label: &'static str,
    pub value: f32,
    pub color: Color32,
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: &'static str,
    pub x_max: f32,
    /// Horizontal gap between a bar's end and its annotation, in axis units.
    pub annotation_offset: f32,
    pub show_x_ticks: bool,
    /// In label order; the first bar is drawn at the bottom.
    pub bars: Vec<BarView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdviceView {
    pub lines: &'static [&'static str],
    pub background: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub freshness: Freshness,
    pub heading: String,
    pub confidence_text: String,
    pub chart: ChartView,
    pub advice: AdviceView,
}

impl ResultView {
    pub fn new(result: &ClassificationResult) -> Self {
        let freshness = result.freshness();

        let bars = Freshness::ALL
            .iter()
            .zip(result.probabilities())
            .map(|(&label, &value)| BarView {
                label: label.label(),
                value,
                color: label.bar_color(),
                annotation: format_percentage(value),
            })
            .collect();

        Self {
            freshness,
            heading: format!("Prediction: {}", freshness),
            confidence_text: format!("Confidence: {}", result.confidence_text()),
            chart: ChartView {
                title: "Prediction Confidence",
                x_max: 1.1,
                annotation_offset: 0.02,
                show_x_ticks: false,
                bars,
            },
            advice: AdviceView {
                lines: freshness.advice(),
                background: freshness.advice_background(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(probabilities: &[f32]) -> ResultView {
        ResultView::new(&ClassificationResult::from_probabilities(probabilities).unwrap())
    }

    #[test]
    fn test_fresh_scenario() {
        let view = view(&[0.91, 0.05, 0.04]);

        assert_eq!(view.freshness, Freshness::Fresh);
        assert_eq!(view.heading, "Prediction: Fresh");
        assert_eq!(view.confidence_text, "Confidence: 91.00%");
        assert_eq!(view.advice.background, Color32::from_rgb(0xd4, 0xed, 0xda));
        assert_eq!(view.advice.lines, Freshness::Fresh.advice());
    }

    #[test]
    fn test_chart_has_one_bar_per_label() {
        let view = view(&[0.2, 0.5, 0.3]);

        let labels: Vec<&str> = view.chart.bars.iter().map(|b| b.label).collect();
        let annotations: Vec<&str> = view
            .chart
            .bars
            .iter()
            .map(|b| b.annotation.as_str())
            .collect();

        assert_eq!(labels, vec!["Fresh", "Half-Fresh", "Spoiled"]);
        assert_eq!(annotations, vec!["20.00%", "50.00%", "30.00%"]);
        assert_eq!(view.chart.bars[2].color, Freshness::Spoiled.bar_color());
        assert_eq!(view.chart.x_max, 1.1);
        assert!(!view.chart.show_x_ticks);
    }

    #[test]
    fn test_each_label_selects_its_own_advice() {
        let cases = [
            ([0.8, 0.1, 0.1], Freshness::Fresh),
            ([0.1, 0.8, 0.1], Freshness::HalfFresh),
            ([0.1, 0.1, 0.8], Freshness::Spoiled),
        ];

        for (probabilities, expected) in cases {
            let view = view(&probabilities);

            assert_eq!(view.freshness, expected);
            assert_eq!(view.advice.lines, expected.advice());
            assert_eq!(view.advice.background, expected.advice_background());
        }
    }
}
