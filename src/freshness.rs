use egui::Color32;
use std::fmt;

/// Output labels of the freshness model, in the order of its probability vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Freshness {
    Fresh,
    HalfFresh,
    Spoiled,
}

impl Freshness {
    pub const COUNT: usize = 3;

    pub const ALL: [Freshness; Freshness::COUNT] =
        [Freshness::Fresh, Freshness::HalfFresh, Freshness::Spoiled];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Freshness::Fresh => 0,
            Freshness::HalfFresh => 1,
            Freshness::Spoiled => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Freshness::Fresh => "Fresh",
            Freshness::HalfFresh => "Half-Fresh",
            Freshness::Spoiled => "Spoiled",
        }
    }

    /// Bar color in the confidence chart.
    pub fn bar_color(self) -> Color32 {
        match self {
            Freshness::Fresh => Color32::from_rgb(0x00, 0x80, 0x00),
            Freshness::HalfFresh => Color32::from_rgb(0xff, 0xa5, 0x00),
            Freshness::Spoiled => Color32::from_rgb(0xff, 0x00, 0x00),
        }
    }

    pub fn advice(self) -> &'static [&'static str] {
        match self {
            Freshness::Fresh => &[
                "✅ Color: Bright and natural",
                "✅ Texture: Firm and moist",
                "✅ Odor: Minimal or none",
                "➡ Action: Safe to consume or store properly",
            ],
            Freshness::HalfFresh => &[
                "⚠ Color: Slight discoloration",
                "⚠ Texture: Slightly soft or sticky",
                "⚠ Odor: Mild smell",
                "➡ Action: Consume soon; cook immediately",
            ],
            Freshness::Spoiled => &[
                "❌ Color: Green/gray/brown",
                "❌ Texture: Slimy or mushy",
                "❌ Odor: Strong unpleasant smell",
                "➡ Action: Discard immediately",
            ],
        }
    }

    pub fn advice_background(self) -> Color32 {
        match self {
            Freshness::Fresh => Color32::from_rgb(0xd4, 0xed, 0xda),
            Freshness::HalfFresh => Color32::from_rgb(0xff, 0xf3, 0xcd),
            Freshness::Spoiled => Color32::from_rgb(0xf8, 0xd7, 0xda),
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
