use bevy::prelude::Color;

use crate::biome::BiomeTable;
use crate::props::HudProps;

/// Which affordance the pause control shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAffordance {
    /// Game is paused; activating resumes.
    Play,
    /// Game is running; activating pauses.
    Pause,
}

impl PauseAffordance {
    pub fn for_paused(is_paused: bool) -> Self {
        if is_paused {
            Self::Play
        } else {
            Self::Pause
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "❚❚",
        }
    }
}

/// Everything the overlay displays, derived from props alone.
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub score_text: String,
    pub biome_label: String,
    pub biome_color: Color,
    pub pause: PauseAffordance,
}

impl HudView {
    pub fn render(props: &HudProps, table: &BiomeTable) -> Self {
        let biome = table.resolve(&props.biome);
        Self {
            score_text: format_score(props.score),
            biome_label: biome.label.clone(),
            biome_color: biome.color,
            pause: PauseAffordance::for_paused(props.is_paused),
        }
    }
}

/// `floor(score)` as decimal text, exact at any magnitude. NaN, infinities
/// and negatives show as zero.
pub fn format_score(score: f64) -> String {
    if !score.is_finite() || score <= 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", score.floor())
}

#[cfg(test)]
mod tests {
    use bevy::color::palettes::css::{GOLD, RED};

    use super::*;
    use crate::biome::BiomeId;

    #[test]
    fn score_is_truncated_not_rounded() {
        assert_eq!(format_score(1234.9), "1234");
        assert_eq!(format_score(0.99), "0");
        assert_eq!(format_score(7.0), "7");
        assert_eq!(format_score(41.5), "41");
    }

    #[test]
    fn score_floor_holds_across_a_range() {
        for tenths in 0..5_000u32 {
            let score = f64::from(tenths) / 10.0;
            assert_eq!(format_score(score), (tenths / 10).to_string(), "score {score}");
        }
    }

    #[test]
    fn malformed_scores_are_normalized() {
        assert_eq!(format_score(f64::NAN), "0");
        assert_eq!(format_score(-3.7), "0");
        assert_eq!(format_score(f64::INFINITY), "0");
    }

    #[test]
    fn huge_scores_are_floored_not_clamped() {
        assert_eq!(format_score(1e20), "100000000000000000000");
        assert_eq!(format_score(3.5e19), "35000000000000000000");
    }

    #[test]
    fn renders_normal_biome() {
        let view = HudView::render(&HudProps::new(12.5, BiomeId::NORMAL, false), &BiomeTable::default());

        assert_eq!(view.score_text, "12");
        assert_eq!(view.biome_label, "OLYMPE");
        assert_eq!(view.biome_color, Color::from(GOLD));
        assert_eq!(view.pause, PauseAffordance::Pause);
    }

    #[test]
    fn renders_hades_biome() {
        let view = HudView::render(&HudProps::new(0.0, "HADES", true), &BiomeTable::default());

        assert_eq!(view.biome_label, "ENFERS");
        assert_eq!(view.biome_color, Color::from(RED));
        assert_eq!(view.pause, PauseAffordance::Play);
    }

    #[test]
    fn unknown_biome_renders_normal_entry() {
        let table = BiomeTable::default();

        let unknown = HudView::render(&HudProps::new(1.0, "UNKNOWN_ZONE", false), &table);
        let normal = HudView::render(&HudProps::new(1.0, "NORMAL", false), &table);

        assert_eq!(unknown, normal);
    }

    #[test]
    fn affordance_glyphs_differ() {
        assert_eq!(PauseAffordance::for_paused(true), PauseAffordance::Play);
        assert_eq!(PauseAffordance::for_paused(false), PauseAffordance::Pause);
        assert_ne!(PauseAffordance::Play.glyph(), PauseAffordance::Pause.glyph());
    }
}
