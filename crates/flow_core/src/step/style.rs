//! Presentation descriptors keyed by [`StepType`].
//!
//! The renderer owns the actual colours and artwork; this table only fixes which
//! palette, shape and icon each category uses so every front end agrees.

use serde::Serialize;

use super::types::StepType;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    Sky,
    Amber,
    Purple,
    Emerald,
    Rose,
    Slate,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Rounded card.
    Card,
    /// Card rotated by 45 degrees.
    Diamond,
    /// Dark card with inverted text.
    FilledCard,
    /// Plain outlined card.
    Outline,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    FileText,
    Users,
    Lightbulb,
    GitMerge,
    Flag,
    CheckCircle,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StepStyle {
    pub palette: Palette,
    pub shape: Shape,
    pub icon: Icon,
}

/// Step types shown in the board legend, in display order.
pub const LEGEND: [StepType; 4] = [
    StepType::Document,
    StepType::Meeting,
    StepType::Workshop,
    StepType::Decision,
];

impl StepType {
    pub fn style(&self) -> StepStyle {
        let (palette, shape, icon) = match self {
            StepType::Document => (Palette::Sky, Shape::Card, Icon::FileText),
            StepType::Meeting => (Palette::Amber, Shape::Card, Icon::Users),
            StepType::Workshop => (Palette::Purple, Shape::Card, Icon::Lightbulb),
            StepType::Decision => (Palette::Emerald, Shape::Diamond, Icon::GitMerge),
            StepType::Terminal => (Palette::Slate, Shape::FilledCard, Icon::Flag),
            StepType::Action => (Palette::Rose, Shape::Card, Icon::CheckCircle),
            StepType::Phase => (Palette::Slate, Shape::Outline, Icon::FileText),
        };
        StepStyle {
            palette,
            shape,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_decisions_are_diamonds() {
        for step_type in StepType::ALL {
            let diamond = step_type.style().shape == Shape::Diamond;
            assert_eq!(diamond, step_type == StepType::Decision, "{step_type}");
        }
    }

    #[test]
    fn terminal_is_filled_with_flag() {
        let style = StepType::Terminal.style();
        assert_eq!(style.shape, Shape::FilledCard);
        assert_eq!(style.icon, Icon::Flag);
    }

    #[test]
    fn legend_palettes_are_distinct() {
        let palettes: Vec<Palette> = LEGEND.iter().map(|t| t.style().palette).collect();
        for (i, p) in palettes.iter().enumerate() {
            assert!(!palettes[i + 1..].contains(p));
        }
    }
}
