//! Scoring rules, one per content dimension

pub mod actionability;
pub mod call_to_action;
pub mod clarity;
pub mod engagement;
pub mod engagement_potential;
pub mod formatting;
pub mod hook_strength;
pub mod professionalism;
pub mod structure;

pub use actionability::ActionabilityRule;
pub use call_to_action::CallToActionRule;
pub use clarity::ClarityRule;
pub use engagement::EngagementRule;
pub use engagement_potential::EngagementPotentialRule;
pub use formatting::FormattingRule;
pub use hook_strength::HookStrengthRule;
pub use professionalism::ProfessionalismRule;
pub use structure::StructureRule;

use super::text::ContentText;
use crate::Dimension;

/// Trait for dimension scoring rules
pub trait DimensionRule {
    /// Dimension this rule scores
    fn dimension(&self) -> Dimension;

    /// Score the content (0-10)
    fn score(&self, content: &ContentText) -> f64;
}

/// Rule that scores the given dimension
pub fn rule_for(dimension: Dimension) -> &'static dyn DimensionRule {
    match dimension {
        Dimension::Engagement => &EngagementRule,
        Dimension::Structure => &StructureRule,
        Dimension::Clarity => &ClarityRule,
        Dimension::Actionability => &ActionabilityRule,
        Dimension::Professionalism => &ProfessionalismRule,
        Dimension::HookStrength => &HookStrengthRule,
        Dimension::EngagementPotential => &EngagementPotentialRule,
        Dimension::CallToAction => &CallToActionRule,
        Dimension::Formatting => &FormattingRule,
    }
}
