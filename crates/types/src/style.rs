use serde::{Deserialize, Serialize};

/// Line and text weights used on shop drawings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    #[default]
    ThinLine,
    MediumLine,
    ThickLine,
    HiddenLine,
    CenterLine,
    DimensionLine,
    TextSmall,
    TextMedium,
    TextLarge,
    HatchWood,
    HatchInsulation,
}

impl RenderStyle {
    pub fn is_text(self) -> bool {
        matches!(
            self,
            RenderStyle::TextSmall | RenderStyle::TextMedium | RenderStyle::TextLarge
        )
    }
}
