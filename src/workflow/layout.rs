use super::node::Position;
use crate::config::LayoutSpacing;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction of the auto-layout action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(LayoutMode::Horizontal),
            "vertical" => Ok(LayoutMode::Vertical),
            other => Err(format!("Unknown layout mode '{}'", other)),
        }
    }
}

impl LayoutMode {
    /// Position of the node at `index` in iteration order.
    pub fn position_for(self, index: usize, spacing: &LayoutSpacing) -> Position {
        let i = index as f64;
        match self {
            LayoutMode::Horizontal => Position::new(
                spacing.origin_x + i * spacing.horizontal_step,
                spacing.origin_y,
            ),
            LayoutMode::Vertical => Position::new(
                spacing.vertical_x,
                spacing.origin_y + i * spacing.vertical_step,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spacing_matches_initial_pipeline() {
        let spacing = LayoutSpacing::default();
        let positions: Vec<_> = (0..4)
            .map(|i| LayoutMode::Horizontal.position_for(i, &spacing))
            .collect();
        assert_eq!(positions[0], Position::new(20.0, 40.0));
        assert_eq!(positions[3], Position::new(680.0, 40.0));
        assert_eq!(
            LayoutMode::Vertical.position_for(2, &spacing),
            Position::new(40.0, 280.0)
        );
    }

    #[test]
    fn test_parse_layout_mode() {
        assert_eq!("Vertical".parse::<LayoutMode>(), Ok(LayoutMode::Vertical));
        assert!("diagonal".parse::<LayoutMode>().is_err());
    }
}
