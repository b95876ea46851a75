//! Connection curve view model
//!
//! Each connection renders as three strokes over the same path: a wide
//! transparent hit region, an offset drop shadow and the colored rope.
//! Hover makes the rope solid and slightly thicker.

use super::geometry::{Curve, Point};
use crate::config::{
    CONFIRM_DELETE_CONNECTION, CURVE_DASH_PATTERN, CURVE_HIT_WIDTH, CURVE_OPACITY,
    CURVE_SHADOW_COLOR, CURVE_SHADOW_OFFSET, CURVE_SHADOW_WIDTH, CURVE_SHADOW_WIDTH_HOVER,
    CURVE_STROKE_WIDTH, CURVE_STROKE_WIDTH_HOVER,
};
use crate::database::{ConnectionColor, ConnectionId};
use crate::ui::Confirm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeRole {
    Hit,
    Shadow,
    Rope,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub role: StrokeRole,
    pub color: String,
    pub width: f64,
    pub dash: Option<&'static str>,
    pub offset: Point,
    pub opacity: f64,
    /// Only the hit region receives pointer events
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveView {
    pub id: ConnectionId,
    pub path: String,
    pub hovered: bool,
    pub strokes: Vec<Stroke>,
}

impl CurveView {
    pub fn build(
        id: &str,
        from: Point,
        to: Point,
        color: ConnectionColor,
        hovered: bool,
    ) -> Self {
        let path = Curve::between(from, to).path_data();

        let strokes = vec![
            Stroke {
                role: StrokeRole::Hit,
                color: "transparent".to_string(),
                width: CURVE_HIT_WIDTH,
                dash: None,
                offset: Point::default(),
                opacity: 1.0,
                interactive: true,
            },
            Stroke {
                role: StrokeRole::Shadow,
                color: CURVE_SHADOW_COLOR.to_string(),
                width: if hovered {
                    CURVE_SHADOW_WIDTH_HOVER
                } else {
                    CURVE_SHADOW_WIDTH
                },
                dash: None,
                offset: Point::new(CURVE_SHADOW_OFFSET, CURVE_SHADOW_OFFSET),
                opacity: 1.0,
                interactive: false,
            },
            Stroke {
                role: StrokeRole::Rope,
                color: color.hex().to_string(),
                width: if hovered {
                    CURVE_STROKE_WIDTH_HOVER
                } else {
                    CURVE_STROKE_WIDTH
                },
                dash: (!hovered).then_some(CURVE_DASH_PATTERN),
                offset: Point::default(),
                opacity: CURVE_OPACITY,
                interactive: false,
            },
        ];

        Self {
            id: id.to_string(),
            path,
            hovered,
            strokes,
        }
    }
}

/// Click on a curve's hit region: asks for confirmation and yields the
/// connection id to delete when the user agrees.
pub fn confirm_delete(id: &str, confirm: &dyn Confirm) -> Option<ConnectionId> {
    confirm
        .confirm(CONFIRM_DELETE_CONNECTION)
        .then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::FixedConfirm;

    fn build(hovered: bool) -> CurveView {
        CurveView::build(
            "c1",
            Point::new(100.0, 100.0),
            Point::new(500.0, 100.0),
            ConnectionColor::Red,
            hovered,
        )
    }

    #[test]
    fn test_three_strokes_in_paint_order() {
        let view = build(false);

        let roles: Vec<StrokeRole> = view.strokes.iter().map(|s| s.role).collect();
        assert_eq!(roles, vec![StrokeRole::Hit, StrokeRole::Shadow, StrokeRole::Rope]);
        assert_eq!(view.path, "M 100 100 Q 300 140 500 100");
    }

    #[test]
    fn test_hit_region_is_wide_and_transparent() {
        let hit = &build(false).strokes[0];
        assert_eq!(hit.color, "transparent");
        assert!(hit.width >= 20.0 && hit.width <= 30.0);
        assert!(hit.interactive);
    }

    #[test]
    fn test_rope_dashed_at_rest_solid_on_hover() {
        let rest = &build(false).strokes[2];
        assert_eq!(rest.color, "#ef4444");
        assert_eq!(rest.dash, Some("12,6"));
        assert_eq!(rest.width, 7.0);

        let hover = &build(true).strokes[2];
        assert_eq!(hover.dash, None);
        assert_eq!(hover.width, 9.0);
    }

    #[test]
    fn test_shadow_offset_and_hover_width() {
        let shadow = &build(true).strokes[1];
        assert_eq!(shadow.offset, Point::new(3.0, 3.0));
        assert_eq!(shadow.width, 10.0);
        assert!(!shadow.interactive);
    }

    #[test]
    fn test_confirm_delete() {
        assert_eq!(confirm_delete("c1", &FixedConfirm(true)), Some("c1".to_string()));
        assert_eq!(confirm_delete("c1", &FixedConfirm(false)), None);
    }
}
