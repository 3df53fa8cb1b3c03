//! Geometry classification and normalization (§4.4)

use std::f64::consts::{FRAC_PI_2, PI};

use crate::source;
use crate::target;
use crate::types::Vector2;

/// Default text height substituted when the source `size_y` is non-positive
/// (§4.4 "Text").
pub const DEFAULT_TEXT_HEIGHT: f64 = 2.5;

/// One of the three mutually exclusive shapes a source `Arc` classifies
/// into (§3.1 invariant, §4.4 "Geometry classification").
pub enum ClassifiedArc {
    Circle(target::Circle),
    Ellipse(target::Ellipse),
    Arc(target::Arc),
}

/// Classifies and lowers a source `Arc` record, given the target entity
/// base already resolved by the caller (layer/colour/line-type).
pub fn classify_arc(arc: &source::Arc, base: target::EntityBase) -> ClassifiedArc {
    if arc.full_circle && arc.flatness == 1.0 {
        return ClassifiedArc::Circle(target::Circle {
            base,
            center: arc.center,
            radius: arc.radius,
        });
    }

    if arc.flatness != 1.0 {
        let (major_radius, ratio, tilt) = if arc.flatness > 1.0 {
            (arc.radius * arc.flatness, 1.0 / arc.flatness, arc.tilt_angle + FRAC_PI_2)
        } else {
            (arc.radius, arc.flatness, arc.tilt_angle)
        };
        let major_axis = Vector2::new(major_radius, 0.0).rotate(tilt);
        let (start_param, end_param) = if arc.full_circle {
            (0.0, 2.0 * PI)
        } else {
            (arc.start_angle, arc.start_angle + arc.arc_angle)
        };
        return ClassifiedArc::Ellipse(target::Ellipse {
            base,
            center: arc.center,
            major_axis,
            ratio,
            start_param,
            end_param,
        });
    }

    ClassifiedArc::Arc(target::Arc {
        base,
        center: arc.center,
        radius: arc.radius,
        start_angle_deg: arc.start_angle.to_degrees(),
        end_angle_deg: (arc.start_angle + arc.arc_angle).to_degrees(),
    })
}

/// Substitutes the default text height for a non-positive `size_y` (§4.4
/// "Text").
pub fn text_height(size_y: f64) -> f64 {
    if size_y <= 0.0 {
        DEFAULT_TEXT_HEIGHT
    } else {
        size_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EntityBase as SourceBase;

    fn base() -> target::EntityBase {
        target::EntityBase {
            layer: "0-0".to_string(),
            color: 0,
            line_type: "CONTINUOUS".to_string(),
        }
    }

    fn arc_fixture(overrides: impl FnOnce(&mut source::Arc)) -> source::Arc {
        let mut arc = source::Arc {
            base: SourceBase::default(),
            center: Vector2::new(50.0, 50.0),
            radius: 25.0,
            start_angle: 0.0,
            arc_angle: 0.0,
            tilt_angle: 0.0,
            flatness: 1.0,
            full_circle: false,
        };
        overrides(&mut arc);
        arc
    }

    #[test]
    fn test_full_circle_classifies_as_circle() {
        let arc = arc_fixture(|a| {
            a.full_circle = true;
            a.flatness = 1.0;
        });
        match classify_arc(&arc, base()) {
            ClassifiedArc::Circle(c) => {
                assert_eq!(c.center, Vector2::new(50.0, 50.0));
                assert_eq!(c.radius, 25.0);
            }
            _ => panic!("expected Circle"),
        }
    }

    #[test]
    fn test_partial_arc_converts_radians_to_degrees() {
        let arc = arc_fixture(|a| {
            a.center = Vector2::ZERO;
            a.radius = 25.0;
            a.start_angle = 0.0;
            a.arc_angle = FRAC_PI_2;
            a.full_circle = false;
            a.flatness = 1.0;
        });
        match classify_arc(&arc, base()) {
            ClassifiedArc::Arc(a) => {
                assert!((a.start_angle_deg - 0.0).abs() < 1e-9);
                assert!((a.end_angle_deg - 90.0).abs() < 1e-9);
            }
            _ => panic!("expected Arc"),
        }
    }

    #[test]
    fn test_ellipse_axis_swap_when_flatness_above_one() {
        let arc = arc_fixture(|a| {
            a.radius = 10.0;
            a.flatness = 2.0;
            a.tilt_angle = 0.0;
            a.full_circle = true;
        });
        match classify_arc(&arc, base()) {
            ClassifiedArc::Ellipse(e) => {
                assert!((e.ratio - 0.5).abs() < 1e-9);
                assert!(e.major_axis.x.abs() < 1e-9);
                assert!((e.major_axis.y - 20.0).abs() < 1e-9);
                assert_eq!(e.start_param, 0.0);
                assert!((e.end_param - 2.0 * PI).abs() < 1e-9);
            }
            _ => panic!("expected Ellipse"),
        }
    }

    #[test]
    fn test_partial_ellipse_keeps_source_angles() {
        let arc = arc_fixture(|a| {
            a.flatness = 0.5;
            a.start_angle = 0.1;
            a.arc_angle = 0.2;
            a.full_circle = false;
        });
        match classify_arc(&arc, base()) {
            ClassifiedArc::Ellipse(e) => {
                assert!((e.start_param - 0.1).abs() < 1e-9);
                assert!((e.end_param - 0.3).abs() < 1e-9);
            }
            _ => panic!("expected Ellipse"),
        }
    }

    #[test]
    fn test_text_height_substitutes_default() {
        assert_eq!(text_height(0.0), DEFAULT_TEXT_HEIGHT);
        assert_eq!(text_height(-1.0), DEFAULT_TEXT_HEIGHT);
        assert_eq!(text_height(5.0), 5.0);
    }
}
