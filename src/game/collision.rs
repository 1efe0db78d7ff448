//! Collision Detection
//!
//! Pairwise, stateless overlap tests between positioned hitboxes.
//! Nothing here mutates the entities it is handed.

use crate::core::hitbox::Hitbox;
use crate::core::vec2::Vec2;
use crate::game::entity::EntityState;

/// Check whether two entities' hitboxes overlap.
///
/// Symmetric in its arguments for every shape pair.
#[inline]
pub fn collided(a: &EntityState, b: &EntityState) -> bool {
    shapes_overlap(a.position(), a.hitbox(), b.position(), b.hitbox())
}

/// Dispatch on the pair of shapes.
pub fn shapes_overlap(pos_a: Vec2, hitbox_a: &Hitbox, pos_b: Vec2, hitbox_b: &Hitbox) -> bool {
    match (*hitbox_a, *hitbox_b) {
        (Hitbox::Circle { radius: ra }, Hitbox::Circle { radius: rb }) => {
            circles_overlap(pos_a, ra, pos_b, rb)
        }
        (
            Hitbox::Rect { width: wa, height: ha },
            Hitbox::Rect { width: wb, height: hb },
        ) => {
            rect_midpoints_inside(pos_a, wa, ha, pos_b, wb, hb)
                || rect_midpoints_inside(pos_b, wb, hb, pos_a, wa, ha)
        }
        (Hitbox::Circle { radius }, Hitbox::Rect { width, height }) => {
            circle_rect_overlap(pos_a, radius, pos_b, width, height)
        }
        (Hitbox::Rect { width, height }, Hitbox::Circle { radius }) => {
            circle_rect_overlap(pos_b, radius, pos_a, width, height)
        }
    }
}

/// Check if two circles overlap. Touching circles do not.
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f64, pos_b: Vec2, radius_b: f64) -> bool {
    let combined = radius_a + radius_b;
    pos_a.add(pos_b.inverse()).magnitude_sqr() < combined * combined
}

/// Edge-midpoint containment test for two axis-aligned rectangles.
///
/// True when any of the four edge midpoints of rectangle A lies strictly
/// inside rectangle B. This is coarser than a true overlap test: two equal
/// rectangles sharing a center report no hit because every midpoint sits on
/// B's boundary. Gameplay is tuned against this behavior.
///
/// [`shapes_overlap`] runs this test both ways so the result does not depend
/// on argument order; one rectangle fully inside another is detected that way.
pub fn rect_midpoints_inside(
    pos_a: Vec2,
    width_a: f64,
    height_a: f64,
    pos_b: Vec2,
    width_b: f64,
    height_b: f64,
) -> bool {
    let (half_wa, half_ha) = (width_a / 2.0, height_a / 2.0);
    let midpoints = [
        pos_a.add_x(-half_wa),
        pos_a.add_x(half_wa),
        pos_a.add_y(-half_ha),
        pos_a.add_y(half_ha),
    ];

    let (half_wb, half_hb) = (width_b / 2.0, height_b / 2.0);
    let left = pos_b.x - half_wb;
    let right = pos_b.x + half_wb;
    let top = pos_b.y - half_hb;
    let bottom = pos_b.y + half_hb;

    midpoints
        .iter()
        .any(|p| left < p.x && p.x < right && top < p.y && p.y < bottom)
}

/// Exact circle vs axis-aligned rectangle test. The corner check is
/// inclusive, so a circle exactly touching a corner collides.
pub fn circle_rect_overlap(
    circle_pos: Vec2,
    radius: f64,
    rect_pos: Vec2,
    width: f64,
    height: f64,
) -> bool {
    let dist = circle_pos.add(rect_pos.inverse()).abs();
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    if dist.x > half_w + radius || dist.y > half_h + radius {
        return false;
    }
    if dist.x <= half_w || dist.y <= half_h {
        return true;
    }

    let corner_x = dist.x - half_w;
    let corner_y = dist.y - half_h;
    corner_x * corner_x + corner_y * corner_y <= radius * radius
}
