use glam::Vec2;

/// Rail half-thickness in world units.
pub const RAIL_HALF_THICKNESS: f32 = 10.0;

/// A rail rectangle, axis-aligned, described by center and half-extents.
#[derive(Debug, Clone, Copy)]
pub struct RailGeometry {
    pub position: Vec2,
    pub half_width: f32,
    pub half_height: f32,
}

/// A pocket capture region.
#[derive(Debug, Clone, Copy)]
pub struct PocketGeometry {
    pub position: Vec2,
    pub radius: f32,
}

/// Static table geometry, derived once from the table width.
///
/// Pure data: generating a layout has no side effects and two layouts from
/// the same inputs are identical.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub table_width: f32,
    pub table_height: f32,
    /// Center of the table in world space.
    pub center: Vec2,
    pub ball_radius: f32,
    pub pocket_radius: f32,
    /// Top, bottom, left, right cushions. Oversized past the table corners
    /// so the corner seams leave no gap a ball could slip through.
    pub rails: [RailGeometry; 4],
    /// Four corner pockets plus the two mid-rail pockets on the long sides.
    pub pockets: [PocketGeometry; 6],
    /// Cue-ball spot: intersection of the baulk line and the table's
    /// horizontal middle (the top of the D).
    pub cue_start: Vec2,
    /// X coordinate of the baulk line.
    pub baulk_line_x: f32,
    /// Radius of the D semicircle on the baulk line.
    pub d_radius: f32,
}

impl TableLayout {
    /// Derive the full static geometry from the table width, centering the
    /// table in a `world_width x world_height` space.
    ///
    /// Proportions follow the classic 2:1 snooker table: height is half the
    /// width, ball diameter is width/36, pocket diameter is 1.5 ball
    /// diameters.
    pub fn generate(table_width: f32, world_width: f32, world_height: f32) -> Self {
        assert!(table_width > 0.0, "layout requires a positive table width");
        assert!(
            world_width > 0.0 && world_height > 0.0,
            "layout requires positive world dimensions"
        );

        let table_height = table_width / 2.0;
        let center = Vec2::new(world_width / 2.0, world_height / 2.0);
        let ball_radius = table_width / 72.0;
        let pocket_radius = ball_radius * 1.5;

        let half_w = table_width / 2.0;
        let half_h = table_height / 2.0;
        let t = RAIL_HALF_THICKNESS;

        // Long rails overshoot the corners by two thicknesses and the short
        // rails overshoot vertically by the same amount, so the four boxes
        // overlap at every corner.
        let rails = [
            RailGeometry {
                position: center + Vec2::new(0.0, -half_h - t),
                half_width: half_w + 2.0 * t,
                half_height: t,
            },
            RailGeometry {
                position: center + Vec2::new(0.0, half_h + t),
                half_width: half_w + 2.0 * t,
                half_height: t,
            },
            RailGeometry {
                position: center + Vec2::new(-half_w - t, 0.0),
                half_width: t,
                half_height: half_h + 2.0 * t,
            },
            RailGeometry {
                position: center + Vec2::new(half_w + t, 0.0),
                half_width: t,
                half_height: half_h + 2.0 * t,
            },
        ];

        let pockets = [
            Vec2::new(-half_w, -half_h),
            Vec2::new(0.0, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(-half_w, half_h),
            Vec2::new(0.0, half_h),
            Vec2::new(half_w, half_h),
        ]
        .map(|offset| PocketGeometry {
            position: center + offset,
            radius: pocket_radius,
        });

        let baulk_line_x = center.x - table_width / 4.0;

        Self {
            table_width,
            table_height,
            center,
            ball_radius,
            pocket_radius,
            rails,
            pockets,
            cue_start: Vec2::new(baulk_line_x, center.y),
            baulk_line_x,
            d_radius: table_height / 4.0,
        }
    }

    /// Playing-surface bounds as (min, max) corners.
    pub fn surface_bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(self.table_width / 2.0, self.table_height / 2.0);
        (self.center - half, self.center + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TableLayout {
        TableLayout::generate(800.0, 1000.0, 600.0)
    }

    #[test]
    fn classic_proportions() {
        let l = layout();
        assert_eq!(l.table_height, 400.0);
        assert!((l.ball_radius * 2.0 - 800.0 / 36.0).abs() < 1e-4);
        assert!((l.pocket_radius - l.ball_radius * 1.5).abs() < 1e-4);
    }

    #[test]
    fn pockets_sit_on_corners_and_long_rail_midpoints() {
        let l = layout();
        let (min, max) = l.surface_bounds();
        let expected = [
            Vec2::new(min.x, min.y),
            Vec2::new(l.center.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, max.y),
            Vec2::new(l.center.x, max.y),
            Vec2::new(max.x, max.y),
        ];
        for (pocket, want) in l.pockets.iter().zip(expected) {
            assert_eq!(pocket.position, want);
        }
    }

    #[test]
    fn rails_overlap_at_corners() {
        let l = layout();
        let (min, max) = l.surface_bounds();
        let [top, bottom, left, right] = l.rails;

        // Long rails reach past the table corners...
        assert!(top.position.x + top.half_width > max.x + RAIL_HALF_THICKNESS);
        assert!(bottom.position.x - bottom.half_width < min.x - RAIL_HALF_THICKNESS);
        // ...and the short rails reach past them vertically, so the corner
        // seam is covered from both sides.
        assert!(left.position.y + left.half_height > max.y + RAIL_HALF_THICKNESS);
        assert!(right.position.y - right.half_height < min.y - RAIL_HALF_THICKNESS);
    }

    #[test]
    fn cue_start_is_on_the_baulk_line() {
        let l = layout();
        assert_eq!(l.cue_start, Vec2::new(1000.0 / 2.0 - 200.0, 300.0));
        assert_eq!(l.cue_start.x, l.baulk_line_x);
    }

    #[test]
    fn generation_is_pure() {
        let a = TableLayout::generate(640.0, 1000.0, 600.0);
        let b = TableLayout::generate(640.0, 1000.0, 600.0);
        assert_eq!(a.cue_start, b.cue_start);
        assert_eq!(a.ball_radius, b.ball_radius);
        for (ra, rb) in a.rails.iter().zip(b.rails.iter()) {
            assert_eq!(ra.position, rb.position);
        }
    }

    #[test]
    #[should_panic(expected = "positive table width")]
    fn zero_width_panics() {
        let _ = TableLayout::generate(0.0, 1000.0, 600.0);
    }
}
