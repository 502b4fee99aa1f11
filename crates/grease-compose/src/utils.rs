use std::f64::consts::PI;

/// Samples the unit circle in the XY plane.
///
/// The angle is given in turns: `0.0` maps to `(0, 1, 0)`, `0.25` to `(1, 0, 0)`, a full turn is `1.0`.
pub fn circle_point(angle: f64) -> na::Point3<f64> {
    let radians = angle * 2.0 * PI;
    na::point![radians.sin(), radians.cos(), 0.0]
}

/// Samples `count` evenly spaced points on the unit circle in the XY plane, starting at `(0, 1, 0)`.
///
/// When `closed` is true, the first point is repeated at the end so that a polyline through the points closes the circle.
pub fn circle_points(count: usize, closed: bool) -> Vec<na::Point3<f64>> {
    if count == 0 {
        return vec![];
    }

    let mut points = (0..count)
        .map(|i| circle_point(i as f64 / count as f64))
        .collect::<Vec<na::Point3<f64>>>();

    if closed {
        points.push(points[0]);
    }

    points
}

/// Returns a name that does not collide with any name for which `taken` returns true,
/// by appending a numbered suffix in the style `name.001`, `name.002`, ..
pub fn unique_name(name: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(name) {
        return name.to_string();
    }

    (1_u32..)
        .map(|i| format!("{name}.{i:03}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_point_quarters() {
        assert_relative_eq!(circle_point(0.0), na::point![0.0, 1.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(circle_point(0.25), na::point![1.0, 0.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(circle_point(0.5), na::point![0.0, -1.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(circle_point(1.0), circle_point(0.0), epsilon = 1e-12);
    }

    #[test]
    fn circle_points_closed() {
        assert!(circle_points(0, true).is_empty());

        let open = circle_points(8, false);
        assert_eq!(open.len(), 8);
        for p in open.iter() {
            assert_relative_eq!(p.coords.magnitude(), 1.0, epsilon = 1e-12);
        }

        let closed = circle_points(8, true);
        assert_eq!(closed.len(), 9);
        assert_relative_eq!(closed[0], closed[8]);
    }

    #[test]
    fn unique_names() {
        let existing = ["Grease", "Grease.001"];
        let taken = |n: &str| existing.contains(&n);

        assert_eq!(unique_name("Layer", taken), "Layer");
        assert_eq!(unique_name("Grease", taken), "Grease.002");
    }
}
