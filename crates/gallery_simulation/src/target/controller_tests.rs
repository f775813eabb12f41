//! Tests for TargetController.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::scene::default_targets;
    use crate::target::{segment_distance, TargetController, TargetId};

    fn controller() -> TargetController {
        let mut controller = TargetController::default();
        controller.initialize(default_targets());
        controller
    }

    fn assert_score_invariant(controller: &TargetController) {
        assert_eq!(
            controller.score() as usize,
            controller.initial_count() - controller.remaining()
        );
    }

    #[test]
    fn test_initialize_loads_three_targets() {
        let controller = controller();

        assert_eq!(controller.remaining(), 3);
        assert_eq!(controller.initial_count(), 3);
        assert_eq!(controller.score(), 0);
        assert!(controller.contains(TargetId(1)));
        assert!(controller.contains(TargetId(3)));
    }

    #[test]
    fn test_hit_within_radius_removes_target() {
        let mut controller = controller();

        let hits = controller.test_hit(Vec3::new(14.6, 0.3, -15.0), 1.0);

        assert_eq!(hits, vec![TargetId(1)]);
        assert_eq!(controller.score(), 1);
        assert_eq!(controller.remaining(), 2);
        assert!(!controller.contains(TargetId(1)));
        assert_score_invariant(&controller);
    }

    #[test]
    fn test_hit_radius_is_strict() {
        let mut controller = controller();

        // Ровно 1.0 от центра — промах
        let hits = controller.test_hit(Vec3::new(16.0, 0.0, -15.0), 1.0);

        assert!(hits.is_empty());
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn test_miss_from_camera_origin() {
        let mut controller = controller();

        let hits = controller.test_hit(Vec3::new(0.0, 1.6, 0.0), 1.0);

        assert!(hits.is_empty());
        assert_eq!(controller.remaining(), 3);
    }

    #[test]
    fn test_removed_target_excluded_from_later_hits() {
        let mut controller = controller();
        let position = Vec3::new(15.0, 0.0, -15.0);

        assert_eq!(controller.test_hit(position, 1.0).len(), 1);
        assert!(controller.test_hit(position, 1.0).is_empty());
        assert_eq!(controller.score(), 1);
    }

    #[test]
    fn test_click_remove() {
        let mut controller = controller();

        assert!(controller.click_remove(TargetId(2)));
        assert_eq!(controller.score(), 1);
        assert!(!controller.contains(TargetId(2)));

        // Повторный клик — no-op
        assert!(!controller.click_remove(TargetId(2)));
        assert_eq!(controller.score(), 1);
        assert_score_invariant(&controller);
    }

    #[test]
    fn test_click_unknown_target_is_noop() {
        let mut controller = controller();

        assert!(!controller.click_remove(TargetId(42)));
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.remaining(), 3);
    }

    #[test]
    fn test_clear_all_targets() {
        let mut controller = controller();

        controller.test_hit(Vec3::new(15.0, 0.0, -15.0), 1.0);
        controller.click_remove(TargetId(2));
        controller.test_hit(Vec3::new(0.0, 5.0, -20.0), 1.0);

        assert!(controller.is_cleared());
        assert_eq!(controller.score(), 3);
        assert_score_invariant(&controller);
    }

    #[test]
    fn test_initialize_resets_score() {
        let mut controller = controller();
        controller.click_remove(TargetId(1));

        controller.initialize(default_targets());

        assert_eq!(controller.score(), 0);
        assert_eq!(controller.remaining(), 3);
    }

    #[test]
    fn test_segment_hit_through_target() {
        let mut controller = controller();

        // Шаг 5.0 перелетает мишень: обе точки дальше радиуса, отрезок — через центр
        let from = Vec3::new(12.0, 0.0, -12.0);
        let to = Vec3::new(18.0, 0.0, -18.0);
        assert!(from.distance(Vec3::new(15.0, 0.0, -15.0)) > 1.0);
        assert!(to.distance(Vec3::new(15.0, 0.0, -15.0)) > 1.0);

        let hits = controller.test_hit_segment(from, to, 1.0);

        assert_eq!(hits, vec![TargetId(1)]);
        assert_eq!(controller.score(), 1);
        assert_score_invariant(&controller);
    }

    #[test]
    fn test_segment_miss_beside_target() {
        let mut controller = controller();

        let hits = controller.test_hit_segment(
            Vec3::new(12.0, 3.0, -12.0),
            Vec3::new(18.0, 3.0, -18.0),
            1.0,
        );

        assert!(hits.is_empty());
        assert_eq!(controller.remaining(), 3);
    }

    #[test]
    fn test_segment_distance() {
        let point = Vec3::new(0.0, 2.0, 0.0);

        // Проекция внутри отрезка
        let inside = segment_distance(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), point);
        assert!((inside - 2.0).abs() < 1e-6);

        // Проекция за концом → расстояние до конца
        let beyond = segment_distance(Vec3::new(3.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO);
        assert!((beyond - 3.0).abs() < 1e-6);

        // Вырожденный отрезок = точка
        let degenerate = segment_distance(Vec3::ONE, Vec3::ONE, Vec3::ZERO);
        assert!((degenerate - 3.0_f32.sqrt()).abs() < 1e-6);
    }
}
