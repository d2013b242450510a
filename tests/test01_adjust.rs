use golf_yardage::adjust::{ConditionInput, Lie, adjust, compute, lie_penalty};

#[test]
fn test01_neutral_conditions_leave_distance_alone() {
    assert_eq!(compute(150.0, 0.0, 0.0, 0.0, "Fairway"), 150.0);
    assert_eq!(adjust(&ConditionInput::calm(150.0)).adjusted_distance, 150.0);
}

#[test]
fn test01_tailwind_and_headwind_scale_differently() {
    assert_eq!(compute(150.0, 10.0, 0.0, 0.0, "Fairway"), 157.0);
    assert_eq!(compute(150.0, 10.0, 180.0, 0.0, "Fairway"), 145.0);
    // a negative speed is a headwind from the same bearing
    assert_eq!(compute(150.0, -10.0, 0.0, 0.0, "Fairway"), 145.0);
    // crosswind does nothing
    assert_eq!(compute(150.0, 10.0, 90.0, 0.0, "Fairway"), 150.0);
}

#[test]
fn test01_lie_penalty_scales_with_raw_distance() {
    assert_eq!(compute(100.0, 0.0, 0.0, 0.0, "Bunker"), 112.0);
    assert_eq!(compute(200.0, 0.0, 0.0, 0.0, "Light Rough"), 210.0);
    assert_eq!(compute(100.0, 0.0, 0.0, 0.0, "Heavy Rough"), 110.0);
    assert_eq!(compute(100.0, 0.0, 0.0, 0.0, "Fringe"), 102.0);
}

#[test]
fn test01_unknown_lie_fails_open() {
    for lie in ["Cart Path", "", "water", "Fairway!"] {
        assert_eq!(lie_penalty(lie), 0.0, "{lie}");
        assert_eq!(compute(150.0, 0.0, 0.0, 0.0, lie), 150.0, "{lie}");
    }
}

#[test]
fn test01_other_spellings_of_a_lie_fail_open() {
    assert_eq!(compute(100.0, 0.0, 0.0, 0.0, "bunker"), 100.0);
    assert_eq!(compute(100.0, 0.0, 0.0, 0.0, "B U N K E R"), 100.0);
    assert_eq!(lie_penalty("bunker"), 0.0);
    assert_eq!(lie_penalty("light_rough"), 0.0);
    assert_eq!(lie_penalty("lightrough"), 0.0);
}

#[test]
fn test01_all_adjustments_combine() {
    let input = ConditionInput {
        raw_distance: 160.0,
        wind_speed: 10.0,
        wind_angle_deg: 180.0,
        elevation_ft: 20.0,
        lie: Lie::Rough,
    };
    // 160 + 6 - 5 + 11.2
    assert_eq!(adjust(&input).adjusted_distance, 172.2);
    assert_eq!(compute(160.0, 10.0, 180.0, 20.0, "Rough"), 172.2);
}

#[test]
fn test01_downhill_subtracts() {
    assert_eq!(compute(150.0, 0.0, 0.0, -30.0, "Fairway"), 141.0);
}

#[test]
fn test01_result_has_one_decimal() {
    // 150 + 10 * cos(45°) * 0.7 = 154.9497...
    assert_eq!(compute(150.0, 10.0, 45.0, 0.0, "Fairway"), 154.9);
}
