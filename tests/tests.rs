use corbit_vis::{
    parse_run, render_frame, resolve_styles, NVec3, ParseError, StoreError, ViewerConfig,
    PlaybackMode, TrajectoryStore,
};

use std::io::Cursor;

/// Parse a run straight from a string literal
fn parse_str(text: &str) -> Result<TrajectoryStore, ParseError> {
    parse_run(Cursor::new(text))
}

/// Build a run file with one position row per day for the worked
/// 2-day / 3-body / 2-planet example scenario
fn example_scenario() -> String {
    "\
# Simulation: test
*P
2 3 2 0.5
*X
0.1 0.2 0.3 1.1 1.2 1.3 2.1 2.2 2.3
0.4 0.5 0.6 1.4 1.5 1.6 2.4 2.5 2.6
"
    .to_string()
}

/// A fully populated run: 2 days, 2 bodies, position + velocity + energy
fn full_run() -> String {
    "\
*P
2 2 1 1.0
*V
1.0 2.0 2.0 0.0 3.0 4.0
0.0 0.0 1.0 2.0 2.0 1.0
*W
-1.5 0.5 -2.0
-1.4 0.6 -2.0
*X
0.0 0.0 0.0 1.0 0.0 0.0
0.1 0.0 0.0 1.0 0.1 0.0
"
    .to_string()
}

// ==================================================================================
// Parser tests
// ==================================================================================

#[test]
fn parses_example_scenario_in_file_order() {
    let store = parse_str(&example_scenario()).expect("valid run file");

    let trail = store.position_history(0, 2).expect("body 0 in range");
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0], NVec3::new(0.1, 0.2, 0.3));
    assert_eq!(trail[1], NVec3::new(0.4, 0.5, 0.6));

    // no axis reordering for the other bodies either
    let trail2 = store.position_history(2, 2).expect("body 2 in range");
    assert_eq!(trail2[1], NVec3::new(2.4, 2.5, 2.6));
}

#[test]
fn round_trip_shape_holds_for_every_body() {
    let store = parse_str(&full_run()).expect("valid run file");

    for body in 0..2 {
        let trail = store.position_history(body, 2).expect("in range");
        assert_eq!(trail.len(), 2, "body {body} trail truncated");
    }
}

#[test]
fn comments_are_skipped_everywhere() {
    let text = "\
# leading comment
*P
# comment inside parameters
2 1 1 1.0
*X
# comment inside data
0.0 0.0 1.0
0.0 0.0 2.0
";
    let store = parse_str(text).expect("comments must not disturb cursors");
    let trail = store.position_history(0, 2).expect("in range");
    assert_eq!(trail[1], NVec3::new(0.0, 0.0, 2.0));
}

#[test]
fn unknown_sections_are_inert() {
    // the simulator also writes a *B body section; the viewer ignores it
    let text = "\
*P
1 1 1 1.0
*B
sun #ffcc00 0 1.0 0.0 0.0
*X
1.0 2.0 3.0
";
    let store = parse_str(text).expect("*B lines must be read and dropped");
    assert_eq!(
        store.position_history(0, 1).expect("in range")[0],
        NVec3::new(1.0, 2.0, 3.0)
    );
}

#[test]
fn repeated_section_marker_resets_only_that_cursor() {
    let text = "\
*P
2 1 1 1.0
*X
1.0 2.0 3.0
4.0 5.0 6.0
*X
7.0 8.0 9.0
";
    let store = parse_str(text).expect("valid run file");
    let trail = store.position_history(0, 2).expect("in range");
    // the second *X block restarts at day 0; day 1 keeps the earlier row
    assert_eq!(trail[0], NVec3::new(7.0, 8.0, 9.0));
    assert_eq!(trail[1], NVec3::new(4.0, 5.0, 6.0));
}

#[test]
fn data_before_header_is_fatal() {
    let text = "\
*V
1.0 2.0 3.0
*P
1 1 1 1.0
";
    let err = parse_str(text).expect_err("shapes are undefined before *P");
    assert!(matches!(err, ParseError::HeaderMissing { section: 'V', .. }));
}

#[test]
fn missing_header_entirely_is_fatal() {
    let err = parse_str("# nothing but comments\n").expect_err("no *P at all");
    assert!(matches!(err, ParseError::NoHeader));
}

#[test]
fn wrong_token_count_is_fatal() {
    let text = "\
*P
1 2 1 1.0
*X
1.0 2.0 3.0
";
    let err = parse_str(text).expect_err("2 bodies need 6 tokens per row");
    assert!(matches!(
        err,
        ParseError::TokenCount {
            section: 'X',
            expected: 6,
            found: 3,
            ..
        }
    ));
}

#[test]
fn extra_rows_overflow_the_shape() {
    let text = "\
*P
1 1 1 1.0
*W
1.0 2.0 3.0
4.0 5.0 6.0
";
    let err = parse_str(text).expect_err("n_days reserves a single energy row");
    assert!(matches!(
        err,
        ParseError::ShapeOverflow {
            section: 'W',
            n_days: 1,
            ..
        }
    ));
}

#[test]
fn malformed_number_is_fatal() {
    let text = "\
*P
1 1 1 1.0
*X
1.0 abc 3.0
";
    let err = parse_str(text).expect_err("tokens must all parse");
    assert!(matches!(err, ParseError::Number { .. }));
}

#[test]
fn header_invariants_are_checked() {
    let err = parse_str("*P\n5 2 3 1.0\n").expect_err("more planets than bodies");
    assert!(matches!(err, ParseError::BadHeader { .. }));

    let err = parse_str("*P\n0 2 1 1.0\n").expect_err("zero days");
    assert!(matches!(err, ParseError::BadHeader { .. }));
}

// ==================================================================================
// Trajectory store tests
// ==================================================================================

#[test]
fn velocity_norm_invariant() {
    let store = parse_str(&full_run()).expect("valid run file");

    // day 0, body 0: (1, 2, 2) -> 3; day 1, body 1: (2, 2, 1) -> 3
    assert!((store.velocity_magnitude(0, 0).expect("in range") - 3.0).abs() < 1e-12);
    assert!((store.velocity_magnitude(0, 1).expect("in range") - 5.0).abs() < 1e-12);
    assert!((store.velocity_magnitude(1, 1).expect("in range") - 3.0).abs() < 1e-12);
}

#[test]
fn reindex_preserves_values_per_body() {
    let store = parse_str(&example_scenario()).expect("valid run file");

    // body-major reads must return exactly the day-major file values
    let expected = [
        [(0.1, 0.2, 0.3), (0.4, 0.5, 0.6)],
        [(1.1, 1.2, 1.3), (1.4, 1.5, 1.6)],
        [(2.1, 2.2, 2.3), (2.4, 2.5, 2.6)],
    ];
    for (body, days) in expected.iter().enumerate() {
        let trail = store.position_history(body, 2).expect("in range");
        for (day, &(x, y, z)) in days.iter().enumerate() {
            assert_eq!(trail[day], NVec3::new(x, y, z), "body {body} day {day}");
        }
    }
}

#[test]
fn energy_rows_are_stored_verbatim() {
    let store = parse_str(&full_run()).expect("valid run file");

    assert_eq!(store.energy_at(0).expect("in range"), [-1.5, 0.5, -2.0]);
    assert_eq!(store.energy_at(1).expect("in range"), [-1.4, 0.6, -2.0]);
}

#[test]
fn out_of_range_reads_are_rejected_not_clamped() {
    let store = parse_str(&full_run()).expect("valid run file");

    // body index equal to n_bodies
    let err = store.position_history(2, 1).expect_err("body 2 of 2");
    assert!(matches!(
        err,
        StoreError::IndexOutOfRange { what: "body", index: 2, len: 2 }
    ));

    // prefix length past the end of the run
    let err = store.position_history(0, 3).expect_err("3 of 2 days");
    assert!(matches!(err, StoreError::IndexOutOfRange { what: "day", .. }));

    assert!(store.velocity_magnitude(2, 0).is_err());
    assert!(store.energy_at(2).is_err());
}

#[test]
fn short_files_underfill_with_zeros() {
    // one row supplied for a 2-day run: day 1 stays at the origin
    let text = "\
*P
2 1 1 1.0
*X
1.0 1.0 1.0
";
    let store = parse_str(text).expect("short files load");
    let trail = store.position_history(0, 2).expect("in range");
    assert_eq!(trail[1], NVec3::zeros());
}

// ==================================================================================
// Naming / styling tests
// ==================================================================================

#[test]
fn naming_partition_planets_then_probes() {
    let styles = resolve_styles(5, 3);
    let names: Vec<&str> = styles.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["sun", "mercury", "venus", "probe0", "probe1"]);
}

#[test]
fn planet_names_fall_back_past_the_canonical_list() {
    let styles = resolve_styles(12, 12);
    assert_eq!(styles[9].name, "pluto");
    assert_eq!(styles[10].name, "planet10");
    assert_eq!(styles[11].name, "planet11");
}

#[test]
fn probes_get_the_muted_grayscale_palette() {
    let styles = resolve_styles(5, 2);

    // probes are gray: equal channels, white first, darkening with index
    let probes = &styles[2..];
    for style in probes {
        let [r, g, b] = style.color;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
    assert_eq!(probes[0].color, [1.0, 1.0, 1.0]);
    assert!(probes[2].color[0] < probes[1].color[0]);
    assert!(probes[1].color[0] < probes[0].color[0]);

    // planets are not gray
    let [r, g, b] = styles[0].color;
    assert!(r != g || g != b);
}

#[test]
fn every_body_gets_exactly_one_style() {
    assert_eq!(resolve_styles(25, 10).len(), 25);
    assert_eq!(resolve_styles(1, 1).len(), 1);
    assert_eq!(resolve_styles(0, 0).len(), 0);
}

// ==================================================================================
// Frame derivation tests
// ==================================================================================

#[test]
fn frame_render_is_idempotent() {
    let store = parse_str(&full_run()).expect("valid run file");
    let styles = resolve_styles(2, 1);

    let first = render_frame(&store, &styles, 1);
    let second = render_frame(&store, &styles, 1);
    assert_eq!(first, second);
}

#[test]
fn frame_trails_are_prefixes_and_markers_trail_ends() {
    let store = parse_str(&full_run()).expect("valid run file");
    let styles = resolve_styles(2, 1);

    let frame = render_frame(&store, &styles, 2);
    assert_eq!(frame.counter, "t = 2 d");
    for body in &frame.bodies {
        assert_eq!(body.trail.len(), 2);
        assert_eq!(body.marker, body.trail.last().copied());
    }
    assert_eq!(frame.bodies[0].label, "sun");
    assert_eq!(frame.bodies[1].label, "probe0");
}

#[test]
fn day_zero_frame_has_no_geometry() {
    let store = parse_str(&full_run()).expect("valid run file");
    let styles = resolve_styles(2, 1);

    let frame = render_frame(&store, &styles, 0);
    for body in &frame.bodies {
        assert!(body.trail.is_empty());
        assert!(body.marker.is_none());
    }
}

#[test]
fn overshooting_days_are_clamped_not_propagated() {
    let store = parse_str(&full_run()).expect("valid run file");
    let styles = resolve_styles(2, 1);

    let frame = render_frame(&store, &styles, 99);
    assert_eq!(frame.day, 2);
    assert_eq!(frame, render_frame(&store, &styles, 2));
}

// ==================================================================================
// Viewer configuration tests
// ==================================================================================

#[test]
fn config_defaults_give_a_static_top_down_view() {
    let config = ViewerConfig::default();
    assert_eq!(config.playback_mode(), PlaybackMode::Static);
    assert_eq!(config.axis_limit, 1.0);
    assert_eq!(config.camera.elevation, 90.0);
    assert_eq!(config.camera.azimuth, 0.0);
}

#[test]
fn partial_yaml_overrides_only_named_fields() {
    let config: ViewerConfig =
        serde_yaml::from_str("mode: \"animate\"\ndays_per_second: 5.0\n").expect("valid yaml");
    assert_eq!(config.playback_mode(), PlaybackMode::Animating);
    assert_eq!(config.days_per_second, 5.0);
    // untouched fields keep their defaults
    assert_eq!(config.axis_limit, 1.0);
}
