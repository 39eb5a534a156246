use super::{author, uniform_rows};
use crate::chart::{INNER_RADIUS, area_encoded_radius, layout_chart_slices};
use crate::{Error, chart};
use asterplot_core::TopicRow;
use asterplot_core::topics::{LOW_VOLUME_COLOR, TOPIC_COLORS, TOPIC_COUNT};
use asterplot_core::University;
use std::f64::consts::{PI, TAU};

#[test]
fn every_chart_has_one_slice_per_topic() {
    let a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    let slices = layout_chart_slices(&a, &uniform_rows()).unwrap();
    assert_eq!(slices.len(), TOPIC_COUNT);
}

#[test]
fn slice_angles_cover_the_full_circle() {
    let a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    let slices = layout_chart_slices(&a, &uniform_rows()).unwrap();

    assert!(slices[0].start_angle.abs() < 1e-12);
    for pair in slices.windows(2) {
        assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
    }
    let last = slices.last().unwrap();
    assert!((last.end_angle - TAU).abs() < 1e-9);
}

#[test]
fn weights_need_not_be_normalized() {
    // Weights 3/1 divide the circle 3:1 no matter their absolute scale.
    let rows = vec![
        TopicRow {
            topic: 0,
            weight: 3.0,
        },
        TopicRow {
            topic: 1,
            weight: 1.0,
        },
    ];
    let mut a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    a.scores.truncate(2);
    let slices = layout_chart_slices(&a, &rows).unwrap();
    assert!((slices[0].end_angle - slices[0].start_angle - 0.75 * TAU).abs() < 1e-12);
    assert!((slices[1].end_angle - slices[1].start_angle - 0.25 * TAU).abs() < 1e-12);
}

#[test]
fn outer_radius_encodes_area_not_radius() {
    // theta = pi, raw score 50 (fraction 0.5) => area 50, r = sqrt(area / (theta/2)).
    let theta = PI;
    let r = area_encoded_radius(theta, 0.5) - INNER_RADIUS;
    assert!(((theta / 2.0) * r * r - 50.0).abs() < 1e-9);

    let expected = (50.0 / (theta / 2.0)).sqrt();
    assert!((r - expected).abs() < 1e-12);
}

#[test]
fn typical_scores_stay_inside_the_outline_circle() {
    // A narrow slice with a strong score: weight 6 of 100, raw score 60.
    let theta = 0.06 * TAU;
    let outer = area_encoded_radius(theta, 0.6);
    assert!((outer - (INNER_RADIUS + (60.0 / (theta / 2.0)).sqrt())).abs() < 1e-9);
    assert!(outer < chart::CHART_RADIUS);

    // Full-width slice at the maximum score reaches area 100 exactly.
    let r = area_encoded_radius(TAU, 1.0) - INNER_RADIUS;
    assert!(((TAU / 2.0) * r * r - 100.0).abs() < 1e-9);
}

#[test]
fn zero_score_collapses_to_the_inner_radius() {
    assert_eq!(area_encoded_radius(PI, 0.0), INNER_RADIUS);
    assert_eq!(area_encoded_radius(0.0, 0.5), INNER_RADIUS);
}

#[test]
fn low_volume_authors_are_all_grey() {
    let a = author("jean", "Jean Paul Sartre", University::Ucl, true, 0.5);
    let slices = layout_chart_slices(&a, &uniform_rows()).unwrap();
    assert!(slices.iter().all(|s| s.fill == LOW_VOLUME_COLOR));
}

#[test]
fn regular_authors_use_the_topic_palette() {
    let a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    let slices = layout_chart_slices(&a, &uniform_rows()).unwrap();
    for slice in &slices {
        assert_eq!(slice.fill, TOPIC_COLORS[slice.topic]);
    }
}

#[test]
fn zero_weight_slice_stays_in_the_layout() {
    let mut rows = uniform_rows();
    rows[3].weight = 0.0;
    let a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    let slices = layout_chart_slices(&a, &rows).unwrap();
    assert_eq!(slices.len(), TOPIC_COUNT);
    let s = &slices[3];
    assert_eq!(s.start_angle, s.end_angle);
    assert_eq!(s.outer_radius, INNER_RADIUS);
}

#[test]
fn score_count_mismatch_is_an_error() {
    let mut a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    a.scores.pop();
    let err = layout_chart_slices(&a, &uniform_rows()).unwrap_err();
    assert!(matches!(err, Error::ScoreCount { .. }));
}

#[test]
fn all_zero_weights_is_an_error() {
    let rows: Vec<TopicRow> = (0..TOPIC_COUNT)
        .map(|topic| TopicRow { topic, weight: 0.0 })
        .collect();
    let a = author("ada", "Ada Lovelace", University::Cambridge, false, 0.5);
    let err = layout_chart_slices(&a, &rows).unwrap_err();
    assert!(matches!(err, Error::ZeroWeightTotal));
}

#[test]
fn inner_radius_is_half_the_chart_radius() {
    assert_eq!(chart::INNER_RADIUS, 0.5 * chart::CHART_RADIUS);
    assert_eq!(chart::CHART_RADIUS, 45.0);
}
