//! Integration tests for timeline unification over on-disk fixtures.

use detview::dataset::{Dataset, Source};
use detview::timeline::Timeline;

use super::helpers::{fixture_pair, FIXTURE_FRAMES};

#[test]
fn unified_length_equals_distinct_union() {
    let (dir, image_path, radar_path) = fixture_pair();
    let image = Dataset::from_path(Source::Image, &image_path).unwrap();
    let radar = Dataset::from_path(Source::Radar, &radar_path).unwrap();

    let timeline = Timeline::unify(&image, &radar);
    assert_eq!(timeline.frame_count(), FIXTURE_FRAMES);

    // Ties collapse: both streams contain 15:53:39 and 15:53:40.
    assert_eq!(image.len() + radar.len(), 10);

    drop(dir);
}

#[test]
fn every_record_gets_the_rank_of_its_instant() {
    let (dir, image_path, radar_path) = fixture_pair();
    let image = Dataset::from_path(Source::Image, &image_path).unwrap();
    let radar = Dataset::from_path(Source::Radar, &radar_path).unwrap();
    let timeline = Timeline::unify(&image, &radar);

    for dataset in [&image, &radar] {
        let indexed = timeline.index(dataset);
        assert_eq!(indexed.records().len(), dataset.len());
        for (raw, idx) in dataset.records().iter().zip(indexed.records()) {
            // Round-trip: step -> instant -> step.
            assert_eq!(timeline.instant_at(idx.step), Some(raw.time));
            assert_eq!(timeline.step_of(raw.time), Some(idx.step));
        }
    }

    drop(dir);
}

#[test]
fn steps_are_contiguous_from_zero() {
    let (dir, image_path, radar_path) = fixture_pair();
    let image = Dataset::from_path(Source::Image, &image_path).unwrap();
    let radar = Dataset::from_path(Source::Radar, &radar_path).unwrap();
    let timeline = Timeline::unify(&image, &radar);

    let mut seen: Vec<usize> = timeline
        .index(&image)
        .records()
        .iter()
        .chain(timeline.index(&radar).records())
        .map(|p| p.step)
        .collect();
    seen.sort_unstable();
    seen.dedup();

    // Every step in [0, frame_count) is hit by at least one record.
    assert_eq!(seen, (0..FIXTURE_FRAMES).collect::<Vec<_>>());

    drop(dir);
}
