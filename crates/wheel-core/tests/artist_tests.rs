// Scroll offset -> artist bucket mapping.

use std::f64::consts::{FRAC_PI_2, TAU};
use wheel_core::artist::{angle_for_scroll, bucket_for_angle};
use wheel_core::constants::ROTATION_RATE;
use wheel_core::{Artist, ArtistSelector, PatternRule, ARTIST_TABLE};

fn offset_for_bucket(bucket: usize) -> f64 {
    bucket as f64 * FRAC_PI_2 / ROTATION_RATE
}

#[test]
fn angle_stays_in_one_turn() {
    for offset in [0.0, 1.0, 5000.0, 123_456.0, 1e7] {
        let a = angle_for_scroll(offset, ROTATION_RATE);
        assert!((0.0..TAU).contains(&a), "angle {a} for offset {offset}");
    }
}

#[test]
fn bucket_mapping_is_periodic() {
    let selector = ArtistSelector::new(ROTATION_RATE);
    let period = selector.period();
    assert!((period - TAU / ROTATION_RATE).abs() < 1e-9);
    for offset in [0.0, 100.0, 2000.0, 4500.0, 7000.0, 10_000.0] {
        let a = angle_for_scroll(offset, ROTATION_RATE);
        let b = angle_for_scroll(offset + period, ROTATION_RATE);
        let diff = (a - b).abs();
        assert!(diff < 1e-6 || (TAU - diff) < 1e-6, "{offset}: {a} vs {b}");
        assert_eq!(
            selector.bucket_for_scroll(offset),
            selector.bucket_for_scroll(offset + period)
        );
        assert_eq!(
            selector.bucket_for_scroll(offset),
            selector.bucket_for_scroll(offset + 3.0 * period)
        );
    }
}

#[test]
fn buckets_round_to_nearest_quarter_turn() {
    assert_eq!(bucket_for_angle(0.0), 0);
    assert_eq!(bucket_for_angle(FRAC_PI_2 * 0.49), 0);
    assert_eq!(bucket_for_angle(FRAC_PI_2 * 0.51), 1);
    assert_eq!(bucket_for_angle(FRAC_PI_2 * 2.0), 2);
    assert_eq!(bucket_for_angle(FRAC_PI_2 * 3.2), 3);
    // just short of a full turn rounds to 4, which wraps to 0
    assert_eq!(bucket_for_angle(TAU - 0.01), 0);
}

#[test]
fn table_order_is_laura_agnes_kayak_rosa() {
    assert_eq!(
        ARTIST_TABLE,
        [Artist::Laura, Artist::Agnes, Artist::Kayak, Artist::Rosa]
    );
    let selector = ArtistSelector::new(ROTATION_RATE);
    for (i, artist) in ARTIST_TABLE.iter().enumerate() {
        assert_eq!(Artist::from_bucket(selector.bucket_for_scroll(offset_for_bucket(i))), *artist);
    }
}

#[test]
fn on_scroll_emits_only_on_bucket_change() {
    let mut selector = ArtistSelector::new(ROTATION_RATE);
    assert_eq!(selector.current(), Artist::Laura);
    assert_eq!(selector.on_scroll(0.0), None);
    assert_eq!(selector.on_scroll(500.0), None);

    let agnes = offset_for_bucket(1);
    assert_eq!(selector.on_scroll(agnes), Some(Artist::Agnes));
    assert_eq!(selector.on_scroll(agnes), None);
    assert_eq!(selector.on_scroll(agnes + 10.0), None);
    assert_eq!(selector.bucket(), 1);

    assert_eq!(selector.on_scroll(offset_for_bucket(2)), Some(Artist::Kayak));
    assert_eq!(selector.on_scroll(offset_for_bucket(3)), Some(Artist::Rosa));
    assert_eq!(selector.on_scroll(offset_for_bucket(4)), Some(Artist::Laura));
}

#[test]
fn each_artist_has_a_two_colour_palette_and_rule() {
    assert_eq!(Artist::Kayak.rule(), PatternRule::FixedVerticalSplit);
    assert_eq!(Artist::Agnes.rule(), PatternRule::RandomStripes);
    assert_eq!(Artist::Laura.rule(), PatternRule::GlobalShift);
    assert_eq!(Artist::Rosa.rule(), PatternRule::GlobalShift);

    assert_eq!(Artist::Laura.palette().colors()[0].to_u8(), [0xF1, 0x3D, 0x05]);
    assert_eq!(Artist::Rosa.palette().colors()[1].to_u8(), [0xDD, 0xDD, 0xE2]);
    assert_eq!(
        Artist::Agnes.palette().colors()[1],
        Artist::Kayak.palette().colors()[0]
    );
}
