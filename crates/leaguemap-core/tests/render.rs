use approx::assert_relative_eq;
use leaguemap_core::loader::default_dataset_path;
use leaguemap_core::{
    parse_collection, render_file, LeagueMap, MapBuilder, MapStats, PlayerSearch, TeamPalette,
    FALLBACK_COLOR, UNKNOWN_CITY,
};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn build(json: &str) -> LeagueMap {
    MapBuilder::new()
        .build(parse_collection(json).expect("valid GeoJSON"))
        .expect("map builds")
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("leaguemap-it-{name}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn same_city_different_teams_share_one_cluster() {
    let map = build(
        r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[35.21,31.77]},
         "properties":{"Name":"First","City":"Jerusalem","Age":25,"Position":"Guard","Team":"hapoel jerusalem"}},
        {"type":"Feature","geometry":{"type":"Point","coordinates":[35.22,31.78]},
         "properties":{"Name":"Second","City":"Jerusalem","Age":30,"Position":"Center","Team":"Some Unlisted Club"}}
    ]}"#,
    );

    assert_eq!(map.cities().len(), 1);
    let layer = map.city("Jerusalem").unwrap();
    assert_eq!(layer.len(), 2);
    assert_eq!(layer.markers[0].color(), "darkred");
    assert_eq!(layer.markers[1].color(), FALLBACK_COLOR);
}

#[test]
fn coordinates_are_swapped_into_lat_lng() {
    let map = build(
        r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[34.78,32.09]},
         "properties":{"Name":"P","City":"Tel Aviv"}}
    ]}"#,
    );
    let marker = &map.city("Tel Aviv").unwrap().markers[0];
    assert_relative_eq!(marker.location.lat, 32.09);
    assert_relative_eq!(marker.location.lng, 34.78);
}

#[test]
fn missing_city_goes_to_unknown_bucket() {
    let map = build(
        r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[34.78,32.09]},
         "properties":{"Name":"Nomad","Team":"Hapoel Haifa"}}
    ]}"#,
    );
    let layer = map.city(UNKNOWN_CITY).unwrap();
    assert_eq!(layer.len(), 1);
    assert_eq!(layer.markers[0].color(), "red");
    assert_eq!(layer.markers[0].popup, "Nomad, Unknown City, ,  - Hapoel Haifa");
}

#[test]
fn marker_and_overlay_colors_agree() {
    let map = MapBuilder::new()
        .build_from_path(default_dataset_path())
        .unwrap();
    let palette = TeamPalette::default();

    // Every feature in the bundled dataset is a point, so players and
    // overlay features line up one to one.
    for (index, player) in map.players().iter().enumerate() {
        let expected = palette.color_for(&player.team);
        assert_eq!(map.overlay().style_of(index).unwrap().color, expected);
    }

    for layer in map.cities() {
        for marker in &layer.markers {
            let player = map.find_players(&marker.tooltip)[0];
            assert_eq!(marker.color(), palette.color_for(&player.team));
        }
    }
}

#[test]
fn grouping_partitions_points_by_city() {
    let map = MapBuilder::new()
        .build_from_path(default_dataset_path())
        .unwrap();

    let total: usize = map.cities().iter().map(|c| c.len()).sum();
    assert_eq!(total, map.players().len());

    let distinct: HashSet<_> = map.players().iter().map(|p| p.city.as_str()).collect();
    assert_eq!(distinct.len(), map.cities().len());

    for layer in map.cities() {
        let in_city = map.players().iter().filter(|p| p.city == layer.name).count();
        assert_eq!(in_city, layer.len());
    }
}

#[test]
fn empty_collection_still_produces_a_document() {
    let dir = scratch("empty");
    let input = dir.join("empty.geojson");
    let output = dir.join("index.html");
    fs::write(&input, r#"{"type":"FeatureCollection","features":[]}"#).unwrap();

    let stats = render_file(&input, &output).unwrap();
    assert_eq!(stats, MapStats::default());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#""cities":[]"#));
    assert!(html.contains(r#""features":[]"#));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rendering_twice_is_identical() {
    let dir = scratch("idempotent");
    let first = dir.join("first.html");
    let second = dir.join("second.html");

    let a = render_file(default_dataset_path(), &first).unwrap();
    let b = render_file(default_dataset_path(), &second).unwrap();

    assert_eq!(a, b);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn bundled_dataset_layout() {
    let map = MapBuilder::new()
        .build_from_path(default_dataset_path())
        .unwrap();
    let stats = map.stats();
    assert_eq!(stats.features, 14);
    assert_eq!(stats.markers, 14);
    assert_eq!(stats.cities, 12);
    assert_eq!(stats.skipped, 0);
    assert_eq!(map.city("Tel Aviv").unwrap().len(), 2);
}

#[test]
fn failed_build_leaves_no_output() {
    let dir = scratch("failure");
    let input = dir.join("broken.geojson");
    let output = dir.join("index.html");
    fs::write(
        &input,
        r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[34.78,32.09]},"properties":{"City":"Haifa"}}
    ]}"#,
    )
    .unwrap();

    assert!(render_file(&input, &output).is_err());
    assert!(!output.exists());
    fs::remove_dir_all(&dir).ok();
}
