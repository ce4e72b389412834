use map_measure::{measure, measure_closed, measure_lat_lngs, Coordinate, Error, Measurement, Path};

fn points(lat_lngs: &[(f64, f64)]) -> Vec<Coordinate> {
    lat_lngs
        .iter()
        .map(|&(lat, lng)| Coordinate::new(lat, lng).unwrap())
        .collect()
}

#[test]
fn empty_and_single_point() {
    assert_eq!(measure(&[]), Measurement { length: 0.0, area: 0.0 });
    assert_eq!(
        measure(&points(&[(39.95, -75.16)])),
        Measurement { length: 0.0, area: 0.0 }
    );
}

#[test]
fn two_points_are_symmetric() {
    let forward = measure(&points(&[(39.95, -75.16), (40.71, -74.0)]));
    let backward = measure(&points(&[(40.71, -74.0), (39.95, -75.16)]));

    assert_eq!(forward.area, 0.0);
    assert_eq!(backward.area, 0.0);
    assert!((forward.length - backward.length).abs() < 1e-6);
    // Philadelphia to New York is roughly 130 km.
    assert!(forward.length > 125_000.0 && forward.length < 135_000.0);
}

#[test]
fn one_degree_at_equator() {
    let m = measure(&points(&[(0.0, 0.0), (0.0, 1.0)]));
    assert!((m.length - 111_195.0).abs() < 1.0, "length = {}", m.length);
    assert_eq!(m.area, 0.0);
}

#[test]
fn one_degree_square() {
    let square = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let m = measure_closed(&square);

    assert!((m.area - 1.23e10).abs() / 1.23e10 < 0.01, "area = {}", m.area);
    assert!(
        (m.length - 4.0 * 111_195.0).abs() / (4.0 * 111_195.0) < 1e-3,
        "length = {}",
        m.length
    );
}

#[test]
fn rotation_and_reversal_keep_area() {
    let square = points(&[(10.0, 10.0), (10.0, 12.0), (11.0, 12.5), (11.5, 10.0)]);
    let expected = measure(&square).area;

    let mut rotated = square.clone();
    rotated.rotate_left(2);
    let mut reversed = square.clone();
    reversed.reverse();

    for other in [rotated, reversed] {
        let area = measure(&other).area;
        assert!((area - expected).abs() / expected < 1e-9);
    }
}

#[test]
fn invalid_input_names_the_value() {
    let err = measure_lat_lngs(&[(0.0, 0.0), (f64::NEG_INFINITY, 0.0)]).unwrap_err();
    assert_eq!(
        err,
        Error::NotFinite {
            value: f64::NEG_INFINITY
        }
    );
    assert_eq!(err.to_string(), "Coordinate value '-inf' is not a finite number");
}

#[test]
fn path_buffer_undo_flow() {
    let mut path = Path::new();
    for point in points(&[(0.0, 0.0), (0.0, 1.0), (0.0, 1.0), (1.0, 1.0)]) {
        path.push(point);
    }
    assert_eq!(path.len(), 3);
    assert!(path.measure().area > 0.0);

    path.pop();
    assert_eq!(path.measure().area, 0.0);
    assert_eq!(path.segment_lengths().len(), 1);
}
