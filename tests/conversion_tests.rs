//! Integration tests for GeoJSON to SVG conversion

use geojson2svg::{
    convert, convert_str, render, AttributeRule, ConversionOptions, ConvertError, Document,
    SvgConfig, ViewportSpec,
};
use pretty_assertions::assert_eq;

fn options(width: u32, height: u32) -> ConversionOptions {
    ConversionOptions::new().with_viewport(ViewportSpec::new(width, height).unwrap())
}

/// Pull the `d` attribute out of a path element
fn path_data(element: &str) -> &str {
    let start = element.find("d=\"").expect("element has path data") + 3;
    let end = element[start..].find('"').expect("path data is closed");
    &element[start..start + end]
}

/// All numbers in path data, in order, arc radii and flags included
fn numbers(d: &str) -> Vec<f64> {
    d.split(|c: char| c.is_ascii_alphabetic() || c == ',' || c == ' ')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().expect("path data token is a number"))
        .collect()
}

const TWO_REGIONS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "id": "north",
            "properties": {"name": "North", "meta": {"code": "N1"}},
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[0, 5], [10, 5], [10, 10], [0, 10], [0, 5]],
                    [[2, 6], [2, 8], [4, 8], [4, 6], [2, 6]]
                ]
            }
        },
        {
            "type": "Feature",
            "id": "south",
            "properties": {"name": "South & Co"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0, 0], [10, 0], [10, 5], [0, 5], [0, 0]]]
            }
        }
    ]
}"#;

#[test]
fn test_one_element_per_feature_preserving_order() {
    let paths = convert_str(
        TWO_REGIONS,
        &options(100, 100).with_attribute(AttributeRule::dynamic("name", None)),
    )
    .unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].contains(r#"name="North""#));
    assert!(paths[1].contains(r#"name="South &amp; Co""#));
}

#[test]
fn test_shared_mapping_across_features() {
    let paths = convert_str(TWO_REGIONS, &options(100, 100)).unwrap();
    // The shared edge y=5 lands on the same pixel row in both features
    assert!(path_data(&paths[0]).starts_with("M0,50 L100,50"));
    assert!(path_data(&paths[1]).contains("L100,50 L0,50"));
}

#[test]
fn test_polygon_with_hole_has_two_closed_subpaths() {
    let paths = convert_str(TWO_REGIONS, &options(100, 100)).unwrap();
    let d = path_data(&paths[0]);
    let subpaths: Vec<&str> = d.split(" M").collect();
    assert_eq!(subpaths.len(), 2);
    assert!(subpaths.iter().all(|s| s.trim_end().ends_with('Z')));
    assert!(d.starts_with("M0,50"), "exterior ring comes first: {}", d);
}

#[test]
fn test_missing_nested_property_omits_attribute_on_that_feature_only() {
    let opts = options(100, 100).with_attribute(AttributeRule::dynamic("meta.code", None));
    let paths = convert_str(TWO_REGIONS, &opts).unwrap();
    assert!(paths[0].contains(r#"code="N1""#));
    assert!(!paths[1].contains("code="));
}

#[test]
fn test_static_attribute_on_every_element() {
    let rule = AttributeRule::parse_static("class:region").unwrap();
    let paths = convert_str(TWO_REGIONS, &options(100, 100).with_attribute(rule)).unwrap();
    assert!(paths.iter().all(|p| p.contains(r#"class="region""#)));
}

#[test]
fn test_feature_id_as_attribute() {
    let rule = AttributeRule::parse_dynamic("id:data-id").unwrap();
    let paths = convert_str(TWO_REGIONS, &options(100, 100).with_attribute(rule)).unwrap();
    assert!(paths[0].ends_with(r#" data-id="north"/>"#));
    assert!(paths[1].ends_with(r#" data-id="south"/>"#));
}

#[test]
fn test_point_circle_radius_and_center() {
    let opts = options(100, 100).with_point_radius(5.0).unwrap();
    let paths = convert_str(r#"{"type":"Point","coordinates":[0,0]}"#, &opts).unwrap();
    assert_eq!(paths.len(), 1);
    insta::assert_snapshot!(paths[0], @r#"<path d="M45,50 A5,5 0 1,1 55,50 A5,5 0 1,1 45,50 Z"/>"#);

    // Arc endpoints sit on the horizontal diameter through the center
    let d = path_data(&paths[0]);
    let n = numbers(d);
    // M x,y A rx,ry rotation large,sweep x,y
    let (left, right) = ((n[0], n[1]), (n[7], n[8]));
    assert_eq!(left.1, right.1);
    assert_eq!(((left.0 + right.0) / 2.0, left.1), (50.0, 50.0));
    assert_eq!((right.0 - left.0) / 2.0, 5.0);
}

#[test]
fn test_line_string_example() {
    let paths = convert_str(
        r#"{"type":"LineString","coordinates":[[0,0],[10,0]]}"#,
        &options(100, 50),
    )
    .unwrap();
    insta::assert_snapshot!(paths[0], @r#"<path d="M0,50 L100,50"/>"#);
}

#[test]
fn test_mapping_is_monotonic() {
    let source = r#"{"type":"LineString","coordinates":[[-3,-2],[-1,0.5],[0,1],[2.5,4],[7,10]]}"#;
    let paths = convert_str(source, &options(640, 480)).unwrap();
    let n = numbers(path_data(&paths[0]));
    let xs: Vec<f64> = n.iter().step_by(2).copied().collect();
    let ys: Vec<f64> = n.iter().skip(1).step_by(2).copied().collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    assert!(ys.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!((xs[0], ys[0]), (0.0, 480.0));
    assert_eq!((xs[4], ys[4]), (640.0, 0.0));
}

#[test]
fn test_vertical_line_collapses_x_only() {
    let paths = convert_str(
        r#"{"type":"LineString","coordinates":[[3,0],[3,10]]}"#,
        &options(100, 50),
    )
    .unwrap();
    assert_eq!(path_data(&paths[0]), "M0,50 L0,0");
}

#[test]
fn test_full_f64_range_has_finite_path_data() {
    let source = r#"{"type":"LineString","coordinates":[[-1e308,-1e308],[0,0],[1e308,1e308]]}"#;
    let paths = convert_str(source, &options(100, 100).with_precision(6)).unwrap();
    assert!(!paths[0].contains("NaN") && !paths[0].contains("inf"));
    assert_eq!(path_data(&paths[0]), "M0,100 L50,50 L100,0");
}

#[test]
fn test_precision_round_trip() {
    let source = r#"{"type":"LineString","coordinates":[[0,0],[1,1],[3,2],[7,3]]}"#;
    let full = convert_str(source, &options(1000, 700)).unwrap();
    let exact = numbers(path_data(&full[0]));
    for p in 0..5u32 {
        let rounded = convert_str(source, &options(1000, 700).with_precision(p)).unwrap();
        let approx = numbers(path_data(&rounded[0]));
        let tolerance = 0.5 * 10f64.powi(-(p as i32)) + 1e-9;
        for (a, e) in approx.iter().zip(&exact) {
            assert!((a - e).abs() <= tolerance, "{} vs {} at precision {}", a, e, p);
        }
    }
}

#[test]
fn test_precision_output_has_no_padding() {
    let source = r#"{"type":"LineString","coordinates":[[0,0],[3,3]]}"#;
    let paths = convert_str(source, &options(10, 10).with_precision(3)).unwrap();
    assert_eq!(path_data(&paths[0]), "M0,10 L10,0");
}

#[test]
fn test_geometry_collection_is_one_element() {
    let source = r#"{
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [0, 0]},
                {"type": "LineString", "coordinates": [[0, 0], [4, 4]]},
                {"type": "MultiPolygon", "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[3, 3], [4, 3], [4, 4], [3, 3]]]
                ]}
            ]
        }
    }"#;
    let paths = convert_str(source, &options(4, 4).with_point_radius(1.0).unwrap()).unwrap();
    assert_eq!(paths.len(), 1);
    let d = path_data(&paths[0]);
    assert_eq!(d.matches('M').count(), 4);
    assert!(d.starts_with("M-1,4 A1,1"));
}

#[test]
fn test_multipoint_is_one_element_with_subpaths() {
    let paths = convert_str(
        r#"{"type":"MultiPoint","coordinates":[[0,0],[1,1],[2,0]]}"#,
        &options(20, 10),
    )
    .unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(path_data(&paths[0]).matches('M').count(), 3);
}

#[test]
fn test_attribute_values_are_escaped() {
    let source = r#"{"type":"Feature","properties":{"label":"<b>\"x\" & y</b>","tags":["a\"b"]},
        "geometry":{"type":"Point","coordinates":[1,1]}}"#;
    let opts = options(10, 10)
        .with_attribute(AttributeRule::dynamic("label", None))
        .with_attribute(AttributeRule::dynamic("tags", None))
        .with_attribute(AttributeRule::literal("title", "1 < 2"));
    let paths = convert_str(source, &opts).unwrap();
    assert!(paths[0].contains(r#"label="&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;""#));
    assert!(paths[0].contains(r#"tags="[&quot;a\&quot;b&quot;]""#));
    assert!(paths[0].contains(r#"title="1 &lt; 2""#));
}

#[test]
fn test_structural_errors() {
    let opts = options(10, 10);
    assert!(matches!(
        convert_str(r#"{"coordinates":[0,0]}"#, &opts),
        Err(ConvertError::MalformedDocument { .. })
    ));
    assert!(matches!(
        convert_str(r#"{"type":"Sphere","coordinates":[0,0]}"#, &opts),
        Err(ConvertError::UnsupportedGeometry { kind }) if kind == "Sphere"
    ));
    assert!(matches!(
        convert_str(r#"{"type":"MultiLineString","coordinates":[]}"#, &opts),
        Err(ConvertError::EmptyGeometry)
    ));
    assert!(matches!(
        convert_str("not json", &opts),
        Err(ConvertError::Json(_))
    ));
}

#[test]
fn test_convert_is_reentrant() {
    let doc: Document = TWO_REGIONS.parse().unwrap();
    let a = convert(&doc, &options(100, 100)).unwrap();
    let b = convert(&doc, &options(200, 50)).unwrap();
    let c = convert(&doc, &options(100, 100)).unwrap();
    assert_eq!(a, c);
    assert_ne!(a, b);
}

#[test]
fn test_render_full_document() {
    let svg = render(
        r#"{"type":"LineString","coordinates":[[0,0],[10,0]]}"#,
        &options(100, 50),
        &SvgConfig::default(),
    )
    .unwrap();
    insta::assert_snapshot!(svg, @r#"
    <?xml version="1.0" encoding="UTF-8" standalone="no"?>
    <!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
    <svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50">
      <path d="M0,50 L100,50"/>
    </svg>
    "#);
}

#[test]
fn test_render_paths_only() {
    let svg = render(
        TWO_REGIONS,
        &options(100, 100),
        &SvgConfig::new().with_paths_only(true),
    )
    .unwrap();
    let lines: Vec<&str> = svg.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with("<path ")));
}
