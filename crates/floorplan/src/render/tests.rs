use super::style::Dash;
use super::*;
use crate::classify::MatchTolerance;
use crate::error::LoadError;
use crate::model::parse_house;

const ONE_DOOR: &str = r#"
house:
  floors:
    - name: Ground
      level: 0
      rooms:
        - id: box
          polygon: [[0, 0], [5, 0], [5, 5], [0, 5]]
          doors:
            - [[0, 0], [5, 0]]
"#;

const TWO_FLOORS: &str = r#"
house:
  metadata:
    name: Duplex
    dimensions: {width: 8, depth: 6}
  floors:
    - name: Ground
      level: 0
      rooms:
        - id: kitchen
          label: Kitchen & Dining
          polygon: [[0, 0], [4, 0], [4, 3], [0, 3]]
          windows:
            - [[4, 0], [0, 0]]
          no_walls:
            - [[4, 0], [4, 3]]
        - id: hall
          polygon: [[4, 0], [8, 0], [8, 3], [4, 3]]
        - id: stairs
          polygon: [[0, 3], [2, 3], [2, 6], [0, 6]]
          is_void: true
          doors:
            - [[0, 3], [2, 3]]
    - name: Upper
      level: 1
      rooms:
        - id: bedroom
          polygon: [[0, 0], [8, 0], [8, 6], [0, 6]]
"#;

#[test]
fn single_door_renders_one_brown_dotted_edge_and_three_walls() {
    let house = parse_house(ONE_DOOR).unwrap();
    let fig = render_house(&house, &RenderCfg::default()).unwrap();
    assert_eq!(fig.panels.len(), 1);
    let panel = &fig.panels[0];

    let doors: Vec<_> = panel
        .edges
        .iter()
        .filter(|e| e.layers.iter().any(|l| l.color == "saddlebrown" && l.dash != Dash::Solid))
        .collect();
    assert_eq!(doors.len(), 1);
    assert_eq!(doors[0].kind, EdgeKind::Door);

    let walls = panel
        .edges
        .iter()
        .filter(|e| e.layers.len() == 1 && e.layers[0].color == "black" && e.layers[0].dash == Dash::Solid)
        .count();
    assert_eq!(walls, 3);
    assert_eq!(panel.edges.len(), 4);

    let svg = fig.to_svg();
    assert_eq!(svg.matches("class=\"edge door\"").count(), 1);
    assert_eq!(svg.matches("class=\"edge wall\"").count(), 3);
}

#[test]
fn panels_titles_fills_and_legend() {
    let house = parse_house(TWO_FLOORS).unwrap();
    let cfg = RenderCfg::default();
    let fig = render_house(&house, &cfg).unwrap();

    assert_eq!(fig.title, "Floor plan: Duplex");
    assert_eq!((fig.width_px, fig.height_px), (1800, 1200));
    assert_eq!(fig.panels[0].title, "Ground (Level 0)");
    assert_eq!(fig.panels[1].title, "Upper (Level 1)");
    assert!(fig.panels[0].legend.is_none());
    let legend = fig.panels[1].legend.as_ref().unwrap();
    let order: Vec<_> = legend.entries.iter().map(|(k, _)| *k).collect();
    assert_eq!(order, EdgeKind::ALL.to_vec());

    let ground = &fig.panels[0];
    // normal rooms take the cycle in order, the void is orange
    assert_eq!(ground.fills[0].style.color, style::ROOM_CYCLE[0]);
    assert_eq!(ground.fills[1].style.color, style::ROOM_CYCLE[1]);
    assert_eq!(ground.fills[2].style, style::VOID_FILL);
    // cycle restarts on the next floor
    assert_eq!(fig.panels[1].fills[0].style.color, style::ROOM_CYCLE[0]);

    assert_eq!(ground.count(EdgeKind::Window), 1);
    assert_eq!(ground.count(EdgeKind::Open), 1);
    assert_eq!(ground.count(EdgeKind::VoidBoundary), 4);
    assert_eq!(ground.count(EdgeKind::Door), 0);
    assert_eq!(ground.count(EdgeKind::Wall), 6);

    // one midpoint dot for the window plus one marker per vertex
    assert_eq!(ground.markers.len(), 1 + 12);
    let kitchen = &ground.labels[0];
    assert_eq!(kitchen.text, "Kitchen & Dining");
    assert!((kitchen.at.x - 2.0).abs() < 1e-12 && (kitchen.at.y - 1.5).abs() < 1e-12);
    assert_eq!(ground.labels[1].text, "hall");
}

#[test]
fn plot_area_is_inverted_and_bounded_by_dimensions() {
    let house = parse_house(TWO_FLOORS).unwrap();
    let fig = render_house(&house, &RenderCfg::default()).unwrap();
    let vp = fig.panels[0].frame.viewport;
    assert_eq!((vp.x_min, vp.x_max, vp.y_min, vp.y_max), (-0.5, 8.5, -0.5, 6.5));
    let (_, y_top) = vp.to_px(Point2D::new(0.0, 0.0));
    let (_, y_bottom) = vp.to_px(Point2D::new(0.0, 6.0));
    assert!(y_top < y_bottom);
    // second panel sits to the right of the first
    assert!(fig.panels[1].plot_area().x > fig.panels[0].plot_area().right());
}

#[test]
fn svg_escapes_labels() {
    let house = parse_house(TWO_FLOORS).unwrap();
    let svg = render_house(&house, &RenderCfg::default()).unwrap().to_svg();
    assert!(svg.contains("Kitchen &amp; Dining"));
    assert!(svg.contains("Floor plan: Duplex"));
    assert!(svg.contains("Z (depth)"));
    assert_eq!(svg.matches("class=\"edge window\"").count(), 1);
    assert_eq!(svg.matches("class=\"legend\"").count(), 1);
}

#[test]
fn tolerance_setting_reaches_classification() {
    let text = ONE_DOOR.replace("[[0, 0], [5, 0]]", "[[0, 0], [5.0000001, 0]]");
    let house = parse_house(&text).unwrap();
    let exact = render_house(&house, &RenderCfg::default()).unwrap();
    assert_eq!(exact.panels[0].count(EdgeKind::Door), 0);

    let cfg = RenderCfg {
        tolerance: MatchTolerance::Within(1e-3),
        ..RenderCfg::default()
    };
    let loose = render_house(&house, &cfg).unwrap();
    assert_eq!(loose.panels[0].count(EdgeKind::Door), 1);
}

#[test]
fn inconsistent_input_is_an_error() {
    let house = parse_house("house:\n  floors: []\n").unwrap();
    assert!(matches!(
        render_house(&house, &RenderCfg::default()),
        Err(RenderError::NoFloors)
    ));

    let house = parse_house(
        "house:\n  floors:\n    - name: G\n      level: 0\n      rooms:\n        - {id: sliver, polygon: [[0, 0], [1, 1]]}\n",
    )
    .unwrap();
    match render_house(&house, &RenderCfg::default()) {
        Err(RenderError::DegeneratePolygon { room, points, .. }) => {
            assert_eq!(room, "sliver");
            assert_eq!(points, 2);
        }
        other => panic!("expected DegeneratePolygon, got {other:?}"),
    }
}

#[test]
fn plot_house_writes_png_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("house.yaml");
    std::fs::write(&input, ONE_DOOR).unwrap();
    let cfg = PlotCfg {
        input,
        output: dir.path().join("out/plan.png"),
        svg_output: Some(dir.path().join("out/plan.svg")),
        render: RenderCfg {
            dpi: 40.0,
            ..RenderCfg::default()
        },
    };
    let outcome = plot_house(&cfg).unwrap();
    let png = std::fs::read(&outcome.output).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!((outcome.width_px, outcome.height_px), (240, 320));
    assert!(outcome.svg_output.unwrap().exists());
    assert_eq!(outcome.summary.floors[0].rooms, 1);
}

#[test]
fn plot_house_with_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = PlotCfg {
        input: dir.path().join("missing.yaml"),
        output: dir.path().join("plan.png"),
        svg_output: None,
        render: RenderCfg::default(),
    };
    let err = plot_house(&cfg).unwrap_err();
    assert!(err.is_missing_input());
    assert!(matches!(err, PlotError::Load(LoadError::NotFound(_))));
    assert!(!cfg.output.exists());
}

#[test]
fn window_marker_sits_at_edge_midpoint() {
    let house = parse_house(TWO_FLOORS).unwrap();
    let fig = render_house(&house, &RenderCfg::default()).unwrap();
    let window = &fig.panels[0].markers[0];
    assert_eq!(window.style, style::edge_midpoint_marker(EdgeKind::Window).unwrap());
    assert_eq!(window.at, Point2D::new(2.0, 0.0));
}

#[test]
fn control_characters_in_labels_still_rasterize() {
    let text = ONE_DOOR.replace("id: box", "id: box\n          label: \"Hall\\vway\"");
    let house = parse_house(&text).unwrap();
    let cfg = RenderCfg {
        dpi: 20.0,
        ..RenderCfg::default()
    };
    let fig = render_house(&house, &cfg).unwrap();
    assert_eq!(fig.panels[0].labels[0].text, "Hall\u{b}way");
    assert!(fig.to_svg().contains(">Hallway<"));
    let pixmap = fig.rasterize().unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (120, 160));
}

#[test]
fn plot_house_refuses_svg_over_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("house.yaml");
    std::fs::write(&input, ONE_DOOR).unwrap();
    let out = dir.path().join("plan.svg");
    let cfg = PlotCfg {
        input,
        output: out.clone(),
        svg_output: Some(out.clone()),
        render: RenderCfg::default(),
    };
    match plot_house(&cfg) {
        Err(PlotError::Render(RenderError::OutputClash(path))) => assert_eq!(path, out),
        other => panic!("expected OutputClash, got {other:?}"),
    }
    assert!(!out.exists());
}
