use drift_engine::Simulation;

const SHAPES: &str = r##"[
    {"left": 40,  "top": 40,  "width": 120, "height": 120, "color": "#ff8fab"},
    {"left": 300, "top": 200, "width": 90,  "height": 90,  "color": "#8ecae6"},
    {"left": 520, "top": 80,  "width": 150, "height": 110, "color": "#ffb703"}
]"##;

#[test]
fn facade_smoke_run() {
    let mut sim = Simulation::with_seed(7);
    assert_eq!(sim.initialize(SHAPES, 800.0, 600.0).unwrap(), 3);
    assert!(sim.start());
    sim.enable_perf_metrics(true);

    for i in 0..120 {
        assert!(sim.frame(i as f64 * 16.67));
    }
    assert_eq!(sim.frame_count(), 120);
    assert_eq!(sim.transforms_len(), 9);
    assert!(sim.get_perf_stats().step_ms() >= 0.0);
    assert!(sim.transform_css(1).unwrap().starts_with("translate("));
}

#[test]
fn facade_effects_drain_as_json() {
    let mut sim = Simulation::with_seed(8);
    sim.initialize(SHAPES, 800.0, 600.0).unwrap();
    assert!(sim.pointer_enter(2, "mouse", 0.0).unwrap());

    let json = sim.drain_effects_json().unwrap();
    let bursts: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(bursts.as_array().map(|a| a.len()), Some(1));
    assert_eq!(bursts[0]["kind"], "hover");
    assert_eq!(sim.drain_effects_json().unwrap(), "[]");
}

#[test]
fn facade_page_flow() {
    let mut sim = Simulation::with_seed(9);
    sim.initialize(SHAPES, 800.0, 600.0).unwrap();
    sim.start();
    sim.switch_page("landing", "gallery", 0.0).unwrap();
    assert!(sim.paused());
    sim.frame(100.0);
    assert_eq!(sim.active_page().as_deref(), Some("gallery"));

    sim.set_gallery_cards(2);
    assert!(sim.reveal_card(0));
    assert!(!sim.reveal_card(0));
    assert_eq!(drift_engine::brush_stroke_dash(320.0), 320.0);
}

#[test]
fn facade_config_round_trips() {
    let sim = Simulation::with_config_json(r#"{"maxFlingSpeed": 12}"#).unwrap();
    let json = sim.config_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["maxFlingSpeed"], 12.0);
    assert_eq!(value["restitution"], 0.6);
}
