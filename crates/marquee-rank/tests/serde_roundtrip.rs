use marquee_rank::{
    from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string, ActivityEntry,
    ActorRankings, AnalysisOptions, ScreentimeEntry,
};

#[test]
fn options_round_trip_yaml() {
    let opts = AnalysisOptions {
        patience_min_duration: 180.0,
        director: "Akira Kurosawa".into(),
        top_n: 5,
    };
    let yaml = to_yaml_string(&opts).expect("yaml");
    let decoded: AnalysisOptions = from_yaml_slice(yaml.as_bytes()).expect("decode");
    assert_eq!(decoded, opts);
}

#[test]
fn options_default_missing_keys() {
    let decoded: AnalysisOptions = from_yaml_slice(b"top_n: 3\n").expect("decode");
    assert_eq!(decoded.top_n, 3);
    assert_eq!(decoded.patience_min_duration, 220.0);
    assert_eq!(decoded.director, "Steven Spielberg");
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = from_yaml_slice::<AnalysisOptions>(b"top_n: [").expect_err("malformed");
    assert_eq!(err.info().code, "marquee.yaml.decode");
}

#[test]
fn rankings_round_trip_json() {
    let rankings = ActorRankings::default();
    let json = serde_json::to_string(&rankings).expect("json");
    let decoded: ActorRankings = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded, rankings);
}

#[test]
fn canonical_json_decodes_back() {
    let rankings = ActorRankings {
        screentime: vec![ScreentimeEntry {
            rank: 1,
            actor: "Actor B".into(),
            total_duration: None,
        }],
        activity: vec![ActivityEntry {
            rank: 1,
            actor: "Actor B".into(),
            movie_count: 2,
        }],
        gross: Vec::new(),
    };
    let bytes = to_canonical_json_bytes(&rankings).expect("canonical");
    let text = String::from_utf8(bytes.clone()).expect("utf8");
    assert!(text.find("\"activity\"") < text.find("\"screentime\""));
    let decoded: ActorRankings = from_json_slice(&bytes).expect("decode");
    assert_eq!(decoded, rankings);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = from_json_slice::<ActorRankings>(b"{\"gross\": [").expect_err("malformed");
    assert!(matches!(err, marquee_core::MarqueeError::Serde(_)));
}
