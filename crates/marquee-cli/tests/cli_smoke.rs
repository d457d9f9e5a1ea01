use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const HEADER: &str = "url,title,ratingValue,ratingCount,year,description,budget,gross,duration,genreList,countryList,castList,characterList,directorList";

fn marquee(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_marquee"))
        .args(args)
        .output()
        .expect("run marquee")
}

fn write_movies(dir: &Path) -> String {
    let path = dir.join("movies.csv");
    let body = format!(
        "{HEADER}\n\
         /t/1,Epic,8.0,10,1998,Long.,5,1000,242,['Drama'],['USA'],\"['Actor A', 'Actor B']\",[],['Steven Spielberg']\n\
         /t/2,Short,7.0,20,2001,Brief.,3,N/A,95,[],[],['Actor B'],[],['Someone Else']\n"
    );
    fs::write(&path, body).expect("write movies");
    path.display().to_string()
}

#[test]
fn analyze_writes_every_result_set() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let input = write_movies(dir.path());
    let out = dir.path().join("out");
    let output = marquee(&["analyze", "--input", &input, "--out", &out.display().to_string()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    for name in [
        "table.csv",
        "patience.csv",
        "director.csv",
        "screentime.csv",
        "activity.csv",
        "gross.csv",
        "report.json",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("total 242 minutes (~4h 2m)"), "{stdout}");

    let screentime = fs::read_to_string(out.join("screentime.csv")).expect("read");
    let mut lines = screentime.lines();
    assert_eq!(lines.next(), Some("rank,actor,total_duration"));
    assert_eq!(lines.next(), Some("1,Actor B,337"));
    assert_eq!(lines.next(), Some("2,Actor A,242"));

    let report: serde_json::Value =
        serde_json::from_slice(&fs::read(out.join("report.json")).expect("read")).expect("json");
    assert_eq!(report["provenance"]["input_format"], "csv");
    assert_eq!(report["actors"]["activity"][0]["movie_count"], 2);
}

#[test]
fn config_file_and_flags_override_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let input = write_movies(dir.path());
    let config = dir.path().join("marquee.yaml");
    fs::write(&config, "analysis:\n  director: someone else\n  top_n: 1\n").expect("config");
    let out = dir.path().join("out");
    let output = marquee(&[
        "analyze",
        "--input",
        &input,
        "--config",
        &config.display().to_string(),
        "--patience-min",
        "90",
        "--out",
        &out.display().to_string(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("patience: 2 movies"), "{stdout}");
    assert!(stdout.contains("1 movies by someone else"), "{stdout}");
    let gross = fs::read_to_string(out.join("gross.csv")).expect("read");
    assert_eq!(gross.lines().count(), 2);
}

#[test]
fn validate_reports_missing_columns() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("partial.csv");
    fs::write(&path, "title,duration\nHeat,170\n").expect("write");
    let output = marquee(&["validate", "--input", &path.display().to_string()]);
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("missing required columns: url, ratingValue"), "{stdout}");
}

#[test]
fn digest_is_stable_across_runs() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let input = write_movies(dir.path());
    let first = marquee(&["digest", "--input", &input]);
    let second = marquee(&["digest", "--input", &input]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout).trim().len(), 64);
}
