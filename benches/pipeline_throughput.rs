use criterion::{criterion_group, criterion_main, Criterion};
use marquee_core::{CellValue, RawTable, EXPECTED_COLUMNS};
use marquee_rank::{analyze, AnalysisOptions};

fn synthetic_table(movies: usize) -> RawTable {
    let mut raw = RawTable::new(EXPECTED_COLUMNS);
    for idx in 0..movies {
        let row = EXPECTED_COLUMNS
            .iter()
            .map(|column| match *column {
                "title" => CellValue::Text(format!("Movie {idx}")),
                "year" => CellValue::Integer(1950 + (idx % 70) as i64),
                "duration" => CellValue::Text(format!("{}", 90 + (idx * 7) % 160)),
                "gross" => CellValue::Float((idx * 1_000_003 % 97_000_000) as f64),
                "castList" => CellValue::Text(format!(
                    "['Actor {}', 'Actor {}', 'Actor {}']",
                    idx % 40,
                    (idx * 3) % 55,
                    (idx * 7) % 61
                )),
                "directorList" => CellValue::Text(if idx % 9 == 0 {
                    "Steven Spielberg".to_string()
                } else {
                    format!("Director {}", idx % 30)
                }),
                "genreList" => CellValue::text_list(["Drama", "History"]),
                _ => CellValue::Null,
            })
            .collect();
        raw.push_row(row);
    }
    raw
}

fn bench_pipeline(c: &mut Criterion) {
    let raw = synthetic_table(250);
    let opts = AnalysisOptions::default();
    c.bench_function("pipeline_throughput", |b| {
        b.iter(|| {
            let _ = analyze(&raw, &opts).expect("analyze");
        });
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
