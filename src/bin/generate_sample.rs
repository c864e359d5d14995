use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// One row per state: name, abbr, poverty %, median age, median household
/// income, obesity %, smokes %, lacks-healthcare %.
const STATES: &[(&str, &str, f64, f64, u32, f64, f64, f64)] = &[
    ("Alabama", "AL", 20.1, 38.1, 42018, 32.4, 23.5, 11.7),
    ("Alaska", "AK", 12.4, 33.3, 73181, 29.8, 19.1, 14.9),
    ("Arizona", "AZ", 17.4, 36.9, 50255, 28.9, 14.1, 17.2),
    ("Arkansas", "AR", 18.7, 37.9, 41264, 34.5, 24.7, 11.4),
    ("California", "CA", 15.3, 35.9, 63636, 24.2, 11.6, 14.8),
    ("Colorado", "CO", 11.5, 36.1, 60629, 20.2, 15.7, 9.7),
    ("Connecticut", "CT", 10.5, 40.6, 70331, 25.3, 13.5, 6.9),
    ("Florida", "FL", 16.5, 41.6, 48825, 26.8, 17.1, 16.6),
    ("Georgia", "GA", 17.2, 36.2, 49620, 30.7, 17.7, 15.9),
    ("Idaho", "ID", 15.1, 36.4, 47583, 28.6, 14.3, 13.6),
    ("Illinois", "IL", 13.6, 37.6, 59196, 30.8, 15.1, 9.6),
    ("Iowa", "IA", 12.2, 38.2, 54570, 32.1, 18.1, 5.5),
    ("Kansas", "KS", 13.2, 36.5, 53906, 31.2, 17.4, 10.4),
    ("Maine", "ME", 13.4, 44.2, 51494, 30.1, 19.5, 9.4),
    ("Michigan", "MI", 15.8, 39.7, 51084, 31.4, 20.4, 7.8),
    ("Minnesota", "MN", 10.2, 37.9, 63488, 26.1, 14.5, 5.2),
    ("Mississippi", "MS", 21.9, 37.2, 35521, 35.6, 22.1, 13.6),
    ("New Hampshire", "NH", 8.2, 42.7, 70303, 26.3, 15.9, 7.1),
    ("New York", "NY", 15.7, 38.4, 60741, 25.6, 14.2, 8.5),
    ("Texas", "TX", 16.7, 34.3, 53207, 31.9, 14.4, 22.1),
    ("Utah", "UT", 11.3, 30.7, 62518, 24.5, 9.1, 12.1),
    ("Virginia", "VA", 11.2, 37.8, 66263, 29.2, 16.5, 10.3),
    ("West Virginia", "WV", 17.9, 41.9, 41751, 35.7, 25.8, 8.3),
    ("Wyoming", "WY", 11.1, 36.8, 58821, 27.7, 18.9, 11.8),
];

/// Serialized field order matches the column order the viewer expects.
#[derive(Serialize)]
struct Row {
    state: &'static str,
    abbr: &'static str,
    poverty: f64,
    age: f64,
    income: u32,
    obesity: f64,
    smokes: f64,
    healthcare: f64,
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/data/demographics.csv"));

    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut writer = csv::Writer::from_path(&output).context("creating output file")?;
    for &(state, abbr, poverty, age, income, obesity, smokes, healthcare) in STATES {
        writer.serialize(Row {
            state,
            abbr,
            poverty,
            age,
            income,
            obesity,
            smokes,
            healthcare,
        })?;
    }
    writer.flush()?;

    println!("Wrote {} states to {}", STATES.len(), output.display());
    Ok(())
}
