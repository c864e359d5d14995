/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SurveyDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SurveyDataset │  Vec<StateRecord>, per-field extents
///   └───────────────┘
/// ```

pub mod loader;
pub mod model;
