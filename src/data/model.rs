// ---------------------------------------------------------------------------
// StateRecord – one row of the survey table
// ---------------------------------------------------------------------------

/// A single state's survey row: identity plus the six plotted metrics.
///
/// Metric values are coerced from text at load time; a cell that fails
/// coercion holds `NaN` and the row simply drops out of extents and
/// rendering (see `data::loader`).
#[derive(Debug, Clone)]
pub struct StateRecord {
    /// Full state name, e.g. "Alabama".
    pub state: String,
    /// Postal abbreviation drawn inside the marker, e.g. "AL".
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

// ---------------------------------------------------------------------------
// Axis fields – the three candidates per axis
// ---------------------------------------------------------------------------

/// Metrics selectable on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XField {
    Poverty,
    Age,
    Income,
}

impl XField {
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    /// Text shown on the clickable axis-label control.
    pub fn control_label(self) -> &'static str {
        match self {
            XField::Poverty => "Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    /// Text used when quoting a value inside a tooltip.
    pub fn tooltip_label(self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    pub fn value(self, record: &StateRecord) -> f64 {
        match self {
            XField::Poverty => record.poverty,
            XField::Age => record.age,
            XField::Income => record.income,
        }
    }
}

/// Metrics selectable on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YField {
    Obesity,
    Smokes,
    Healthcare,
}

impl YField {
    pub const ALL: [YField; 3] = [YField::Obesity, YField::Smokes, YField::Healthcare];

    /// Text shown on the clickable axis-label control.
    pub fn control_label(self) -> &'static str {
        match self {
            YField::Obesity => "Obesity (%)",
            YField::Smokes => "Smokes (%)",
            YField::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Text used when quoting a value inside a tooltip.
    pub fn tooltip_label(self) -> &'static str {
        match self {
            YField::Obesity => "Obese (%)",
            YField::Smokes => "Smokes (%)",
            YField::Healthcare => "Lacks Healthcare (%)",
        }
    }

    pub fn value(self, record: &StateRecord) -> f64 {
        match self {
            YField::Obesity => record.obesity,
            YField::Smokes => record.smokes,
            YField::Healthcare => record.healthcare,
        }
    }
}

// ---------------------------------------------------------------------------
// SurveyDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SurveyDataset {
    /// All state rows in file order.
    pub records: Vec<StateRecord>,
}

impl SurveyDataset {
    pub fn from_records(records: Vec<StateRecord>) -> Self {
        SurveyDataset { records }
    }

    /// Number of state rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max of an X-axis metric over the finite values in the dataset.
    /// `None` when no row carries a finite value for the field.
    pub fn x_extent(&self, field: XField) -> Option<(f64, f64)> {
        self.extent_of(|r| field.value(r))
    }

    /// Min/max of a Y-axis metric over the finite values in the dataset.
    pub fn y_extent(&self, field: YField) -> Option<(f64, f64)> {
        self.extent_of(|r| field.value(r))
    }

    // NaN cells are skipped rather than poisoning the extent.
    fn extent_of(&self, value: impl Fn(&StateRecord) -> f64) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for record in &self.records {
            let v = value(record);
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
                any = true;
            }
        }
        if any { Some((min, max)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(abbr: &str, poverty: f64, obesity: f64) -> StateRecord {
        StateRecord {
            state: abbr.to_string(),
            abbr: abbr.to_string(),
            poverty,
            age: 38.0,
            income: 45000.0,
            obesity,
            smokes: 20.0,
            healthcare: 12.0,
        }
    }

    #[test]
    fn extent_spans_min_and_max() {
        let ds = SurveyDataset::from_records(vec![
            record("AL", 20.1, 32.4),
            record("CO", 11.0, 21.0),
            record("MS", 21.9, 35.5),
        ]);
        assert_eq!(ds.x_extent(XField::Poverty), Some((11.0, 21.9)));
        assert_eq!(ds.y_extent(YField::Obesity), Some((21.0, 35.5)));
    }

    #[test]
    fn extent_skips_nan_cells() {
        let ds = SurveyDataset::from_records(vec![
            record("AL", 20.1, 32.4),
            record("??", f64::NAN, f64::NAN),
            record("CO", 11.0, 21.0),
        ]);
        assert_eq!(ds.x_extent(XField::Poverty), Some((11.0, 20.1)));
        assert_eq!(ds.y_extent(YField::Obesity), Some((21.0, 32.4)));
    }

    #[test]
    fn extent_of_empty_dataset_is_none() {
        let ds = SurveyDataset::default();
        assert_eq!(ds.x_extent(XField::Income), None);
        let ds = SurveyDataset::from_records(vec![record("??", f64::NAN, f64::NAN)]);
        assert_eq!(ds.y_extent(YField::Smokes), None);
    }
}
