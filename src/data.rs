use crate::config::SeriesConfig;


/// Values of one series, addressed by the dimensions of the coordinate system
/// it is bound to.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesData {
    pub name: String,
    pub coordinate_system: String,
    pub coordinate_index: usize,
    dimensions: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl SeriesData {
    /// Column `i` of every row is stored under `dimensions[i]`.
    pub fn new(config: &SeriesConfig, dimensions: &[String]) -> Self {
        Self {
            name: config.name.clone(),
            coordinate_system: config.coordinate_system.clone(),
            coordinate_index: config.radar_index,
            dimensions: dimensions.to_vec(),
            rows: config.data.clone(),
        }
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn map_dimension(&self, dim: &str) -> Option<usize> {
        self.dimensions.iter().position(|d| d == dim)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    /// `[min, max]` of a column, skipping missing and non-finite values.
    ///
    /// An empty column gives `[+inf, -inf]`.
    pub fn extent(&self, column: usize) -> [f64; 2] {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).copied())
            .filter(|v| v.is_finite())
            .fold([f64::INFINITY, f64::NEG_INFINITY], |[min, max], v| [min.min(v), max.max(v)])
    }
}
