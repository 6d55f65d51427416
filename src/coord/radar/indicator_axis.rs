use crate::{config::IndicatorConfig, number::linear_map, scale::IntervalScale};


/// One spoke of a radar.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorAxis {
    pub dim: String,
    pub name: String,
    pub scale: IntervalScale,
    /// Radians in `(-PI, PI]`, counter-clockwise from the positive x axis.
    pub angle: f64,
    /// `[inner, outer]` radius in pixels.
    extent: [f64; 2],
    model: IndicatorConfig,
}

impl IndicatorAxis {
    pub fn new(dim: impl Into<String>, model: IndicatorConfig) -> Self {
        Self {
            dim: dim.into(),
            name: model.name.clone(),
            scale: IntervalScale::new(),
            angle: 0.0,
            extent: [0.0, 0.0],
            model,
        }
    }

    pub fn model(&self) -> &IndicatorConfig {
        &self.model
    }

    pub fn extent(&self) -> [f64; 2] {
        self.extent
    }

    pub fn set_extent(&mut self, start: f64, end: f64) {
        self.extent = [start, end];
    }

    /// Distance from the radar center for a data value. Values outside the
    /// scale extent extrapolate.
    pub fn data_to_coord(&self, value: f64) -> f64 {
        linear_map(self.scale.normalize(value), [0.0, 1.0], self.extent)
    }

    pub fn coord_to_data(&self, coord: f64) -> f64 {
        self.scale.scale(linear_map(coord, self.extent, [0.0, 1.0]))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn axis() -> IndicatorAxis {
        let mut axis = IndicatorAxis::new("indicator_0", IndicatorConfig::new("speed"));
        axis.scale.set_extent(0.0, 100.0);
        axis.set_extent(20.0, 220.0);
        axis
    }

    #[test]
    fn mapping() {
        let axis = axis();

        assert_eq!(axis.name, "speed");
        assert_eq!(axis.data_to_coord(0.0), 20.0);
        assert_eq!(axis.data_to_coord(50.0), 120.0);
        assert_eq!(axis.data_to_coord(150.0), 320.0);
        assert_eq!(axis.coord_to_data(120.0), 50.0);
        assert_eq!(axis.coord_to_data(0.0), -10.0);
    }

    #[test]
    fn collapsed_radius() {
        let mut axis = axis();
        axis.set_extent(50.0, 50.0);

        assert_eq!(axis.data_to_coord(75.0), 50.0);
        assert_eq!(axis.coord_to_data(50.0), 50.0);
    }
}
