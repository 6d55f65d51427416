use crate::{config::IndicatorConfig, scale::{IntervalScale, NiceExtentOptions}};


/// Extent an axis should cover before any nicing, with the user bounds applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExtent {
    /// Non-finite ends are NaN.
    pub extent: [f64; 2],
    pub fix_min: bool,
    pub fix_max: bool,
}

impl ScaleExtent {
    pub fn is_blank(&self) -> bool {
        self.extent[0].is_nan() || self.extent[1].is_nan()
    }
}


/// Combine the data extent folded into `scale` with the fixed bounds of `indicator`.
///
/// Unless `scale_from_data` is set, an extent lying entirely on one side of zero is
/// stretched to reach it, on the side that is not fixed.
pub fn get_scale_extent(scale: &IntervalScale, indicator: &IndicatorConfig, scale_from_data: bool) -> ScaleExtent {
    let [data_min, data_max] = scale.extent();

    let fix_min = indicator.min.is_some();
    let fix_max = indicator.max.is_some();

    let finite_or_nan = |v: f64| if v.is_finite() { v } else { f64::NAN };
    let mut min = finite_or_nan(indicator.min.unwrap_or(data_min));
    let mut max = finite_or_nan(indicator.max.unwrap_or(data_max));

    if !scale_from_data {
        if min > 0.0 && max > 0.0 && !fix_min {
            min = 0.0;
        }
        if min < 0.0 && max < 0.0 && !fix_max {
            max = 0.0;
        }
    }

    ScaleExtent {
        extent: [min, max],
        fix_min,
        fix_max,
    }
}


/// Propose a nice extent and interval for `scale`.
pub fn nice_scale_extent(scale: &mut IntervalScale, extent: &ScaleExtent, split_number: usize) {
    scale.set_extent(extent.extent[0], extent.extent[1]);
    scale.calc_nice_extent(NiceExtentOptions {
        split_number,
        fix_min: extent.fix_min,
        fix_max: extent.fix_max,
    });
}
