use crate::{data::SeriesData, number::{nice, precision, round, DEFAULT_PRECISION}};

/// Extent of a scale that has seen no data yet.
pub const EMPTY_EXTENT: [f64; 2] = [f64::INFINITY, f64::NEG_INFINITY];

const TICK_LIMIT: usize = 10000;


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceExtentOptions {
    pub split_number: usize,
    pub fix_min: bool,
    pub fix_max: bool,
}


/// Linear scale with evenly spaced ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalScale {
    extent: [f64; 2],
    interval: Option<f64>,
    /// Range covered by the ticks that fall on interval multiples.
    nice_extent: [f64; 2],
    interval_precision: usize,
}

impl Default for IntervalScale {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScale {
    pub fn new() -> Self {
        Self {
            extent: EMPTY_EXTENT,
            interval: None,
            nice_extent: EMPTY_EXTENT,
            interval_precision: 0,
        }
    }

    pub fn extent(&self) -> [f64; 2] {
        self.extent
    }

    pub fn set_extent(&mut self, min: f64, max: f64) {
        self.extent = [min, max];
    }

    pub fn interval(&self) -> Option<f64> {
        self.interval
    }

    /// Must be called after the extent is final: the ticks are laid out over it.
    pub fn set_interval(&mut self, interval: f64) {
        self.interval = Some(interval);
        self.nice_extent = self.extent;
        self.interval_precision = interval_precision(interval);
    }

    /// No data has been folded in, or the extent got lost on the way.
    pub fn is_blank(&self) -> bool {
        !(self.extent[0] <= self.extent[1])
    }

    pub fn union_extent(&mut self, [min, max]: [f64; 2]) {
        self.extent[0] = self.extent[0].min(min);
        self.extent[1] = self.extent[1].max(max);
    }

    pub fn union_extent_from_data(&mut self, data: &SeriesData, column: usize) {
        self.union_extent(data.extent(column));
    }

    /// Position of `value` inside the extent, `0.0` at min and `1.0` at max.
    pub fn normalize(&self, value: f64) -> f64 {
        let [min, max] = self.extent;
        if max == min {
            return 0.5;
        }
        (value - min) / (max - min)
    }

    /// Inverse of [`Self::normalize`].
    pub fn scale(&self, t: f64) -> f64 {
        let [min, max] = self.extent;
        t * (max - min) + min
    }

    /// Tick values from min to max.
    ///
    /// Ticks sit on interval multiples, and the ends of the extent are added
    /// when they are not multiples themselves.
    pub fn ticks(&self) -> Vec<f64> {
        let Some(interval) = self.interval else {
            return vec![];
        };

        let [min, max] = self.extent;
        let [nice_min, nice_max] = self.nice_extent;
        let mut ticks = vec![];

        if min < nice_min {
            ticks.push(min);
        }

        let mut tick = nice_min;
        while tick <= nice_max {
            ticks.push(tick);

            let next = round(tick + interval, self.interval_precision);
            if next == tick {
                break;
            }
            tick = next;

            if ticks.len() > TICK_LIMIT {
                return vec![];
            }
        }

        let last = ticks.last().copied().unwrap_or(nice_max);
        if max > last {
            ticks.push(max);
        }

        ticks
    }

    /// Pick a nice interval splitting the extent into about `split_number` parts.
    pub fn calc_nice_ticks(&mut self, split_number: usize) {
        let [mut min, mut max] = self.extent;
        let span = max - min;
        if !span.is_finite() {
            return;
        }
        if span < 0.0 {
            std::mem::swap(&mut min, &mut max);
        }

        let interval = nice(span.abs() / split_number as f64, true);
        let precision = interval_precision(interval);

        let mut nice_extent = [
            round((min / interval).ceil() * interval, precision),
            round((max / interval).floor() * interval, precision),
        ];

        for (bound, fallback) in nice_extent.iter_mut().zip([min, max]) {
            if !bound.is_finite() {
                *bound = fallback;
            }
            *bound = bound.clamp(min, max);
        }
        if nice_extent[0] > nice_extent[1] {
            nice_extent[0] = nice_extent[1];
        }

        self.interval = Some(interval);
        self.interval_precision = precision;
        self.nice_extent = nice_extent;
    }

    /// Widen the extent so that unfixed ends land on multiples of a nice interval.
    pub fn calc_nice_extent(&mut self, opt: NiceExtentOptions) {
        let mut extent = self.extent;

        if extent[0] == extent[1] {
            if extent[0] != 0.0 {
                let expand = extent[0].abs() / 2.0;
                if !opt.fix_max {
                    extent[1] += expand;
                }
                extent[0] -= expand;
            } else {
                extent[1] = 1.0;
            }
        }

        if !(extent[1] - extent[0]).is_finite() {
            extent = [0.0, 1.0];
        }

        self.extent = extent;
        self.calc_nice_ticks(opt.split_number);

        if let Some(interval) = self.interval {
            if !opt.fix_min {
                extent[0] = round((extent[0] / interval).floor() * interval, DEFAULT_PRECISION);
            }
            if !opt.fix_max {
                extent[1] = round((extent[1] / interval).ceil() * interval, DEFAULT_PRECISION);
            }
        }

        self.extent = extent;
    }
}


fn interval_precision(interval: f64) -> usize {
    precision(interval) + 2
}


#[cfg(test)]
mod tests {
    use super::*;

    fn scale(min: f64, max: f64) -> IntervalScale {
        let mut scale = IntervalScale::new();
        scale.set_extent(min, max);
        scale
    }

    fn opt(split_number: usize) -> NiceExtentOptions {
        NiceExtentOptions {
            split_number,
            fix_min: false,
            fix_max: false,
        }
    }

    #[test]
    fn union() {
        let mut s = IntervalScale::new();
        assert!(s.is_blank());

        s.union_extent([3.0, 5.0]);
        s.union_extent([-1.0, 4.0]);
        s.union_extent(EMPTY_EXTENT);
        assert_eq!(s.extent(), [-1.0, 5.0]);
        assert!(!s.is_blank());
    }

    #[test]
    fn normalization() {
        let s = scale(10.0, 20.0);
        assert_eq!(s.normalize(15.0), 0.5);
        assert_eq!(s.normalize(30.0), 2.0);
        assert_eq!(s.scale(0.25), 12.5);

        let s = scale(4.0, 4.0);
        assert_eq!(s.normalize(100.0), 0.5);
    }

    #[test]
    fn nice_extent_snaps_outward() {
        let mut s = scale(0.0, 95.0);
        s.calc_nice_extent(opt(5));

        assert_eq!(s.interval(), Some(20.0));
        assert_eq!(s.extent(), [0.0, 100.0]);
        assert_eq!(s.ticks(), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn nice_extent_keeps_fixed_ends() {
        let mut s = scale(3.0, 95.0);
        s.calc_nice_extent(NiceExtentOptions { fix_min: true, ..opt(5) });

        assert_eq!(s.interval(), Some(20.0));
        assert_eq!(s.extent(), [3.0, 100.0]);
        assert_eq!(s.ticks(), vec![3.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn nice_extent_degenerate() {
        let mut s = scale(0.0, 0.0);
        s.calc_nice_extent(opt(5));
        assert_eq!(s.extent(), [0.0, 1.0]);
        assert_eq!(s.interval(), Some(0.2));

        let mut s = scale(10.0, 10.0);
        s.calc_nice_extent(opt(5));
        assert_eq!(s.interval(), Some(2.0));
        assert_eq!(s.extent(), [4.0, 16.0]);

        let mut s = IntervalScale::new();
        s.calc_nice_extent(opt(5));
        assert_eq!(s.extent(), [0.0, 1.0]);
    }

    #[test]
    fn ticks_need_interval() {
        assert!(scale(0.0, 10.0).ticks().is_empty());

        let mut s = scale(0.0, 1.0);
        s.set_interval(0.25);
        assert_eq!(s.ticks(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
