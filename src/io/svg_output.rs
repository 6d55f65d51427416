use geo::Coord;
use svg::{node::element, Document};

use crate::{config::Viewport, coord::{radar::Radar, CoordinateSystems}, io::report::radar_polygons};

const SERIES_COLORS: [&str; 4] = ["#4774AA", "#329544", "#893566", "#D08A2B"];


pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewBox {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: viewport.width,
            max_y: viewport.height,
        }
    }

    pub fn include(&mut self, (x, y): (f64, f64)) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn add_margin(&mut self, margin: f64) {
        self.min_x -= margin;
        self.min_y -= margin;
        self.max_x += margin;
        self.max_y += margin;
    }

    pub fn get(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x - self.min_x, self.max_y - self.min_y)
    }
}


fn make_svg_polygon(points: &[Coord], view_box: &mut ViewBox) -> Option<element::Path> {
    let (p0, rest) = points.split_first()?;

    let mut data = element::path::Data::new().move_to(p0.x_y());
    view_box.include(p0.x_y());

    for p in rest {
        data = data.line_to(p.x_y());
        view_box.include(p.x_y());
    }

    Some(element::Path::new()
        .set("d", data.close())
        .set("vector-effect", "non-scaling-stroke"))
}


fn make_svg_grid(radar: &Radar, view_box: &mut ViewBox) -> element::Group {
    let mut g_grid = element::Group::new()
        .set("fill", "none")
        .set("stroke", "#BBBBBB")
        .set("stroke-width", 1);

    let center = Coord { x: radar.cx, y: radar.cy };
    let axes = radar.indicator_axes().len();

    for i in 0..axes {
        let (Some(inner), Some(outer)) = (radar.coord_to_point(radar.r0, i), radar.coord_to_point(radar.r, i)) else {
            continue;
        };
        view_box.include(outer.x_y());

        g_grid = g_grid.add(element::Line::new()
            .set("x1", inner.x)
            .set("y1", inner.y)
            .set("x2", outer.x)
            .set("y2", outer.y));
    }

    let split_number = radar.model().split_number;
    for split in 0..=split_number {
        let coord = radar.r0 + (radar.r - radar.r0) * split as f64 / split_number.max(1) as f64;
        let ring: Vec<_> = (0..axes)
            .filter_map(|i| radar.coord_to_point(coord, i))
            .collect();

        if let Some(path) = make_svg_polygon(&ring, view_box) {
            g_grid = g_grid.add(path);
        }
    }

    g_grid.add(element::Circle::new()
        .set("cx", center.x)
        .set("cy", center.y)
        .set("r", 2)
        .set("fill", "#BBBBBB"))
}


fn make_svg_series(radar: &Radar, systems: &CoordinateSystems, system_index: usize, view_box: &mut ViewBox) -> element::Group {
    let mut g_series = element::Group::new()
        .set("stroke-width", 2);

    for (i, data) in systems.series_of(system_index).enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];

        let mut g = element::Group::new()
            .set("fill", format!("{color}33"))
            .set("stroke", color);

        for polygon in radar_polygons(radar, data.rows()) {
            let points: Vec<_> = polygon.into_iter().map(|[x, y]| Coord { x, y }).collect();
            if let Some(path) = make_svg_polygon(&points, view_box) {
                g = g.add(path);
            }
        }

        g_series = g_series.add(g);
    }

    g_series
}


/// Overview drawing of every radar: spokes, split rings and the series on top.
pub fn make_svg(systems: &CoordinateSystems, viewport: Viewport) -> Document {
    let mut view_box = ViewBox::new(viewport);
    let mut doc = Document::new();

    for (i, system) in systems.systems().iter().enumerate() {
        let Some(radar) = system.as_radar() else {
            continue;
        };

        doc = doc
            .add(make_svg_grid(radar, &mut view_box))
            .add(make_svg_series(radar, systems, i, &mut view_box));
    }

    view_box.add_margin(5.0);

    doc.set("viewBox", view_box.get())
}
