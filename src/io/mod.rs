pub mod report;
pub mod svg_output;
