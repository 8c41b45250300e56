pub mod chart_writer;
pub mod figure;

pub use chart_writer::ChartWriter;
pub use figure::Figure;
