pub mod csv;
pub mod plot;

pub use self::csv::{read_series, write_series};
pub use self::plot::plot_series;
