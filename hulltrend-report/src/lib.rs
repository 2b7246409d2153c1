//! hulltrend reporting layer — everything between the analytical core and
//! the outside world: CSV bar loading, bilingual report rendering, table
//! export, and parallel multi-period sweeps.
//!
//! Language selection lives here and only here; the core never sees a label.

pub mod export;
pub mod labels;
pub mod loader;
pub mod report;
pub mod sweep;

pub use export::{write_annotated_csv, write_report_json, write_segments_csv};
pub use labels::{labels, Labels, Language};
pub use loader::load_bars_csv;
pub use report::MarkdownReport;
pub use sweep::{PeriodSweep, SweepRow};
