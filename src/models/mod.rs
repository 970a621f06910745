pub mod clock_time;
pub mod holiday;
pub mod record;
pub mod work_span;

pub use clock_time::ClockTime;
pub use holiday::Holiday;
pub use record::WorkRecord;
pub use work_span::WorkSpan;
