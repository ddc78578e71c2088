pub mod formatter;
pub mod summary;

pub use formatter::OutputFormatter;
pub use summary::Summary;
