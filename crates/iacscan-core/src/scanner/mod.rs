pub mod command;
pub mod process;
pub mod runner;

pub use command::ScannerCommand;
pub use process::wait_with_timeout;
pub use runner::ScanRunner;
