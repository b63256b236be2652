mod add;
mod export;
mod init;
mod list;
mod misc;
mod stats;

pub use add::handle_add;
pub use export::handle_export;
pub use init::handle_init;
pub use list::handle_list;
pub use misc::handle_completions;
pub use stats::handle_stats;
