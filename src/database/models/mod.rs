pub mod work_entry;

pub use work_entry::*;
