pub mod page_handler;
pub mod school_handler;
