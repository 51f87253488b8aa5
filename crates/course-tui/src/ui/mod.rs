pub mod app;
pub mod course_list;
pub mod footer;
pub mod header;
pub mod search;
