pub mod lab;
pub mod model;
pub mod notebook;
pub mod remote;
pub mod router;
pub mod store;
