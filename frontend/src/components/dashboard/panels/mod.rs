pub mod comments;
pub mod filters;
