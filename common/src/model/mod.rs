pub mod activity;
pub mod talent;
