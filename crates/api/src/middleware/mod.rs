pub mod permission;
pub mod recovery;
