pub mod record;
pub mod section;
pub mod value;
