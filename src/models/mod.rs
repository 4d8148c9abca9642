pub mod product;
pub mod submission;

pub use product::Product;
pub use submission::Submission;
