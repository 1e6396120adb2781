pub mod access_code;
pub mod grade;

pub use access_code::AccessCode;
pub use grade::Grade;
