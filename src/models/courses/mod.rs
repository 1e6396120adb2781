pub mod content;
pub mod entities;
pub mod requests;
pub mod responses;
