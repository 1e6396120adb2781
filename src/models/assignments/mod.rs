pub mod entities;
pub mod requests;
pub mod stats_responses;
