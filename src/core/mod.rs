pub mod client;
pub mod combo_tickets;
pub mod http;
pub mod outcome;
pub mod pois;
pub mod state;
pub mod tour;
pub mod tours;

pub use crate::domain::ports::ClientSettings;
pub use crate::utils::error::Result;
pub use client::PocketGuideClient;
pub use http::HttpClient;
