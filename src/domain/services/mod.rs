//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod episode_service;
pub mod exclusion_filter;
pub mod url_resolver;
