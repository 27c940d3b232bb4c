pub mod clone;
pub mod form;
pub mod search;

pub use crate::domain::model::{Announcement, CloneRequest};
pub use crate::domain::ports::{AnnouncementApi, TokenProvider};
pub use crate::utils::error::Result;
