//! Domain entities - the core business objects.

mod comment;
mod company;
mod like;
mod paging;
mod post;
mod record;

pub use comment::Comment;
pub use company::{Company, CompanySummary};
pub use like::{Like, LikeState};
pub use paging::{PAGE_SIZE, Page, normalize_page};
pub use post::{Post, PostSummary};
pub use record::ChickRecord;
