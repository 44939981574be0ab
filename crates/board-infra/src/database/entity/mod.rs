//! SeaORM entities for the board and analytics schemas.

pub mod chick_info;
pub mod comment;
pub mod company;
pub mod like;
pub mod post;
