use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the paginated reference dataset (farm chick inventory).
///
/// The board never writes this table; it only pages through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickRecord {
    pub id: i64,
    pub breed: String,
    pub gender: String,
    pub weight_g: i32,
    pub arrived_at: DateTime<Utc>,
}
