use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, PartialEq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "swipe_direction", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeDirection {
    #[sqlx(rename = "LEFT")]
    Left,
    #[sqlx(rename = "RIGHT")]
    Right,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SwipeEntity {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub direction: SwipeDirection,
    pub swiped_at: chrono::DateTime<chrono::Utc>,
}
