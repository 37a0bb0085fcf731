use serde::Serialize;

use crate::modules::matches::schema::MatchEntity;
use crate::modules::swipe::schema::SwipeEntity;

/// What a recorded swipe produced: either the bare swipe, or the match a
/// reciprocal RIGHT completed. Serialized untagged, so the wire shape is
/// the swipe or the match itself.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SwipeOutcome {
    Swiped(SwipeEntity),
    Matched(MatchEntity),
}
