use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An instructor profile. Created out of band; this service only lists
/// them, so the shape stays open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
