use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cart line. The item payload is schema-less; nothing checks that the
/// referenced class exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub item: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arbitrary_item_fields_round_trip() {
        let entry: CartEntry = serde_json::from_value(json!({
            "classId": "abc123",
            "price": 20,
            "studentEmail": "ada@example.com"
        }))
        .unwrap();

        assert!(entry.id.is_none());
        assert_eq!(entry.item["classId"], "abc123");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["price"], 20);
        assert_eq!(value["studentEmail"], "ada@example.com");
    }
}
