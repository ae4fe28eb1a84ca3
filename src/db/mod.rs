use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document, Document},
    options::FindOneOptions,
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Client, Collection, Database,
};

use crate::models::{CartEntry, ClassItem, Instructor, ProductUpdate, ProductView, User};

pub const DB_NAME: &str = "singerx";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("malformed document id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),
    #[error("document encoding failed: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

/// One long-lived handle to the `singerx` database. Constructed once at
/// startup and shared by every handler; the driver manages connections
/// internally and the handle is safe for concurrent use.
///
/// Every operation is a single driver call: no transactions, no retries,
/// no batching.
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    /// Build the client for `uri`. The driver connects lazily, so this
    /// succeeds even when the cluster is unreachable; see [`Store::ping`].
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(DB_NAME);
        Ok(Self { client, db })
    }

    /// Startup liveness check against the `admin` database.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    fn classes(&self) -> Collection<ClassItem> {
        self.db.collection("class")
    }

    fn class_views(&self) -> Collection<ProductView> {
        self.db.collection("class")
    }

    fn instructors(&self) -> Collection<Instructor> {
        self.db.collection("instructor")
    }

    fn carts(&self) -> Collection<CartEntry> {
        self.db.collection("cart")
    }

    fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub async fn list_classes(&self) -> Result<Vec<ClassItem>, StoreError> {
        let items: Vec<ClassItem> = self.classes().find(None, None).await?.try_collect().await?;
        Ok(items)
    }

    pub async fn list_instructors(&self) -> Result<Vec<Instructor>, StoreError> {
        let items: Vec<Instructor> = self
            .instructors()
            .find(None, None)
            .await?
            .try_collect()
            .await?;
        Ok(items)
    }

    pub async fn insert_cart_entry(&self, entry: &CartEntry) -> Result<InsertOneResult, StoreError> {
        Ok(self.carts().insert_one(entry, None).await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users().find_one(doc! { "email": email }, None).await?)
    }

    pub async fn insert_user(&self, user: &User) -> Result<InsertOneResult, StoreError> {
        Ok(self.users().insert_one(user, None).await?)
    }

    /// Find one class by id, restricted to the listing projection.
    pub async fn find_product(&self, id: &str) -> Result<Option<ProductView>, StoreError> {
        let filter = doc! { "_id": ObjectId::parse_str(id)? };
        let options = FindOneOptions::builder()
            .projection(read_projection())
            .build();
        Ok(self.class_views().find_one(filter, options).await?)
    }

    pub async fn insert_product(&self, item: &ClassItem) -> Result<InsertOneResult, StoreError> {
        Ok(self.classes().insert_one(item, None).await?)
    }

    /// `$set` the whitelisted fields on one class document.
    pub async fn update_product(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<UpdateResult, StoreError> {
        let filter = doc! { "_id": ObjectId::parse_str(id)? };
        let update = doc! { "$set": to_document(update)? };
        Ok(self.classes().update_one(filter, update, None).await?)
    }

    pub async fn delete_product(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let filter = doc! { "_id": ObjectId::parse_str(id)? };
        Ok(self.classes().delete_one(filter, None).await?)
    }
}

/// Field set returned for a single product. `category` is settable via
/// [`Store::update_product`] but intentionally not part of this set.
fn read_projection() -> Document {
    doc! {
        "toyName": 1,
        "photoUrl": 1,
        "sellerName": 1,
        "sellerEmail": 1,
        "price": 1,
        "rating": 1,
        "availableQuantity": 1,
        "detailDescription": 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_projection_matches_listing_fields() {
        let projection = read_projection();

        let expected = [
            "toyName",
            "photoUrl",
            "sellerName",
            "sellerEmail",
            "price",
            "rating",
            "availableQuantity",
            "detailDescription",
        ];
        assert_eq!(projection.len(), expected.len());
        for field in expected {
            assert!(projection.contains_key(field), "missing {field}");
        }
        assert!(!projection.contains_key("category"));
    }

    #[test]
    fn update_document_carries_only_present_fields() {
        let update = ProductUpdate {
            toy_name: Some("Robot".to_string()),
            price: Some(25.0),
            category: Some("robots".to_string()),
            ..ProductUpdate::default()
        };

        let set = to_document(&update).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get_str("toyName").unwrap(), "Robot");
        assert_eq!(set.get_f64("price").unwrap(), 25.0);
        assert_eq!(set.get_str("category").unwrap(), "robots");
        assert!(!set.contains_key("rating"));
    }

    #[test]
    fn malformed_object_ids_become_store_errors() {
        let err = ObjectId::parse_str("definitely-not-an-oid").unwrap_err();
        let store_err = StoreError::from(err);
        assert!(matches!(store_err, StoreError::InvalidId(_)));
    }
}
