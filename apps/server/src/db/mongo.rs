//! MongoDB-backed policy store
//!
//! Renders the store-neutral [`PolicyQuery`] into driver documents: `$in`
//! for membership, case-insensitive `$regex` for substring conditions (with
//! metacharacters escaped, so the semantics stay substring match), and
//! `$elemMatch` for the array-element variant. The multi-field search group
//! becomes a top-level `$or`.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection};
use polaris_query::{Condition, PolicyQuery, SortKey};

use crate::config::DatabaseConfig;
use crate::db::traits::{PolicyStore, StatusGroup};
use crate::models::Policy;
use crate::Result;

pub const COLLECTION_NAME: &str = "policies";

/// Policy store over a MongoDB collection.
#[derive(Debug, Clone)]
pub struct MongoPolicyStore {
    collection: Collection<Policy>,
}

impl MongoPolicyStore {
    /// Connect to the configured deployment and bind the policies
    /// collection. Called once at startup; the handle is shared by all
    /// requests.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&config.database));

        tracing::info!(database = %database.name(), "Connected to MongoDB");

        Ok(Self {
            collection: database.collection(COLLECTION_NAME),
        })
    }

    /// Bind an existing collection handle.
    pub fn new(collection: Collection<Policy>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl PolicyStore for MongoPolicyStore {
    async fn find(
        &self,
        query: &PolicyQuery,
        sort: &[SortKey],
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Policy>> {
        let cursor = self
            .collection
            .find(filter_document(query))
            .sort(sort_document(sort))
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, query: &PolicyQuery) -> Result<u64> {
        Ok(self
            .collection
            .count_documents(filter_document(query))
            .await?)
    }

    async fn distinct_lines_of_business(&self) -> Result<Vec<String>> {
        // distinct unwinds array fields, so each element counts once.
        let values = self
            .collection
            .distinct("line_of_business", doc! {})
            .await?;

        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(line) => Some(line),
                _ => None,
            })
            .collect())
    }

    async fn status_counts(&self) -> Result<Vec<StatusGroup>> {
        let pipeline = [
            doc! { "$group": { "_id": "$status", "count": { "$sum": 1 } } },
            doc! { "$project": { "_id": 0, "id": "$_id", "count": 1 } },
            doc! { "$sort": { "id": 1 } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut groups = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            groups.push(mongodb::bson::from_document(document)?);
        }

        Ok(groups)
    }
}

/// Render a compiled query as a filter document.
pub(crate) fn filter_document(query: &PolicyQuery) -> Document {
    let mut filter = Document::new();
    let mut repeated = Vec::new();

    for condition in &query.all {
        // A repeated field cannot share the single filter document; extra
        // occurrences move into an explicit $and so the conjunction holds.
        for (key, value) in condition_document(condition) {
            if filter.contains_key(&key) {
                let mut clause = Document::new();
                clause.insert(key, value);
                repeated.push(clause);
            } else {
                filter.insert(key, value);
            }
        }
    }

    if !query.any.is_empty() {
        let group: Vec<Document> = query.any.iter().map(condition_document).collect();
        filter.insert("$or", group);
    }

    if !repeated.is_empty() {
        filter.insert("$and", repeated);
    }

    filter
}

fn condition_document(condition: &Condition) -> Document {
    let mut clause = Document::new();
    match condition {
        Condition::Eq { field, value } => {
            clause.insert(field, value.clone());
        }
        Condition::In { field, values } => {
            clause.insert(field, doc! { "$in": values.clone() });
        }
        Condition::Contains { field, value } => {
            clause.insert(
                field,
                doc! { "$regex": regex::escape(value), "$options": "i" },
            );
        }
        Condition::AnyContains { field, value } => {
            clause.insert(
                field,
                doc! { "$elemMatch": { "$regex": regex::escape(value), "$options": "i" } },
            );
        }
    }
    clause
}

/// Render compiled sort keys as a sort document; insertion order carries the
/// tie-break precedence.
pub(crate) fn sort_document(sort: &[SortKey]) -> Document {
    let mut document = Document::new();
    for key in sort {
        document.insert(&key.field, if key.ascending { 1 } else { -1 });
    }
    document
}
