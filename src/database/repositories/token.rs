use crate::config::Neo4jConfig;
use crate::database::models::TokenRecord;
use crate::database::neo4j::Neo4jClient;
use crate::database::store::{GraphError, TokenStore};
use async_trait::async_trait;
use log::debug;
use neo4rs::{query, Row};
use std::sync::Arc;

/// Token repository for Neo4j lookups
#[derive(Clone)]
pub struct TokenRepository {
    client: Arc<Neo4jClient>,
    cypher: String,
}

impl TokenRepository {
    /// Create a new TokenRepository matching on the configured label and key property
    pub fn new(client: Arc<Neo4jClient>, config: &Neo4jConfig) -> Self {
        let cypher = lookup_cypher(&config.token_label, &config.address_property);
        Self { client, cypher }
    }
}

/// Cypher for one identifier. Label and property cannot be parameters, so they
/// are validated identifiers from config, backtick-quoted here.
fn lookup_cypher(label: &str, property: &str) -> String {
    format!(
        "MATCH (t:`{label}` {{`{property}`: $address}}) RETURN properties(t) AS props LIMIT 1",
        label = label,
        property = property,
    )
}

/// Reads the `props` column into a record without reshaping any value.
fn record_from_row(row: &Row, address: &str) -> Result<TokenRecord, GraphError> {
    row.get("props")
        .map_err(|e| GraphError::Decode(format!("{}: {}", address, e)))
}

#[async_trait]
impl TokenStore for TokenRepository {
    async fn find_by_address(&self, address: &str) -> Result<Option<TokenRecord>, GraphError> {
        debug!("Looking up token node for {}", address);

        // The pooled connection is held by the stream and returned when it drops.
        let mut stream = self
            .client
            .graph()
            .execute(query(&self.cypher).param("address", address))
            .await?;

        match stream.next().await? {
            Some(row) => Ok(Some(record_from_row(&row, address)?)),
            None => {
                debug!("No token node for {}", address);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::PropertyValue;
    use neo4rs::{BoltList, BoltMap, BoltString, BoltType};

    fn props_row(props: Vec<(&str, BoltType)>) -> Row {
        let mut map = BoltMap::new();
        for (key, value) in props {
            map.put(BoltString::from(key), value);
        }
        let fields = BoltList::from(vec![BoltType::from("props")]);
        let data = BoltList::from(vec![BoltType::Map(map)]);
        Row::new(fields, data)
    }

    #[test]
    fn test_record_from_row_keeps_property_types() {
        let row = props_row(vec![
            ("name", BoltType::from("Foo")),
            ("supply", BoltType::from(1000i64)),
            ("whole", BoltType::from(2.0f64)),
            ("verified", BoltType::from(true)),
            (
                "tags",
                BoltType::List(BoltList::from(vec![
                    BoltType::from("a"),
                    BoltType::from("b"),
                ])),
            ),
        ]);

        let record = record_from_row(&row, "0xAAA").unwrap();

        assert_eq!(record.len(), 5);
        assert_eq!(record["name"], PropertyValue::String("Foo".to_string()));
        assert_eq!(record["supply"], PropertyValue::Integer(1000));
        assert_eq!(record["whole"], PropertyValue::Float(2.0));
        assert_eq!(record["verified"], PropertyValue::Bool(true));
        assert_eq!(
            record["tags"],
            PropertyValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_record_from_row_without_props_column_is_decode_error() {
        let row = Row::new(
            BoltList::from(vec![BoltType::from("other")]),
            BoltList::from(vec![BoltType::from(1i64)]),
        );

        let result = record_from_row(&row, "0xAAA");

        assert!(matches!(result, Err(GraphError::Decode(ref msg)) if msg.starts_with("0xAAA")));
    }

    #[test]
    fn test_lookup_cypher_uses_parameter_for_address() {
        let cypher = lookup_cypher("Token", "address");
        assert_eq!(
            cypher,
            "MATCH (t:`Token` {`address`: $address}) RETURN properties(t) AS props LIMIT 1"
        );
    }

    #[test]
    fn test_lookup_cypher_custom_label() {
        let cypher = lookup_cypher("Erc20", "contract");
        assert!(cypher.starts_with("MATCH (t:`Erc20` {`contract`: $address})"));
    }
}
