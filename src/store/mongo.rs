use chrono::{Days, NaiveDate};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, doc};
use mongodb::sync::{Client, Database};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{ExpiringQuote, RecordStore};
use crate::core::{
    ClientInfo, CompanyInfo, CotizaError, LineItem, Record, RecordType, StockLocation,
};

/// Synchronous MongoDB-backed record store.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to the store. The driver connects lazily, so an unreachable
    /// server typically surfaces on the first query as
    /// [`CotizaError::Connection`].
    pub fn connect(uri: &str, database: &str) -> Result<Self, CotizaError> {
        tracing::info!(database = %database, "connecting to record store");
        let client =
            Client::with_uri_str(uri).map_err(|e| CotizaError::Connection(e.to_string()))?;
        Ok(Self {
            db: client.database(database),
        })
    }

    /// Quotes whose order date falls on `today - back_days`, i.e. the ones
    /// whose validity window closes around now. Dates are stored as strings
    /// in the legacy schema, so this is a one-day string-range filter.
    pub fn find_expiring(
        &self,
        back_days: u32,
        today: NaiveDate,
    ) -> Result<Vec<ExpiringQuote>, CotizaError> {
        let day = today - Days::new(back_days as u64);
        let start = day.format("%Y-%m-%d").to_string();
        let end = (day + Days::new(1)).format("%Y-%m-%d").to_string();
        let filter = doc! {
            "$and": [
                { "dateOrder": { "$gte": &start, "$lt": &end } },
                { "type": RecordType::Quote.stored_code() },
            ]
        };

        let cursor = self
            .db
            .collection::<AlertDoc>(RecordType::Quote.collection())
            .find(filter, None)
            .map_err(|e| CotizaError::Connection(e.to_string()))?;

        let mut quotes = Vec::new();
        for result in cursor {
            let doc = result.map_err(|e| CotizaError::Connection(e.to_string()))?;
            quotes.push(ExpiringQuote {
                id: doc.id.to_hex(),
                number: doc.id_quote,
                client_names: doc.client_names,
                client_last_names: doc.client_last_names,
            });
        }
        tracing::debug!(count = quotes.len(), date = %start, "expiring quotes found");
        Ok(quotes)
    }
}

impl RecordStore for MongoStore {
    fn fetch(&self, record_type: RecordType, id: &str) -> Result<Option<Record>, CotizaError> {
        let oid = ObjectId::parse_str(id)
            .map_err(|e| CotizaError::InvalidInput(format!("malformed record id `{id}`: {e}")))?;

        let found = self
            .db
            .collection::<StoredRecord>(record_type.collection())
            .find_one(doc! { "_id": oid }, None)
            .map_err(|e| CotizaError::Connection(e.to_string()))?;

        found.map(|raw| raw.into_record(record_type)).transpose()
    }
}

/// Flat legacy document shape, as the order-management system writes it.
/// Mapped into the grouped [`Record`] for the renderer.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(rename = "idQuote")]
    id_quote: String,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "clientNames", default)]
    client_names: Option<String>,
    #[serde(rename = "clientLastnames", default)]
    client_last_names: Option<String>,
    // ObjectId in newer documents, plain string in older ones
    #[serde(rename = "idClient", default)]
    client_tax_id: Option<Bson>,
    #[serde(rename = "addressClient", default)]
    client_address: Option<String>,
    #[serde(rename = "cityClient", default)]
    client_city: Option<String>,
    #[serde(rename = "phoneClient", default)]
    client_phone: Option<String>,
    #[serde(rename = "company")]
    company_name: String,
    #[serde(rename = "phoneCompany", default)]
    company_phone: String,
    #[serde(rename = "addressCompany", default)]
    company_address: String,
    #[serde(rename = "idCompany", default)]
    company_tax_id: String,
    #[serde(default)]
    content: Option<Bson>,
    #[serde(rename = "listProducts", default)]
    list_products: Vec<StoredProduct>,
}

#[derive(Debug, Deserialize)]
struct StoredProduct {
    name: String,
    quantity: f64,
    #[serde(rename = "IVAPercent")]
    iva_percent: f64,
    #[serde(default)]
    locations: Vec<StoredLocation>,
}

#[derive(Debug, Deserialize)]
struct StoredLocation {
    price: f64,
}

fn decimal_from_stored(value: f64, field: &str) -> Result<Decimal, CotizaError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| CotizaError::InvalidInput(format!("non-finite {field}: {value}")))
}

impl StoredRecord {
    fn into_record(self, record_type: RecordType) -> Result<Record, CotizaError> {
        let mut line_items = Vec::with_capacity(self.list_products.len());
        for product in self.list_products {
            let mut locations = Vec::with_capacity(product.locations.len());
            for location in product.locations {
                locations.push(StockLocation {
                    unit_price_incl_tax: decimal_from_stored(location.price, "price")?,
                });
            }
            line_items.push(LineItem {
                name: product.name,
                quantity: product.quantity as u32,
                tax_rate_percent: decimal_from_stored(product.iva_percent, "IVAPercent")?,
                locations,
            });
        }

        Ok(Record {
            record_type,
            number: self.id_quote,
            created_at: self.created_at,
            client: ClientInfo {
                names: self.client_names,
                last_names: self.client_last_names,
                tax_id: self.client_tax_id.map(|id| match id {
                    Bson::String(s) => s,
                    Bson::ObjectId(oid) => oid.to_hex(),
                    other => other.to_string(),
                }),
                address: self.client_address,
                city: self.client_city,
                phone: self.client_phone,
            },
            company: CompanyInfo {
                name: self.company_name,
                phone: self.company_phone,
                address: self.company_address,
                tax_id: self.company_tax_id,
            },
            content: self.content.map(Into::into),
            line_items,
        })
    }
}

/// Projection for the expiry alert query.
#[derive(Debug, Deserialize)]
struct AlertDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(rename = "idQuote")]
    id_quote: String,
    #[serde(rename = "clientNames", default)]
    client_names: String,
    #[serde(rename = "clientLastnames", default)]
    client_last_names: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use rust_decimal_macros::dec;

    fn legacy_doc() -> bson::Document {
        doc! {
            "idQuote": "COT-0042",
            "createdAt": bson::DateTime::from_millis(1_750_000_000_000),
            "clientNames": "María",
            "clientLastnames": "Gómez",
            "idClient": ObjectId::parse_str("645ff7c3c8276860e988931b").unwrap(),
            "addressClient": "Cra 23 #10-15",
            "cityClient": "Manizales",
            "phoneClient": "3001234567",
            "company": "AMAS Ferretería",
            "phoneCompany": "8871234",
            "addressCompany": "Av Santander 45",
            "idCompany": "901000111-2",
            "content": { "Entrega": "48 horas" },
            "listProducts": [
                {
                    "name": "Bolt",
                    "quantity": 2.0,
                    "IVAPercent": 19.0,
                    "locations": [ { "price": 1190.0 } ],
                }
            ],
        }
    }

    #[test]
    fn legacy_flat_document_maps_to_grouped_record() {
        let raw: StoredRecord = bson::from_document(legacy_doc()).unwrap();
        let record = raw.into_record(RecordType::Quote).unwrap();

        assert_eq!(record.number, "COT-0042");
        assert_eq!(record.client.full_name(), "María Gómez");
        assert_eq!(
            record.client.tax_id.as_deref(),
            Some("645ff7c3c8276860e988931b")
        );
        assert_eq!(record.company.name, "AMAS Ferretería");

        assert_eq!(record.line_items.len(), 1);
        let item = &record.line_items[0];
        assert_eq!(item.quantity, 2);
        assert_eq!(item.tax_rate_percent, dec!(19));
        assert_eq!(item.unit_price_incl_tax(), dec!(1190));

        let content = record.content.unwrap();
        assert_eq!(content["Entrega"], "48 horas");
    }

    #[test]
    fn missing_optional_client_fields_deserialize_as_none() {
        let mut doc = legacy_doc();
        doc.remove("clientNames");
        doc.remove("phoneClient");
        let raw: StoredRecord = bson::from_document(doc).unwrap();
        let record = raw.into_record(RecordType::Order).unwrap();
        assert_eq!(record.client.names, None);
        assert_eq!(record.client.phone, None);
        assert_eq!(record.client.full_name(), " Gómez");
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let mut doc = legacy_doc();
        doc.insert(
            "listProducts",
            vec![doc! {
                "name": "Broken",
                "quantity": 1.0,
                "IVAPercent": 19.0,
                "locations": [ { "price": f64::NAN } ],
            }],
        );
        let raw: StoredRecord = bson::from_document(doc).unwrap();
        let err = raw.into_record(RecordType::Quote).unwrap_err();
        assert!(matches!(err, CotizaError::InvalidInput(_)));
    }
}
