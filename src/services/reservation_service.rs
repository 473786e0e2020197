use std::sync::Arc;
use serde::de;
use serde_json::{Map, Value};
use crate::errors::{ReservationError, StoreOperation};
use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;

/// Maps reservation requests onto the document store.
#[derive(Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
}

impl ReservationService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// An empty collection is reported as `NotFound`, not as an empty list.
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ReservationError> {
        let reservations = self
            .store
            .find_all()
            .await
            .map_err(|e| ReservationError::store(StoreOperation::List, e))?;

        if reservations.is_empty() {
            return Err(ReservationError::NotFound);
        }
        Ok(reservations)
    }

    pub async fn create_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, ReservationError> {
        self.store
            .insert_one(&reservation)
            .await
            .map_err(|e| ReservationError::store(StoreOperation::Create, e))?;

        Ok(reservation)
    }
}

const RESERVATION_FIELDS: [&str; 4] = ["room", "time", "reservedBy", "company"];

/// Decodes the first JSON value of `body`; anything after it is ignored.
///
/// Keys match field names case-insensitively (an exact match wins), `null`
/// fields and a `null` body leave the defaults in place.
pub fn decode_reservation(body: &[u8]) -> Result<Reservation, ReservationError> {
    let payload = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("EOF while parsing request body")))
        .map_err(ReservationError::Validation)?;

    match payload {
        Value::Null => Ok(Reservation::default()),
        Value::Object(fields) => serde_json::from_value(Value::Object(canonicalize_fields(fields)))
            .map_err(ReservationError::Validation),
        _ => Err(ReservationError::Validation(de::Error::custom(
            "expected a reservation object",
        ))),
    }
}

fn canonicalize_fields(fields: Map<String, Value>) -> Map<String, Value> {
    let mut canonical = Map::new();
    let mut exact = Vec::new();

    for (key, value) in fields {
        if value.is_null() {
            continue;
        }
        let Some(field) = RESERVATION_FIELDS
            .iter()
            .find(|field| field.eq_ignore_ascii_case(&key))
        else {
            continue;
        };
        if key == *field {
            exact.push(*field);
            canonical.insert(key, value);
        } else if !exact.contains(field) {
            canonical.insert(field.to_string(), value);
        }
    }

    canonical
}
