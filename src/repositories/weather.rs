use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::Result;

/// One persisted weather observation. `datetime` is caller-supplied text,
/// stored verbatim without parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeatherReading {
    pub id: i64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub datetime: Option<String>,
}

/// Partial field set accepted from both ingestion paths (queue message
/// bodies and POST /weather bodies). Any subset of fields is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWeatherReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub datetime: Option<String>,
}

#[derive(Clone)]
pub struct WeatherRepository {
    pool: PgPool,
}

impl WeatherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new reading; the store assigns the next id.
    pub async fn save(&self, new: &NewWeatherReading) -> Result<WeatherReading> {
        let reading = sqlx::query_as::<_, WeatherReading>(
            r#"
            INSERT INTO weather (temperature, humidity, datetime)
            VALUES ($1, $2, $3)
            RETURNING id, temperature, humidity, datetime
            "#,
        )
        .bind(new.temperature)
        .bind(new.humidity)
        .bind(new.datetime.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(reading)
    }

    /// Overwrite an existing row's fields by id. No caller in this service
    /// supplies ids, so this path is only exercised by tests.
    pub async fn update(&self, reading: &WeatherReading) -> Result<WeatherReading> {
        let updated = sqlx::query_as::<_, WeatherReading>(
            r#"
            UPDATE weather
            SET temperature = $2, humidity = $3, datetime = $4
            WHERE id = $1
            RETURNING id, temperature, humidity, datetime
            "#,
        )
        .bind(reading.id)
        .bind(reading.temperature)
        .bind(reading.humidity)
        .bind(reading.datetime.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Every stored reading, eagerly materialized, in insertion order.
    pub async fn find_all(&self) -> Result<Vec<WeatherReading>> {
        let readings = sqlx::query_as::<_, WeatherReading>(
            r#"
            SELECT id, temperature, humidity, datetime
            FROM weather
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_full_field_set() {
        let reading: NewWeatherReading = serde_json::from_str(
            r#"{"temperature": 21.5, "humidity": 40, "datetime": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(reading.temperature, Some(21.5));
        assert_eq!(reading.humidity, Some(40.0));
        assert_eq!(reading.datetime.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn deserialize_partial_field_set() {
        let reading: NewWeatherReading =
            serde_json::from_str(r#"{"temperature": -3.2}"#).unwrap();

        assert_eq!(reading.temperature, Some(-3.2));
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.datetime, None);
    }

    #[test]
    fn deserialize_empty_object() {
        let reading: NewWeatherReading = serde_json::from_str("{}").unwrap();
        assert_eq!(reading, NewWeatherReading::default());
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let reading: NewWeatherReading =
            serde_json::from_str(r#"{"humidity": 55, "pressure": 1013}"#).unwrap();

        assert_eq!(reading.humidity, Some(55.0));
        assert_eq!(reading.temperature, None);
    }

    #[test]
    fn datetime_is_not_parsed() {
        // Any text is accepted; the store keeps it verbatim.
        let reading: NewWeatherReading =
            serde_json::from_str(r#"{"datetime": "not a timestamp"}"#).unwrap();

        assert_eq!(reading.datetime.as_deref(), Some("not a timestamp"));
    }

    #[test]
    fn serialize_reading_as_json() {
        let reading = WeatherReading {
            id: 1,
            temperature: Some(21.5),
            humidity: Some(40.0),
            datetime: Some("2024-01-01T00:00:00Z".to_string()),
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["temperature"], 21.5);
        assert_eq!(json["humidity"], 40.0);
        assert_eq!(json["datetime"], "2024-01-01T00:00:00Z");
    }
}
