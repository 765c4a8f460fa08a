// Start of file: /src/api/hello/models.rs

// * Wire types of the hello endpoints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Query string accepted by the GET endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct HelloWorldGetRequest {
    #[serde(rename = "queryParam")]
    pub query_param: Option<String>,
}

/// JSON body of `POST /hello/{pathParam}`. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HelloWorldRequestBody {
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Doe")]
    pub surname: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HelloWorldResponse {
    pub path_param: Option<String>,
    pub query_param: Option<String>,
    #[schema(example = "Hello world!")]
    pub hello_world: String,
    /// Day the response was produced (UTC), `YYYY-MM-DD`.
    #[serde(serialize_with = "serialize_local_date")]
    #[schema(value_type = String, format = Date, example = "2024-05-17")]
    pub local_date: NaiveDate,
    /// Instant the response was produced, millisecond precision, UTC.
    #[serde(serialize_with = "serialize_instant")]
    #[schema(value_type = String, format = DateTime, example = "2024-05-17T09:30:00.000Z")]
    pub instant: DateTime<Utc>,
}

impl HelloWorldResponse {
    /// Stamps the response with the current date and time.
    pub fn new(
        path_param: Option<String>,
        query_param: Option<String>,
        hello_world: impl Into<String>,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();
        Self {
            path_param,
            query_param,
            hello_world: hello_world.into(),
            local_date: now.date_naive(),
            instant: now,
        }
    }
}

fn serialize_local_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

fn serialize_instant<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&instant.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}


// End of file: /src/api/hello/models.rs
