//! Integration tests for the Box Office REST client.
//!
//! Model tests check serialization of the service payloads. The `http_client`
//! tests run the full request path against a local wiremock server. For live
//! tests, enable the `live_tests` feature and set the `BOXOFFICE_*` variables.

use boxoffice_sdk::api::types::basket::{Basket, BasketStatus, UpsertBasketRequest};
use boxoffice_sdk::api::types::content::Location;
use boxoffice_sdk::api::types::inventory::Availability;
use boxoffice_sdk::api::types::pricing::ExchangeRate;
use boxoffice_sdk::api::*;
use boxoffice_sdk::auth::Credentials;

// =============================================================================
// Type Serialization/Deserialization Tests
// =============================================================================

mod basket_types {
    use super::*;

    #[test]
    fn test_basket_deserialize() {
        let json = r#"{
            "reference": "123456",
            "checksum": "ab12",
            "channelId": "web",
            "status": "active",
            "reservations": [{
                "id": 1,
                "venueId": "138",
                "productId": "1001",
                "date": "2026-03-01T19:30:00+00:00",
                "quantity": 2,
                "items": [
                    {"aggregateReference": "ref-1", "row": "A", "number": "1"},
                    {"aggregateReference": "ref-2", "row": "A", "number": "2"}
                ]
            }]
        }"#;
        let basket: Basket = serde_json::from_str(json).unwrap();
        assert_eq!(basket.reference, "123456");
        assert_eq!(basket.status, BasketStatus::Active);
        assert_eq!(basket.reservations[0].items.len(), 2);
        assert_eq!(basket.ticket_count(), 2);
    }

    #[test]
    fn test_upsert_request_skips_absent_fields() {
        let request = UpsertBasketRequest::new("web");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["channelId"], "web");
        assert!(json.get("reference").is_none());
        assert!(json.get("coupon").is_none());
    }
}

mod inventory_types {
    use super::*;

    #[test]
    fn test_availability_groupings_cross_areas() {
        let json = r#"{
            "isAvailable": true,
            "areas": [
                {"areaId": "S", "name": "Stalls", "availableCount": 2, "groupings": [
                    {"groupingId": "g1", "availableCount": 2, "isAvailable": true, "aggregateReference": "r1"}
                ]},
                {"areaId": "C", "name": "Circle", "availableCount": 1, "groupings": [
                    {"groupingId": "g2", "availableCount": 1, "isAvailable": true, "aggregateReference": "r2"}
                ]}
            ]
        }"#;
        let availability: Availability = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = availability.groupings().map(|g| g.grouping_id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2"]);
    }
}

mod pricing_types {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_exchange_rate_reads_float_rate() {
        let json = r#"{
            "id": 7,
            "baseCurrency": "GBP",
            "targetCurrency": "USD",
            "rate": 1.25,
            "datetimeOfSourceRate": "2026-01-10T09:00:00+00:00"
        }"#;
        let rate: ExchangeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.rate, Decimal::from_str("1.25").unwrap());
        assert!(rate.protection_margin.is_none());
    }

    #[test]
    fn test_price_to_decimal() {
        let price = Price::new(4550, "GBP");
        assert_eq!(price.to_decimal(), Some(Decimal::from_str("45.50").unwrap()));
    }
}

mod content_types {
    use super::*;

    #[test]
    fn test_location_tree_deserialize() {
        let json = r#"[{"id": 1, "name": "London", "subLocations": [{"id": 2, "name": "West End"}]}]"#;
        let locations: Vec<Location> = serde_json::from_str(json).unwrap();
        assert_eq!(locations[0].sub_locations[0].name, "West End");
    }
}

// =============================================================================
// Response Mapping Tests
// =============================================================================

mod response_mapping {
    use super::*;

    #[test]
    fn test_error_message_and_details() {
        let body = r#"{
            "request": {"body": {"channelId": "web"}, "query": {"page": "1"}, "urlParams": {"reference": "123"}},
            "response": "",
            "context": {"errors": [{"message": "A"}, {"message": "B"}]}
        }"#;
        let response: ApiResponse<Basket> = ApiResponse::from_raw(RawResponse::new(400, body));
        assert!(!response.is_successful());

        let err = response.data_or_error().unwrap_err();
        let exception = err.exception().unwrap();
        assert_eq!(exception.message(), "A; B");
        assert_eq!(exception.status_code, 400);
        let details = exception.details().unwrap();
        let keys: Vec<_> = details.keys().map(String::as_str).collect();
        assert_eq!(keys, ["body", "page", "reference"]);
        assert_eq!(details["body"]["channelId"], "web");
    }

    #[test]
    fn test_empty_errors_use_default_message() {
        let body = r#"{"response": "", "context": {"errors": []}}"#;
        let response: ApiResponse<Basket> = ApiResponse::from_raw(RawResponse::new(500, body));
        assert_eq!(response.exception().message(), DEFAULT_EXCEPTION_MESSAGE);
        let raw = response.data_or_raw_error().unwrap_err();
        assert_eq!(raw.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_data_or_default_on_failure() {
        let response: ApiResponse<Vec<String>> =
            ApiResponse::from_raw(RawResponse::new(404, r#"{"response": ["x"]}"#));
        assert!(response.data().is_none());
        assert!(response.data_or_default().is_empty());
    }

    #[test]
    fn test_good_codes() {
        for code in GOOD_STATUS_CODES {
            assert!(is_good_response(&RawResponse::new(code, "")), "{} should be good", code);
        }
        assert!(!is_good_response(&RawResponse::new(201, "")));
        assert!(!is_good_response(&RawResponse::transport_failure("timed out")));
    }
}

// =============================================================================
// HTTP Client Tests
// =============================================================================

#[cfg(feature = "http")]
mod http_client {
    use super::*;
    use boxoffice_sdk::client::{BoxOfficeClient, ServiceCore};
    use boxoffice_sdk::config::{ApiContext, ApiErrorEvent};
    use boxoffice_sdk::network::Service;
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASKET: &str = r#"{"response": {"reference": "123456", "channelId": "web"}}"#;

    fn context(server: &MockServer, credentials: Credentials) -> ApiContext {
        let mut builder = ApiContext::builder()
            .credentials(credentials)
            .correlation_id("corr-1")
            .affiliate_id("partner");
        for service in [
            Service::Basket,
            Service::Checkout,
            Service::Payment,
            Service::Pricing,
            Service::Inventory,
            Service::Venue,
            Service::Content,
        ] {
            builder = builder.base_url(service, server.uri());
        }
        builder.build().unwrap()
    }

    #[tokio::test]
    async fn test_basic_auth_and_default_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/baskets/123456"))
            .and(header("authorization", "Basic dTpw"))
            .and(header("x-correlation-id", "corr-1"))
            .and(header("affiliateId", "partner"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-correlation-id", "corr-1")
                    .set_body_string(BASKET),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = BoxOfficeClient::new(context(&server, Credentials::basic("u", "p")));
        let basket = client.basket().get_basket("123456").await.unwrap();
        assert_eq!(basket.channel_id, "web");
    }

    #[tokio::test]
    async fn test_bearer_token_can_be_swapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/baskets/123456"))
            .and(header("authorization", "Bearer second"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BASKET))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = context(&server, Credentials::bearer("first"));
        ctx.set_access_token("second").await;
        let client = BoxOfficeClient::new(ctx);
        client.basket().get_basket("123456").await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_response_is_sent_twice_and_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/agents/a1/bookings/B99/confirm"))
            .and(body_json(serde_json::json!({"channelId": "web"})))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"context": {"errors": [{"message": "Booking already confirmed"}]}}"#,
            ))
            .expect(2)
            .mount(&server)
            .await;

        let events: Arc<Mutex<Vec<ApiErrorEvent>>> = Arc::default();
        let sink = events.clone();
        let ctx = ApiContext::builder()
            .base_url(Service::Checkout, server.uri())
            .on_error(move |event| sink.lock().unwrap().push(event.clone()))
            .build()
            .unwrap();
        let client = BoxOfficeClient::new(ctx);

        let request = boxoffice_sdk::api::types::checkout::ConfirmBookingRequest {
            channel_id: "web".to_string(),
            payment_id: None,
        };
        let err = client
            .checkout()
            .confirm_booking("a1", "B99", &request)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Booking already confirmed");
        assert_eq!(err.status_code(), Some(400));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service, Service::Checkout);
        assert_eq!(events[0].status_code, 400);
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/venues"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/elsewhere"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let core = ServiceCore::new(Service::Venue, context(&server, Credentials::anonymous()));
        let params = core.request(Method::Get, "api/v1/venues").build();
        let response = core.execute::<serde_json::Value>(params).await;
        assert!(response.is_successful());
        assert_eq!(response.status_code(), 302);
    }

    #[tokio::test]
    async fn test_query_parameters_reach_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/admin/exchange_rates"))
            .and(query_param("baseCurrency", "GBP"))
            .and(query_param("targetCurrency", "USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"response": {"items": [{"id": 1, "baseCurrency": "GBP", "targetCurrency": "USD", "rate": 1.3, "datetimeOfSourceRate": "2026-01-10T09:00:00+00:00"}]}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = BoxOfficeClient::new(context(&server, Credentials::anonymous()));
        let params = boxoffice_sdk::api::types::pricing::ExchangeRateParams::new()
            .with_currencies("GBP", "USD");
        let rates = client.pricing().get_exchange_rates(&params).await.unwrap();
        assert_eq!(rates.len(), 1);
    }

    #[tokio::test]
    async fn test_correlation_id_is_read_from_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/locations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-correlation-id", "corr-1")
                    .set_body_string(r#"{"response": []}"#),
            )
            .mount(&server)
            .await;

        let core = ServiceCore::new(Service::Content, context(&server, Credentials::anonymous()));
        let params = core.request(Method::Get, "api/v1/locations").build();
        let response = core.execute::<Vec<Location>>(params).await;
        assert_eq!(response.correlation_id(), Some("corr-1"));
        assert!(response.data_or_error().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_status_zero() {
        let ctx = ApiContext::builder()
            .base_url(Service::Venue, "http://127.0.0.1:9")
            .timeout_secs(2)
            .build()
            .unwrap();
        let err = BoxOfficeClient::new(ctx)
            .venue()
            .get_venues()
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(0));
    }
}

// =============================================================================
// Live API Tests
// =============================================================================

#[cfg(feature = "live_tests")]
mod live_tests {
    use boxoffice_sdk::client::BoxOfficeClient;
    use boxoffice_sdk::config::ApiContext;

    fn client() -> BoxOfficeClient {
        BoxOfficeClient::new(ApiContext::from_env().expect("BOXOFFICE_* variables"))
    }

    #[tokio::test]
    async fn test_live_get_locations() {
        let locations = client().content().get_locations().await;
        assert!(locations.is_ok(), "{:?}", locations.err());
    }

    #[tokio::test]
    async fn test_live_search_products() {
        let products = client().inventory().search_products("theatre").await;
        assert!(products.is_ok(), "{:?}", products.err());
    }
}
