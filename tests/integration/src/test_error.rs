//! Error propagation through the full client flow.

#[cfg(test)]
mod tests {
    use wayfarer_directions_core::{Directions, DirectionsError};
    use wayfarer_directions_model::Point;

    use crate::{berlin_directions, client, StubTransport};

    #[tokio::test]
    async fn test_should_propagate_transport_failures_verbatim() {
        let transport = StubTransport::failing("tls handshake timed out");
        let err = client(transport)
            .execute(&berlin_directions())
            .await
            .unwrap_err();
        assert!(matches!(err, DirectionsError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "transport failure: tls handshake timed out"
        );
    }

    #[tokio::test]
    async fn test_should_surface_service_error_codes_as_decode_failures() {
        let transport = StubTransport::replying(
            r#"{"code": "InvalidInput", "message": "coordinates out of range"}"#,
        );
        let err = client(transport)
            .execute(&berlin_directions())
            .await
            .unwrap_err();
        assert!(matches!(err, DirectionsError::Decode { .. }));
        assert!(err.to_string().contains("InvalidInput"));
    }

    #[tokio::test]
    async fn test_should_fail_on_truncated_body() {
        let transport = StubTransport::replying(r#"{"code": "Ok", "routes": ["#);
        let err = client(transport)
            .execute(&berlin_directions())
            .await
            .unwrap_err();
        assert!(matches!(err, DirectionsError::Decode { .. }));
    }

    #[test]
    fn test_should_name_offending_field_in_validation_errors() {
        let err = Directions::builder()
            .access_token("pk.integration")
            .origin(Point::new(13.4, 52.5))
            .destination(Point::new(13.5, 52.6))
            .waypoint_indices(vec![1, 0])
            .build()
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid waypoint_indices:"));
    }

    #[test]
    fn test_should_not_issue_anything_for_invalid_requests() {
        let transport = StubTransport::failing("must never be called");
        let result = Directions::builder()
            .access_token("pk.integration")
            .origin(Point::new(13.4, 52.5))
            .build();
        assert!(result.is_err());
        assert!(transport.requests.lock().unwrap().is_empty());
    }
}
