//! Transport-method selection observed through the full client flow.

#[cfg(test)]
mod tests {
    use http::Method;
    use wayfarer_directions_core::Directions;
    use wayfarer_directions_http::MAX_URL_SIZE;
    use wayfarer_directions_model::Point;

    use crate::{berlin_directions, client, ok_body, StubTransport};

    fn many_coordinates() -> Vec<Point> {
        (0..600)
            .map(|i| Point::new(13.4 + f64::from(i) * 0.0001, 52.5 + f64::from(i) * 0.0001))
            .collect()
    }

    #[tokio::test]
    async fn test_should_issue_short_requests_as_get() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        client(transport.clone())
            .execute(&berlin_directions())
            .await
            .unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::GET);
        assert!(request.url.len() < MAX_URL_SIZE);
        assert!(request.url.contains("/directions/v5/wayfarer/driving/13.4132,52.5219;"));
        assert!(request.url.contains("access_token=pk.integration"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_should_fall_back_to_post_for_oversized_urls() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let directions = Directions::builder()
            .access_token("pk.integration")
            .waypoints(many_coordinates())
            .build()
            .unwrap();

        client(transport.clone()).execute(&directions).await.unwrap();

        let request = transport.only_request();
        assert_eq!(request.method, Method::POST);
        let request_body = request.body.unwrap();
        assert!(request_body.starts_with("coordinates="));
        assert!(request_body.contains("access_token=pk.integration"));
    }

    #[tokio::test]
    async fn test_should_honor_an_explicit_post_pin() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let directions = Directions::builder()
            .access_token("pk.integration")
            .origin(Point::new(13.4132, 52.5219))
            .destination(Point::new(13.3759, 52.5096))
            .post()
            .build()
            .unwrap();

        client(transport.clone()).execute(&directions).await.unwrap();
        assert_eq!(transport.only_request().method, Method::POST);
    }

    #[tokio::test]
    async fn test_should_re_evaluate_method_per_request() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let c = client(transport.clone());

        c.execute(&berlin_directions()).await.unwrap();
        let long = Directions::builder()
            .access_token("pk.integration")
            .waypoints(many_coordinates())
            .build()
            .unwrap();
        c.execute(&long).await.unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].method, Method::POST);
    }

    #[tokio::test]
    async fn test_should_send_user_agent_header() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let directions = Directions::builder()
            .access_token("pk.integration")
            .origin(Point::new(13.4132, 52.5219))
            .destination(Point::new(13.3759, 52.5096))
            .client_app_name("integration-suite")
            .build()
            .unwrap();

        client(transport.clone()).execute(&directions).await.unwrap();

        let request = transport.only_request();
        let agent = request
            .headers
            .iter()
            .find(|(name, _)| name == "user-agent")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert!(agent.starts_with("integration-suite wayfarer-rust/"));
    }
}
