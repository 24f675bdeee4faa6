//! Full round-trip flow: build, execute, reconcile, rebuild.

#[cfg(test)]
mod tests {
    use wayfarer_directions_core::{Directions, DirectionsBuilder};
    use wayfarer_directions_model::{
        Annotation, Approach, Bearing, Overview, Point, Profile, RouteOptions,
    };

    use crate::{berlin_directions, client, ok_body, StubTransport};

    #[tokio::test]
    async fn test_should_annotate_every_route_with_request_context() {
        let (body, uuid) = ok_body(2);
        let transport = StubTransport::replying(body);
        let response = client(transport.clone())
            .execute(&berlin_directions())
            .await
            .unwrap();

        assert_eq!(response.routes.len(), 2);
        for (index, route) in response.routes.iter().enumerate() {
            assert_eq!(route.route_index.as_deref(), Some(index.to_string().as_str()));
            let options = route.route_options.as_ref().unwrap();
            assert_eq!(options.request_uuid, uuid);
            assert_eq!(options.profile, Profile::Driving);
            assert_eq!(options.steps, Some(true));
            assert_eq!(options.coordinates.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_should_reissue_a_mutated_request_from_route_options() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let directions = berlin_directions();
        let response = client(transport.clone()).execute(&directions).await.unwrap();

        let options = response.routes[0].route_options.as_ref().unwrap();
        let reissued = DirectionsBuilder::from_route_options(options)
            .unwrap()
            .destination(Point::new(13.3777, 52.5163))
            .build()
            .unwrap();

        // The destination setter appends; everything else carries over.
        assert_eq!(reissued.coordinates().len(), 3);
        assert_eq!(reissued.coordinates()[2], Point::new(13.3777, 52.5163));
        assert_eq!(reissued.base_url(), directions.base_url());
        assert_eq!(reissued.profile(), directions.profile());
    }

    #[tokio::test]
    async fn test_should_rebuild_value_equal_directions_from_options() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let directions = Directions::builder()
            .access_token("pk.integration")
            .origin(Point::new(13.4132, 52.5219))
            .destination(Point::new(13.3759, 52.5096))
            .add_waypoint(Point::new(13.39, 52.51))
            .bearings(vec![Some(Bearing::new(45.0, 90.0)), None, None])
            .radiuses(vec![30.0, f64::INFINITY, 25.5])
            .approaches(vec![None, Some(Approach::Curb), Some(Approach::Unrestricted)])
            .waypoint_indices(vec![0, 2])
            .waypoint_names(vec![
                "Alexanderplatz".to_owned(),
                String::new(),
                "Potsdamer Platz".to_owned(),
            ])
            .annotations(vec![Annotation::Distance, Annotation::Duration])
            .overview(Overview::Full)
            .steps(true)
            .language("de")
            .build()
            .unwrap();

        let response = client(transport).execute(&directions).await.unwrap();
        let options = response.routes[0].route_options.as_ref().unwrap();

        let rebuilt = DirectionsBuilder::from_route_options(options)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(rebuilt, directions);
    }

    #[tokio::test]
    async fn test_should_round_trip_route_options_through_json() {
        let (body, _) = ok_body(1);
        let transport = StubTransport::replying(body);
        let response = client(transport)
            .execute(&berlin_directions())
            .await
            .unwrap();

        let options = response.routes[0].route_options.as_ref().unwrap();
        let revived = RouteOptions::from_json(&options.to_json()).unwrap();
        assert_eq!(&revived, options);
    }

    #[tokio::test]
    async fn test_should_deliver_response_through_enqueue_callback() {
        let (body, uuid) = ok_body(1);
        let transport = StubTransport::replying(body);
        let (tx, rx) = tokio::sync::oneshot::channel();

        client(transport)
            .enqueue(berlin_directions(), move |result| {
                tx.send(result).expect("receiver alive");
            })
            .await
            .unwrap();

        let response = rx.await.unwrap().unwrap();
        assert_eq!(
            response.routes[0]
                .route_options
                .as_ref()
                .unwrap()
                .request_uuid,
            uuid
        );
    }
}
