use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use nba_ratings::{
    AppError, CdnLogoSource, ChartModel, ChartRenderer, ChartVariant, NbaStatsClient, RunOptions,
    chart::PointMarker, constants::logos::LOGO_SIZE_PX, run_with,
};
use serde_json::json;
use std::io::Cursor;
use std::sync::Mutex;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex, query_param},
};

#[derive(Default)]
struct CapturingRenderer {
    rendered: Mutex<Option<ChartModel>>,
}

impl ChartRenderer for CapturingRenderer {
    fn render(&self, model: &ChartModel) -> Result<(), AppError> {
        *self.rendered.lock().unwrap() = Some(model.clone());
        Ok(())
    }
}

fn metrics_body() -> serde_json::Value {
    json!({
        "resource": "teamestimatedmetrics",
        "parameters": {"LeagueID": "00", "Season": "2024-25", "SeasonType": "Regular Season"},
        "resultSet": {
            "name": "TeamEstimatedMetrics",
            "headers": [
                "TEAM_NAME", "TEAM_ID", "GP", "W", "L", "W_PCT", "MIN",
                "E_OFF_RATING", "E_DEF_RATING", "E_NET_RATING", "E_PACE"
            ],
            "rowSet": [
                ["Utah Jazz", 1610612762, 82, 17, 65, 0.207, 3966.0, 110.2, 119.9, -9.7, 100.9],
                ["Boston Celtics", 1610612738, 82, 61, 21, 0.744, 3961.0, 122.2, 110.6, 11.6, 97.0],
                ["New Orleans Pelicans", 1610612740, 82, 21, 61, 0.256, 3956.0, 108.9, 117.1, -8.2, 99.2]
            ]
        }
    })
}

fn png_bytes() -> Vec<u8> {
    let logo = RgbaImage::from_pixel(16, 16, Rgba([0, 122, 51, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(logo)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

async fn mount_metrics(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/teamestimatedmetrics"))
        .and(query_param("LeagueID", "00"))
        .and(query_param("Season", "2024-25"))
        .and(query_param("SeasonType", "Regular Season"))
        .respond_with(ResponseTemplate::new(200).set_body_json(metrics_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_logo_chart_from_http_sources() {
    let server = MockServer::start().await;
    mount_metrics(&server).await;

    Mock::given(method("GET"))
        .and(path("/i/teamlogos/nba/500/utah.png"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/i/teamlogos/nba/500/[a-z]+\.png$"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes()))
        .mount(&server)
        .await;

    let provider = NbaStatsClient::with_client(reqwest::Client::new(), &server.uri(), "2024-25");
    let logos = CdnLogoSource::with_client(reqwest::Client::new(), &server.uri());
    let renderer = CapturingRenderer::default();

    let summary = run_with(
        &provider,
        &logos,
        &renderer,
        RunOptions {
            variant: ChartVariant::Logos,
            ..RunOptions::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(summary.teams_plotted, 3);
    assert_eq!(summary.logos_resolved, Some(2));

    let model = renderer.rendered.lock().unwrap().clone().unwrap();
    // Celtics, Pelicans, Jazz by win percentage
    let xs: Vec<f64> = model.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![122.2, 108.9, 110.2]);

    match &model.points[0].marker {
        PointMarker::Logo(Some(logo)) => {
            assert_eq!(logo.dimensions(), (LOGO_SIZE_PX, LOGO_SIZE_PX));
        }
        other => panic!("Expected a resolved logo, got {other:?}"),
    }
    assert!(matches!(model.points[2].marker, PointMarker::Logo(None)));

    assert_eq!(model.layout.x_limits.start, 107.0);
    assert_eq!(model.layout.x_limits.end, 124.0);
    assert_eq!(model.layout.y_limits.start, 121.0);
    assert_eq!(model.layout.y_limits.end, 109.0);
}

#[tokio::test]
async fn test_labeled_chart_from_http_source() {
    let server = MockServer::start().await;
    mount_metrics(&server).await;

    let provider = NbaStatsClient::with_client(reqwest::Client::new(), &server.uri(), "2024-25");
    let logos = CdnLogoSource::with_client(reqwest::Client::new(), &server.uri());
    let renderer = CapturingRenderer::default();

    let summary = run_with(&provider, &logos, &renderer, RunOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.teams_plotted, 3);
    assert_eq!(summary.logos_resolved, None);

    let model = renderer.rendered.lock().unwrap().clone().unwrap();
    let labels: Vec<&str> = model
        .points
        .iter()
        .filter_map(|p| p.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["Celtics", "Pelicans", "Jazz"]);
}

#[tokio::test]
async fn test_server_error_aborts_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teamestimatedmetrics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = NbaStatsClient::with_client(reqwest::Client::new(), &server.uri(), "2024-25");
    let logos = CdnLogoSource::with_client(reqwest::Client::new(), &server.uri());
    let renderer = CapturingRenderer::default();

    let error = run_with(&provider, &logos, &renderer, RunOptions::default())
        .await
        .unwrap_err();

    assert!(error.is_fetch_error());
    assert!(matches!(
        &error,
        AppError::Fetch { call, .. } if *call == "team estimated metrics"
    ));
    assert!(renderer.rendered.lock().unwrap().is_none());
}
