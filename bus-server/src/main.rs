use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bus_server::fares::current_fares;
use bus_server::gps::{
    CachedTrackerClient, DEFAULT_POLL_PERIOD, TrackerCacheConfig, TrackerClient, TrackerConfig,
    VehiclePoller,
};
use bus_server::mailer::{MailerClient, MailerConfig};
use bus_server::schedule::{ArrivalBoard, argentine_holidays_2025, data::montevera_network};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load and validate the published schedule data. Broken data is a
    // data-authoring problem; fail fast instead of serving nonsense.
    let timetable = montevera_network().expect("published timetable data is invalid");
    let board = ArrivalBoard::new(Arc::new(timetable), Arc::new(argentine_holidays_2025()));

    // Tracker session key from the environment
    let session_key = std::env::var("TRACKER_SESSION").unwrap_or_else(|_| {
        tracing::warn!("TRACKER_SESSION not set; vehicle positions will be unavailable");
        String::new()
    });
    let tracker_client =
        TrackerClient::new(TrackerConfig::new(&session_key)).expect("failed to create tracker client");
    let tracker = Arc::new(CachedTrackerClient::new(
        tracker_client,
        &TrackerCacheConfig::default(),
    ));

    // The background poller keeps the consultant page's fleet snapshot warm
    let poller = VehiclePoller::start(tracker.clone(), DEFAULT_POLL_PERIOD);
    let fleet_feed = poller.subscribe();

    // The contact mailer is optional: without an API key the server still
    // runs and the contact endpoint reports the feature as unavailable
    let mailer = match std::env::var("RESEND_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            let from = std::env::var("CONTACT_FROM")
                .unwrap_or_else(|_| "web@montevera.com.ar".to_string());
            let to = std::env::var("CONTACT_TO")
                .unwrap_or_else(|_| "info@montevera.com.ar".to_string());
            Some(MailerClient::new(MailerConfig::new(api_key, from, to))
                .expect("failed to create mailer"))
        }
        _ => {
            tracing::warn!("RESEND_API_KEY not set; contact form disabled");
            None
        }
    };

    let state = AppState::new(board, current_fares(), tracker, fleet_feed, mailer);
    let app = create_router(state, "static");

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    tracing::info!(%addr, "Monte Vera web server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");

    poller.stop();
}
