//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::fares::FareMatrix;
use crate::gps::{CachedTrackerClient, VehiclePosition};
use crate::mailer::MailerClient;
use crate::schedule::ArrivalBoard;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Cheap to clone;
/// everything mutable-looking is behind an `Arc` or a `watch` receiver.
#[derive(Clone)]
pub struct AppState {
    /// The arrival calculator over the validated timetable
    pub board: ArrivalBoard,

    /// The fare table in force
    pub fares: Arc<FareMatrix>,

    /// Cached tracker client for on-demand vehicle queries
    pub tracker: Arc<CachedTrackerClient>,

    /// Last fleet snapshot published by the background poller
    pub fleet_feed: watch::Receiver<Vec<VehiclePosition>>,

    /// Contact mailer; `None` when no API key is configured
    pub mailer: Option<Arc<MailerClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        board: ArrivalBoard,
        fares: FareMatrix,
        tracker: Arc<CachedTrackerClient>,
        fleet_feed: watch::Receiver<Vec<VehiclePosition>>,
        mailer: Option<MailerClient>,
    ) -> Self {
        Self {
            board,
            fares: Arc::new(fares),
            tracker,
            fleet_feed,
            mailer: mailer.map(Arc::new),
        }
    }
}
