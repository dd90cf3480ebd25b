use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::debug;

use crate::sys::{SystemInfo, SystemInfoProvider};

pub(super) async fn system_info(
    State(provider): State<Arc<SystemInfoProvider>>,
) -> Json<SystemInfo> {
    let info = provider.get_system_info();
    debug!(version = %info.version, "Serving system info");

    Json(info)
}
