use seatwatch_domain::SeatState;
use seatwatch_infra::{IBrowserSession, SweepConfig};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const SEAT_GRID_SELECTOR: &str = r#"[role="gridcell"]"#;
const COOKIE_OVERLAY_SELECTOR: &str = ".osano-cm-dialog";

/// A cell's trimmed text is its seat label; the cell is occupied when its
/// descendant button carries the unbookable style marker.
const COLLECT_SEAT_CELLS_SCRIPT: &str = r#"
return Array.from(document.querySelectorAll('[role="gridcell"]')).map(function (cell) {
    var button = cell.querySelector('button');
    return {
        label: cell.textContent.trim(),
        occupied: button !== null && button.classList.contains('cursor-not-allowed')
    };
});
"#;

const REMOVE_COOKIE_OVERLAY_SCRIPT: &str = r#"
var dialog = document.querySelector('.osano-cm-dialog');
if (dialog) dialog.remove();
"#;

/// The seat map sometimes renders no labeled cells until zoomed in. Returns
/// whether a zoom control was found and clicked.
const CLICK_ZOOM_CONTROL_SCRIPT: &str = r#"
var zoom = document.querySelector('.rounded-full.bg-gray-400.p-4');
if (zoom) { zoom.click(); return true; }
return false;
"#;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Seat grid did not appear within {0:?}")]
    GridTimeout(Duration),
    #[error("Unable to read the seat grid: {0}")]
    Page(#[from] anyhow::Error),
    #[error("Unexpected seat cell payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeatCellRaw {
    label: String,
    occupied: bool,
}

/// Extract seat occupancy from the already-navigated seating page.
pub async fn extract_seat_state(
    session: &dyn IBrowserSession,
    config: &SweepConfig,
) -> Result<SeatState, ExtractError> {
    if session
        .wait_for_selector(SEAT_GRID_SELECTOR, config.grid_timeout)
        .await
        .is_err()
    {
        return Err(ExtractError::GridTimeout(config.grid_timeout));
    }

    dismiss_cookie_overlay(session, config).await;

    let mut cells = collect_cells(session).await?;
    if cells.iter().all(|cell| cell.label.is_empty()) && zoom_in(session).await {
        cells = collect_cells(session).await?;
    }

    let mut all = HashSet::new();
    let mut occupied = HashSet::new();
    for cell in cells {
        if cell.label.is_empty() {
            // Decorative grid cell (aisle, gap), not a seat
            continue;
        }
        if cell.occupied {
            occupied.insert(cell.label.clone());
        }
        all.insert(cell.label);
    }

    Ok(SeatState::new(all, occupied))
}

async fn collect_cells(session: &dyn IBrowserSession) -> Result<Vec<SeatCellRaw>, ExtractError> {
    let cells = session.execute_script(COLLECT_SEAT_CELLS_SCRIPT).await?;
    Ok(serde_json::from_value(cells)?)
}

/// Best-effort click of the seat-map zoom control.
async fn zoom_in(session: &dyn IBrowserSession) -> bool {
    match session.execute_script(CLICK_ZOOM_CONTROL_SCRIPT).await {
        Ok(clicked) => clicked.as_bool().unwrap_or(false),
        Err(e) => {
            debug!("Failed to click the zoom control: {:?}", e);
            false
        }
    }
}

/// Best-effort dismissal of the cookie/consent dialog. The overlay being
/// absent is the common case and not an error.
async fn dismiss_cookie_overlay(session: &dyn IBrowserSession, config: &SweepConfig) {
    if session
        .wait_for_selector(COOKIE_OVERLAY_SELECTOR, config.overlay_timeout)
        .await
        .is_err()
    {
        return;
    }
    if let Err(e) = session.execute_script(REMOVE_COOKIE_OVERLAY_SCRIPT).await {
        debug!("Failed to remove cookie overlay: {:?}", e);
    }
}
