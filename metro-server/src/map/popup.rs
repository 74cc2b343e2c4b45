//! Popup HTML for map markers.

use askama::Template;

/// Popup for a station on the network map.
#[derive(Template)]
#[template(path = "popups/station.html")]
pub struct StationPopup<'a> {
    pub station: &'a str,
    pub emoji: &'a str,
    pub line: &'a str,
}

/// Popup for a step of a planned route.
#[derive(Template)]
#[template(path = "popups/step.html")]
pub struct StepPopup<'a> {
    pub station: &'a str,
    pub line: &'a str,
    pub transfer_to: Option<&'a str>,
}
