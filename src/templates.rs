//! HTML view layer
//!
//! askama templates for the input form and the per-day results table.

use crate::models::DayRecord;
use askama::Template;

/// Input form, optionally with an error banner
#[derive(Template)]
#[template(path = "front.html")]
pub struct FrontTemplate {
    pub error: Option<String>,
}

/// Per-day results for a resolved location
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    /// Location as typed by the user
    pub location: String,
    /// Country of the geocoded result
    pub country: String,
    pub weather_data: Vec<DayRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_template_without_error() {
        let html = FrontTemplate { error: None }.render().unwrap();
        assert!(html.contains("action=\"/weather\""));
        assert!(html.contains("name=\"location\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_front_template_with_error() {
        let html = FrontTemplate {
            error: Some("Location not found.".to_string()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Location not found."));
        assert!(html.contains("class=\"error\""));
    }

    #[test]
    fn test_results_template_lists_each_day() {
        let html = ResultsTemplate {
            location: "Paris".to_string(),
            country: "France".to_string(),
            weather_data: vec![
                DayRecord {
                    date: "2024-01-01".to_string(),
                    temp_day: 5.0,
                    temp_night: 1.0,
                    humidity: 80.0,
                },
                DayRecord {
                    date: "2024-01-02".to_string(),
                    temp_day: 7.5,
                    temp_night: -0.5,
                    humidity: 72.0,
                },
            ],
        }
        .render()
        .unwrap();

        assert!(html.contains("Paris"));
        assert!(html.contains("France"));
        assert!(html.contains("2024-01-01"));
        assert!(html.contains("2024-01-02"));
        assert!(html.contains("7.5"));
    }
}
