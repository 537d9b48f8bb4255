use std::sync::Mutex;

use appointment_cell::Navigator;
use tracing::debug;

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, optionally `/?q=<query>`
    Landing { query: String },
    /// `/doctors/{id}`
    DoctorProfile(String),
    /// `/doctors/{id}/book`
    BookAppointment(String),
}

impl Route {
    pub fn home() -> Self {
        Route::Landing { query: String::new() }
    }

    /// `None` for paths outside the three known routes.
    pub fn parse(path: &str) -> Option<Self> {
        let (path, query_string) = match path.split_once('?') {
            Some((path, qs)) => (path, Some(qs)),
            None => (path, None),
        };

        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.trim_start_matches('/').split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::Landing {
                query: query_string.map(search_query).unwrap_or_default(),
            }),
            ["doctors", id] if !id.is_empty() => Some(Route::DoctorProfile(decode(id))),
            ["doctors", id, "book"] if !id.is_empty() => Some(Route::BookAppointment(decode(id))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing { query } if query.is_empty() => "/".to_string(),
            Route::Landing { query } => format!("/?q={}", urlencoding::encode(query)),
            Route::DoctorProfile(id) => format!("/doctors/{}", urlencoding::encode(id)),
            Route::BookAppointment(id) => format!("/doctors/{}/book", urlencoding::encode(id)),
        }
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn search_query(query_string: &str) -> String {
    query_string
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "q")
        .map(|(_, value)| decode(&value.replace('+', " ")))
        .unwrap_or_default()
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Mutex<Vec<String>>,
}

impl NavigationHistory {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Mutex::new(vec![start.to_string()]),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.entries.lock().ok().and_then(|entries| entries.last().cloned())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|entries| entries.clone()).unwrap_or_default()
    }
}

impl Navigator for NavigationHistory {
    fn navigate(&self, path: &str) {
        debug!("navigate -> {}", path);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(path.to_string());
        }
    }
}
