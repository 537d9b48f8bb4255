// libs/doctor-cell/src/services/directory.rs
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{Doctor, DoctorError};

const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/doctors.json");

/// Read-only roster collaborator.
pub trait DoctorSource: Send + Sync {
    fn doctors(&self) -> &[Doctor];
}

/// In-memory, read-only doctor roster. Order is fixture order.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, DoctorError> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if doctor.id.trim().is_empty() {
                return Err(DoctorError::Fixture(format!("doctor {:?} has an empty id", doctor.name)));
            }
            if !seen.insert(doctor.id.as_str()) {
                return Err(DoctorError::Fixture(format!("duplicate doctor id {}", doctor.id)));
            }
        }

        Ok(Self { doctors })
    }

    /// The roster bundled with the crate.
    pub fn from_fixture() -> Result<Self, DoctorError> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    pub fn from_json(json: &str) -> Result<Self, DoctorError> {
        let doctors: Vec<Doctor> = serde_json::from_str(json)?;
        Self::new(doctors)
    }

    pub fn from_path(path: &Path) -> Result<Self, DoctorError> {
        info!("Loading doctor roster from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Doctor, DoctorError> {
        self.find(id).ok_or_else(|| DoctorError::NotFound(id.to_string()))
    }

    /// Doctors whose name or specialization contains `query`, ignoring case.
    /// An empty query returns the whole roster.
    pub fn search(&self, query: &str) -> Vec<&Doctor> {
        let needle = query.to_lowercase();
        let matches: Vec<&Doctor> = self
            .doctors
            .iter()
            .filter(|d| d.matches_lowercase(&needle))
            .collect();

        debug!("Search {:?} matched {} of {} doctors", query, matches.len(), self.doctors.len());
        matches
    }
}

impl DoctorSource for DoctorDirectory {
    fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }
}
