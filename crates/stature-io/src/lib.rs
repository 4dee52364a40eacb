//! stature-io: Browser I/O and Dioxus component library.
//!
//! Handles photo uploads and data-URL encoding, report downloads,
//! analytics events, and provides the reusable UI components for the
//! stature web application.

pub mod analytics;
pub mod components;
pub mod dataurl;
pub mod download;

pub use components::{
    AnalysisLoading, ConfigPanel, EditPanel, LandmarkOverlay, NewsPanel, PhotoUpload,
    ResultsPanel,
};
pub use dataurl::UploadError;
