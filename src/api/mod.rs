//! Teachable API access layer.
//!
//! Three thin fetch wrappers over a shared `reqwest` client. Non-2xx
//! responses collapse to a fixed per-endpoint message; transport and decode
//! failures propagate unmodified. No retries, no timeouts, no rate limiting.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    Course, CoursesResponse, Enrollment, EnrollmentsResponse, Student, StudentsResponse,
};
