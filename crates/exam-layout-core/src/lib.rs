//! Exam Layout Core Types and Definitions
//!
//! This crate provides the foundational types shared by the exam layout engine
//! and anything that stores or renders its output. It includes:
//!
//! - **Identifiers**: Stable question identifiers ([`identifier::QuestionId`])
//! - **Questions**: Typed question bodies with their answer keys ([`question`] module)
//! - **Versions**: Sections, exam options, and test versions ([`version`] module)
//! - **Layouts**: The persisted shuffle record of one attempt ([`layout`] module)
//! - **Responses**: A student's submitted answers ([`response`] module)

pub mod error;
pub mod identifier;
pub mod layout;
pub mod question;
pub mod response;
pub mod version;

pub use error::LayoutError;
