//! Infrastructure layer providing external integrations.
//!
//! This module contains the HTTP clients that deliver control commands to the
//! remote device service.

pub mod clients;
