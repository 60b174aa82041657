// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod auth_surface;

pub use auth_surface::{AuthSurfaceAttacker, AUTH_SURFACE};
