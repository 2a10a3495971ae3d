// Libricat - Personal Book Catalog
// Copyright (C) 2026 Libricat contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Catalog domain operations
//!
//! The registration pipeline (search, match, dedup, persist) and the
//! read-only query views over the store.

pub mod register;
pub mod views;

// Re-export commonly used types
pub use register::{register_by_title, register_from_candidates, RegisterOutcome};
pub use views::SUPPORTED_LANGUAGES;
