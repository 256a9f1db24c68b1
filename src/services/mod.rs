// ABOUTME: Service layer wiring the repository to the decision-support components
// ABOUTME: Protocol-agnostic entry points reusable by any outer surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savor Pantry Intelligence

//! Domain service layer

/// Repository-backed facade over the intelligence components
pub mod decision_support;

pub use decision_support::DecisionSupportService;
