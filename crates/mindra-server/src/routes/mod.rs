// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP handlers.

pub mod contact;
pub mod health;
pub mod i18n;
pub mod pages;
pub mod portfolio;
