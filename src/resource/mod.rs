// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Resource helpers
//!
//! Following Keystone concepts are covered:
//!
//! ## Domain
//!
//! Domains are a collection of projects and users that define administrative
//! boundaries for managing Identity entities.
//!
//! ## Project
//!
//! A container that groups or isolates resources or identity objects.

pub mod domain;
pub mod project;

pub use domain::*;
pub use project::*;
