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
//! # Identity helpers
//!
//! Following identity concepts are covered:
//!
//! ## Group
//!
//! Groups are a collection of users owned by a domain.
//!
//! ## User
//!
//! A digital representation of a person, system, or service that uses
//! OpenStack cloud services.

pub mod group;
pub mod user;

pub use group::*;
pub use user::*;
