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
//! # Identity v3 acceptance tests
//!
//! The tests talk to the service at `KEYSTONE_URL` using the admin
//! credentials (see `openstack_identity_acceptance::config`). They are
//! ignored by default, run them with `cargo test -- --ignored` once the
//! service is up.

#[cfg(test)]
mod assignment;
#[cfg(test)]
mod common;
#[cfg(test)]
mod identity;
#[cfg(test)]
mod resource;
