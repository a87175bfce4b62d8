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
//! Random names for the test resources.
use rand::distr::{Alphanumeric, SampleString};
use serde_json::Value;

/// Prefix of every resource name generated by the helpers.
pub const RANDOM_NAME_PREFIX: &str = "ACPTTEST";

/// Number of random characters following the prefix.
pub const RANDOM_NAME_LENGTH: usize = 8;

/// Return `prefix` followed by `n` random alphanumeric characters.
pub fn random_string<P: AsRef<str>>(prefix: P, n: usize) -> String {
    let mut res = String::with_capacity(prefix.as_ref().len() + n);
    res.push_str(prefix.as_ref());
    res.push_str(&Alphanumeric.sample_string(&mut rand::rng(), n));
    res
}

/// Name for a new test resource.
pub fn random_name() -> String {
    random_string(RANDOM_NAME_PREFIX, RANDOM_NAME_LENGTH)
}

/// Check whether the name has the shape produced by [`random_name`].
pub fn is_random_name<N: AsRef<str>>(name: N) -> bool {
    name.as_ref()
        .strip_prefix(RANDOM_NAME_PREFIX)
        .is_some_and(|suffix| {
            suffix.len() == RANDOM_NAME_LENGTH && suffix.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

/// Drop `name` from the additional attributes of a create request.
///
/// The attributes are flattened into the request body after the name, so a
/// `name` key in them would replace the random one.
pub(crate) fn without_name(extra: Option<Value>) -> Option<Value> {
    match extra {
        Some(Value::Object(mut attrs)) => {
            attrs.remove("name");
            Some(Value::Object(attrs))
        }
        other => other,
    }
}
