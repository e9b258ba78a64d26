/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
// for now we don't need any new feature but we might remove this in the future
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod graphs;
pub mod par;
pub mod traits;
pub mod utils;
pub mod visits;

pub use visits::{parallel_bfs, sequential_bfs};

pub mod prelude {
    pub use crate::graphs::prelude::*;
    pub use crate::par::{par_for, par_scan, try_par_for, DEFAULT_THRESHOLD};
    pub use crate::thread_pool;
    pub use crate::traits::*;
    pub use crate::visits::{
        parallel_bfs, sequential_bfs, BfsError, Claims, ParLayered, Seq, UNREACHABLE,
    };
}
