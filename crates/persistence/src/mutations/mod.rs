// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Inserts that need the generated identity read it back through
//! `last_insert_rowid()` from the `backend` module.

pub mod assignments;
pub mod roster;
pub mod trades;
