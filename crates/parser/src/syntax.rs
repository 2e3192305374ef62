// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Argument prefixes shared by the command parsers.

use crate::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("/name");
pub const PREFIX_NRIC: Prefix = Prefix::new("/nric");
pub const PREFIX_PHONE: Prefix = Prefix::new("/phone");
pub const PREFIX_EMAIL: Prefix = Prefix::new("/email");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("/address");
pub const PREFIX_HIRE: Prefix = Prefix::new("/hire");

pub const PREFIX_LEAVE_START: Prefix = Prefix::new("/start");
pub const PREFIX_LEAVE_END: Prefix = Prefix::new("/end");
pub const PREFIX_REASON: Prefix = Prefix::new("/reason");

pub const PREFIX_ATTENDANCE_ABSENT: Prefix = Prefix::new("/absent");
