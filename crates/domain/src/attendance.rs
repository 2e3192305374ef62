// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Per-person attendance counters.
///
/// Invariant: `absent_day_count <= work_day_count`. Both counters start at
/// zero and only grow through the increment operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attendance {
    /// Working days recorded so far.
    work_day_count: u32,
    /// Working days on which the person was absent.
    absent_day_count: u32,
}

impl Attendance {
    /// Creates an `Attendance` from raw counter values.
    ///
    /// Signed inputs are accepted so that negative values coming from
    /// persisted data are reported instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` if either count is negative,
    /// does not fit the counter, or the absent count exceeds the work count.
    pub fn new(work_day_count: i64, absent_day_count: i64) -> Result<Self, DomainError> {
        let work: u32 = to_counter(work_day_count, "Work day count")?;
        let absent: u32 = to_counter(absent_day_count, "Absent day count")?;
        check_counts(work, absent)?;

        Ok(Self {
            work_day_count: work,
            absent_day_count: absent,
        })
    }

    /// Returns the number of working days recorded.
    #[must_use]
    pub const fn work_day_count(&self) -> u32 {
        self.work_day_count
    }

    /// Returns the number of absent days recorded.
    #[must_use]
    pub const fn absent_day_count(&self) -> u32 {
        self.absent_day_count
    }

    /// Percentage of working days the person was present.
    ///
    /// Returns exactly `100.0` when no working days have been recorded.
    #[must_use]
    pub fn attendance_rate(&self) -> f64 {
        if self.work_day_count == 0 {
            return 100.0;
        }
        let work: f64 = f64::from(self.work_day_count);
        let absent: f64 = f64::from(self.absent_day_count);
        (work - absent) / work * 100.0
    }

    /// Records one more working day.
    pub const fn increment_work_day(&mut self) {
        self.work_day_count = self.work_day_count.saturating_add(1);
    }

    /// Records one more absent day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` if the absent count would
    /// exceed the work count. The counters are left unchanged in that case.
    pub fn increment_absent_day(&mut self) -> Result<(), DomainError> {
        let absent: u32 = self.absent_day_count.saturating_add(1);
        check_counts(self.work_day_count, absent)?;
        self.absent_day_count = absent;
        Ok(())
    }

    /// Overwrites both counters after re-validating them.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvariantViolation` under the same conditions as
    /// [`Attendance::new`]; the counters are left unchanged on failure.
    pub fn set_counts(
        &mut self,
        work_day_count: i64,
        absent_day_count: i64,
    ) -> Result<(), DomainError> {
        *self = Self::new(work_day_count, absent_day_count)?;
        Ok(())
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} working days, {} absent ({:.2}%)",
            self.work_day_count,
            self.absent_day_count,
            self.attendance_rate()
        )
    }
}

fn to_counter(value: i64, label: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::InvariantViolation {
        reason: format!("{label} must be between 0 and {}, got {value}", u32::MAX),
    })
}

fn check_counts(work: u32, absent: u32) -> Result<(), DomainError> {
    if absent > work {
        return Err(DomainError::InvariantViolation {
            reason: format!(
                "Absent day count ({absent}) cannot exceed work day count ({work})"
            ),
        });
    }
    Ok(())
}
