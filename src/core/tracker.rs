//! Check-in / check-out lifecycle.
//!
//! ```text
//! CLOSED --check_in (no record today)--> OPEN
//! OPEN   --check_out-->                  CLOSED   (+ one record)
//! CLOSED --check_in (record today)-->    CLOSED   (AlreadyCheckedInToday)
//! OPEN   --check_in (opened today)-->    OPEN     (AlreadyCheckedInToday)
//! OPEN   --check_in (opened earlier)-->  OPEN     (check-in time replaced)
//! OPEN   --check_in (before opening)-->  OPEN     (BeforeCheckIn)
//! OPEN   --check_out (before opening)--> OPEN     (BeforeCheckIn)
//! OPEN   --check_out (record that day)-> OPEN     (AlreadyCheckedInToday)
//! CLOSED --check_out-->                  CLOSED   (no-op)
//! ```
//!
//! Every transition is written to the store in one [`KeyValueStore::apply`]
//! batch before the in-memory state changes. A failed write leaves the
//! tracker as it was, and the store too when it applies batches atomically.

use crate::core::{persist, report, stats};
use crate::errors::{AppError, AppResult};
use crate::models::record::hours_between;
use crate::models::{AttendanceRecord, SessionState, Summary, WeekReport};
use crate::store::KeyValueStore;
use crate::utils::date::{local_day, same_calendar_day};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Where the earnings of a session being closed come from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EarningsSource {
    /// Nothing supplied: the record gets 0.
    #[default]
    None,
    /// Amount entered by the user.
    Amount(f64),
    /// Hours worked times this rate, rounded to cents.
    HourlyRate(f64),
}

impl EarningsSource {
    pub fn resolve(&self, hours: f64) -> f64 {
        match *self {
            EarningsSource::None => 0.0,
            EarningsSource::Amount(amount) => amount,
            EarningsSource::HourlyRate(rate) => (hours * rate * 100.0).round() / 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInOutcome {
    pub at: DateTime<Utc>,
    /// Check-in time of a session that was still open and got overwritten.
    pub replaced: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutOutcome {
    Closed(AttendanceRecord),
    /// Nothing to close; state untouched.
    NotCheckedIn,
}

pub struct SessionTracker<S: KeyValueStore, Tz: TimeZone = Local> {
    store: S,
    tz: Tz,
    records: Vec<AttendanceRecord>,
    session: SessionState,
    warnings: Vec<AppError>,
}

impl<S: KeyValueStore> SessionTracker<S, Local> {
    /// Load state from `store`, comparing calendar days in local time.
    pub fn load(store: S) -> AppResult<Self> {
        Self::load_with_timezone(store, Local)
    }
}

impl<S: KeyValueStore, Tz: TimeZone> SessionTracker<S, Tz> {
    pub fn load_with_timezone(store: S, tz: Tz) -> AppResult<Self> {
        let mut warnings = Vec::new();
        let records = persist::load_records(&store, &mut warnings)?;
        let session = persist::load_session(&store, &mut warnings)?;

        Ok(Self {
            store,
            tz,
            records,
            session,
            warnings,
        })
    }

    /// Newest first.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn is_checked_in(&self) -> bool {
        self.session.is_checked_in()
    }

    /// Problems found while loading. Each affected key was reset to its default.
    pub fn warnings(&self) -> &[AppError] {
        &self.warnings
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Calendar day of `ts` for this tracker.
    pub fn day_of(&self, ts: &DateTime<Utc>) -> NaiveDate {
        local_day(ts, &self.tz)
    }

    pub fn record_for_day(&self, now: &DateTime<Utc>) -> Option<&AttendanceRecord> {
        self.records
            .iter()
            .find(|r| same_calendar_day(&r.date, now, &self.tz))
    }

    /// True when `now`'s calendar day already has a record, or a session
    /// opened that same day.
    pub fn attended_on(&self, now: &DateTime<Utc>) -> bool {
        let open_today = self
            .session
            .current_check_in()
            .is_some_and(|at| same_calendar_day(&at, now, &self.tz));
        open_today || self.record_for_day(now).is_some()
    }

    /// Open a session at `now`.
    ///
    /// Rejected when `now`'s calendar day already has a record or an open
    /// session, or when `now` is earlier than the open session. A session
    /// left open on an earlier day is not closed: its check-in time is
    /// replaced and reported in [`CheckInOutcome::replaced`].
    pub fn check_in(&mut self, now: DateTime<Utc>) -> AppResult<CheckInOutcome> {
        if self.attended_on(&now) {
            return Err(AppError::AlreadyCheckedInToday(self.day_of(&now)));
        }

        let replaced = self.session.current_check_in();
        if let Some(check_in) = replaced.filter(|at| now < *at) {
            return Err(AppError::BeforeCheckIn { at: now, check_in });
        }

        let next = SessionState::open(now);

        let mut writes = Vec::new();
        persist::session_writes(&next, &mut writes);
        self.store.apply(&writes)?;
        self.session = next;

        Ok(CheckInOutcome { at: now, replaced })
    }

    /// Close the open session at `now` and record it.
    ///
    /// `now` must not be earlier than the check-in, and its calendar day
    /// must not already have a record.
    pub fn check_out(
        &mut self,
        now: DateTime<Utc>,
        earnings: EarningsSource,
    ) -> AppResult<CheckOutOutcome> {
        let Some(check_in) = self.session.current_check_in() else {
            return Ok(CheckOutOutcome::NotCheckedIn);
        };
        if now < check_in {
            return Err(AppError::BeforeCheckIn { at: now, check_in });
        }
        if self.record_for_day(&now).is_some() {
            return Err(AppError::AlreadyCheckedInToday(self.day_of(&now)));
        }

        let amount = earnings.resolve(hours_between(check_in, now));
        let record = AttendanceRecord::closed(check_in, now, amount);

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record.clone());
        records.extend(self.records.iter().cloned());

        let next = SessionState::closed();
        let mut writes = vec![persist::records_write(&records)?];
        persist::session_writes(&next, &mut writes);
        self.store.apply(&writes)?;

        self.records = records;
        self.session = next;

        Ok(CheckOutOutcome::Closed(record))
    }

    /// Drop every record and the open session, and erase the tracker keys.
    pub fn clear_all(&mut self) -> AppResult<()> {
        persist::erase(&mut self.store)?;
        self.records.clear();
        self.session = SessionState::closed();
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        stats::summarize(&self.records)
    }

    pub fn week_report(&self, reference: NaiveDate) -> WeekReport {
        report::week_report(&self.records, reference, &self.tz)
    }
}
