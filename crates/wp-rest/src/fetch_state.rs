//! Fetch State
//!
//! The state behind one data-fetching view: the last good result, a
//! loading flag and the last error. Requests are ticketed so that only the
//! most recently dispatched one can change the state; a response for a
//! superseded request is dropped.

use std::fmt::Display;

/// Identifies one dispatched request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: T,
    loading: bool,
    error: Option<String>,
    issued: u64,
    resolutions: u64,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> FetchState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
            issued: 0,
            resolutions: 0,
        }
    }

    /// Mark a new request as in flight. Any earlier unresolved request is superseded.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        Ticket(self.issued)
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket was superseded
    /// or has already been resolved. On failure the previous data is kept.
    pub fn resolve<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.issued || !self.loading {
            log::debug!("[fetch] dropping response for stale request #{}", ticket.0);
            return false;
        }
        self.loading = false;
        self.resolutions += 1;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of requests whose outcome was applied
    #[cfg(test)]
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }
}

impl<T> FetchState<Vec<T>> {
    /// A read has completed, succeeded and returned no rows. `false` before
    /// the first response, so an empty list is not reported while loading.
    pub fn settled_empty(&self) -> bool {
        self.resolutions > 0 && !self.loading && self.error.is_none() && self.data.is_empty()
    }
}
