use crate::error::Error;
use crate::process::ScheduleResponse;

/// Identifies one submission. Only the newest ticket may update the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Request generation counter.
#[derive(Debug, Default)]
pub struct Submissions {
    latest: u64,
    in_flight: usize,
}

impl Submissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.in_flight += 1;
        Ticket(self.latest)
    }

    /// Record that `ticket` finished. Returns `true` if its result should be shown.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        ticket.0 == self.latest
    }

    /// Drop the claim of every outstanding ticket, e.g. after a local validation error.
    pub fn supersede(&mut self) {
        self.latest += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }
}

/// Text shown for a failed submission.
pub fn error_text(error: &Error) -> String {
    format!("Error: {}", error)
}

/// Turn a finished request into the text for the output panel, logging failures.
pub fn render(outcome: &Result<ScheduleResponse, Error>) -> String {
    match outcome {
        Ok(response) => response.result.clone(),
        Err(error) => {
            log::error!("Error: {:?}", error);
            error_text(error)
        }
    }
}
