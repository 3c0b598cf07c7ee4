//! Request tickets: which controller mount issued a request, and which one.
//!
//! Controllers do not perform I/O. They hand out a [`Pending`] and later get
//! the result back with the same [`Ticket`]. A result whose ticket does not
//! match the controller's current mount and sequence is dropped, which is how
//! responses arriving after the user moved on are ignored.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::Request;

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    mount: u64,
    seq: u64,
}

impl Ticket {
    pub fn mount(&self) -> u64 {
        self.mount
    }
}

/// A request waiting to be executed on behalf of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: Request,
}

/// Allows at most one in-flight request per controller mount.
#[derive(Debug)]
pub struct RequestTracker {
    mount: u64,
    seq: u64,
    in_flight: bool,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            mount: NEXT_MOUNT.fetch_add(1, Ordering::Relaxed),
            seq: 0,
            in_flight: false,
        }
    }

    pub fn mount(&self) -> u64 {
        self.mount
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Issue a ticket for `request`, or `None` while another one is in flight.
    pub fn issue(&mut self, request: Request) -> Option<Pending> {
        if self.in_flight {
            tracing::debug!(
                mount = self.mount,
                operation = request.operation().name(),
                "Request refused: another one is in flight"
            );
            return None;
        }
        self.seq += 1;
        self.in_flight = true;
        Some(Pending {
            ticket: Ticket {
                mount: self.mount,
                seq: self.seq,
            },
            request,
        })
    }

    /// Accept the result for `ticket` if it is the one in flight.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if self.in_flight && ticket.mount == self.mount && ticket.seq == self.seq {
            self.in_flight = false;
            return true;
        }
        tracing::debug!(
            mount = self.mount,
            ticket_mount = ticket.mount,
            ticket_seq = ticket.seq,
            "Dropping stale response"
        );
        false
    }
}
