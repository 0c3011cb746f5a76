/// Orders overlapping fetches so only the newest response is applied.
///
/// Each fetch takes a [`Ticket`] before it starts. When the response arrives,
/// it is applied only if no newer ticket has been issued in the meantime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// A submission slot: while one submission runs, further ones are refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    /// Claim the slot. Returns `false` if a submission is already running.
    pub fn try_start(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}
