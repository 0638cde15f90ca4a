//! Упорядочивание ответов на асинхронные запросы.
//!
//! Каждый запрос получает билет. Ответ применяется только если его билет
//! всё ещё последний выданный; иначе ответ устарел и отбрасывается.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.next();
        assert!(seq.is_current(first));

        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut seq = RequestSequence::new();
        let slow = seq.next();
        let fast = seq.next();
        // fast пришёл первым и применён, slow пришёл позже и отброшен
        assert!(seq.is_current(fast));
        assert!(!seq.is_current(slow));
    }
}
