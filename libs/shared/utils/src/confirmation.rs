/// Row-level action awaiting operator confirmation.
///
/// `Idle -> Pending -> Idle`, leaving `Pending` through either [`Confirmation::cancel`]
/// or [`Confirmation::confirm`]. There is no in-flight state: whoever confirms owns the
/// pending pair and performs the action.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation<R, A> {
    Idle,
    Pending { record: R, action: A },
}

impl<R, A> Default for Confirmation<R, A> {
    fn default() -> Self {
        Confirmation::Idle
    }
}

impl<R, A> Confirmation<R, A> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Confirmation::Pending { .. })
    }

    pub fn pending(&self) -> Option<(&R, &A)> {
        match self {
            Confirmation::Idle => None,
            Confirmation::Pending { record, action } => Some((record, action)),
        }
    }

    /// A new request replaces whatever was pending.
    pub fn request(&mut self, record: R, action: A) {
        *self = Confirmation::Pending { record, action };
    }

    pub fn cancel(&mut self) {
        *self = Confirmation::Idle;
    }

    pub fn confirm(&mut self) -> Option<(R, A)> {
        match std::mem::replace(self, Confirmation::Idle) {
            Confirmation::Idle => None,
            Confirmation::Pending { record, action } => Some((record, action)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_confirm() {
        let mut confirmation = Confirmation::Idle;
        confirmation.request("doctor-1", "suspend");
        assert!(confirmation.is_pending());
        assert_eq!(confirmation.pending(), Some((&"doctor-1", &"suspend")));

        assert_eq!(confirmation.confirm(), Some(("doctor-1", "suspend")));
        assert_eq!(confirmation, Confirmation::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut confirmation = Confirmation::Idle;
        confirmation.request(1, "delete");
        confirmation.cancel();
        assert!(!confirmation.is_pending());
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn test_confirm_is_one_shot() {
        let mut confirmation = Confirmation::Idle;
        confirmation.request(1, "activate");
        assert!(confirmation.confirm().is_some());
        assert!(confirmation.confirm().is_none());
    }
}
