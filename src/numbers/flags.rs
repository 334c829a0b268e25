/// Tri-state predicates attached to every value of the tower.
///
/// `None` means unknown. Every flag defaults to unknown; a concrete type
/// overrides the ones it can decide, and a flag of an immutable value
/// never changes.
pub trait Assumptions {
    fn is_zero(&self) -> Option<bool> {
        None
    }
    fn is_positive(&self) -> Option<bool> {
        None
    }
    fn is_negative(&self) -> Option<bool> {
        None
    }
    fn is_integer(&self) -> Option<bool> {
        None
    }
    fn is_rational(&self) -> Option<bool> {
        None
    }
    fn is_real(&self) -> Option<bool> {
        None
    }
    fn is_finite(&self) -> Option<bool> {
        None
    }
    fn is_commutative(&self) -> Option<bool> {
        None
    }
    fn is_even(&self) -> Option<bool> {
        None
    }
    fn is_odd(&self) -> Option<bool> {
        None
    }

    fn is_nonnegative(&self) -> Option<bool> {
        match (self.is_positive(), self.is_zero()) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => match self.is_real() {
                Some(true) => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn is_nonpositive(&self) -> Option<bool> {
        match (self.is_negative(), self.is_zero()) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => match self.is_real() {
                Some(true) => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}
