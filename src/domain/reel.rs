use super::symbol::Symbol;

/// The controller-side view of one reel.
///
/// `symbol` is `None` until the reel's first tick arrives. Only the
/// controller task mutates this, so no synchronization is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelState {
    pub reel: usize,
    pub symbol: Option<Symbol>,
}

impl ReelState {
    pub fn new(reel: usize) -> Self {
        Self { reel, symbol: None }
    }
}

/// One animation event emitted by a spinner: reel `reel` now shows `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReelUpdate {
    pub reel: usize,
    pub symbol: Symbol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reel_state_starts_unset() {
        let state = ReelState::new(2);
        assert_eq!(state.reel, 2);
        assert!(state.symbol.is_none());
    }
}
