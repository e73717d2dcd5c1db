//! Feed loading state shown in the header

/// Where the one-shot feed fetch currently stands
#[derive(Clone, Debug, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(usize),
    Failed(String),
}

impl FeedState {
    pub fn label(&self) -> String {
        match self {
            FeedState::Loading => "Loading feed...".to_string(),
            FeedState::Loaded(n) => format!("{} earthquakes (24h)", n),
            FeedState::Failed(_) => "Feed unavailable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(FeedState::Loaded(12).label(), "12 earthquakes (24h)");
        assert_eq!(FeedState::Failed("503".into()).label(), "Feed unavailable");
    }
}
