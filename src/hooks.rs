/// Render state for data delivered by an external fetcher.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}
