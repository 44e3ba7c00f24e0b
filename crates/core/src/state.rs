//! Tri-state result of an asynchronous, fallible computation.

/// Exactly one of: pending, succeeded with a value, or failed with an error.
///
/// A fresh `State` is created per logical operation and atomically replaces
/// the previous value for that operation's slot; it never holds partial data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State<E, V> {
    Loading,
    Content(V),
    Failure(E),
}

impl<E, V> State<E, V> {
    /// Fold the outcome of a fallible operation into the tri-state.
    pub fn from_outcome(outcome: Result<V, E>) -> Self {
        match outcome {
            Ok(value) => State::Content(value),
            Err(error) => State::Failure(error),
        }
    }

    /// Transform the content value; `Loading` and `Failure` pass through
    /// unchanged.
    pub fn map<V2>(self, f: impl FnOnce(V) -> V2) -> State<E, V2> {
        match self {
            State::Loading => State::Loading,
            State::Content(value) => State::Content(f(value)),
            State::Failure(error) => State::Failure(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, State::Loading)
    }

    pub fn is_content(&self) -> bool {
        matches!(self, State::Content(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, State::Failure(_))
    }

    /// The content value, if this state is terminal success.
    pub fn value(&self) -> Option<&V> {
        match self {
            State::Content(value) => Some(value),
            _ => None,
        }
    }

    /// The error, if this state is terminal failure.
    pub fn failure(&self) -> Option<&E> {
        match self {
            State::Failure(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_outcome_folds_both_arms() {
        assert_eq!(
            State::<String, i32>::from_outcome(Ok(5)),
            State::Content(5)
        );
        assert_eq!(
            State::<String, i32>::from_outcome(Err("boom".to_string())),
            State::Failure("boom".to_string())
        );
    }

    #[test]
    fn map_transforms_content_only() {
        let content: State<String, i32> = State::Content(2);
        assert_eq!(content.map(|v| v * 10), State::Content(20));

        let loading: State<String, i32> = State::Loading;
        assert_eq!(loading.map(|v| v * 10), State::Loading);

        let failure: State<String, i32> = State::Failure("boom".to_string());
        assert_eq!(failure.map(|v| v * 10), State::Failure("boom".to_string()));
    }

    #[test]
    fn predicates_and_projections() {
        let content: State<String, i32> = State::Content(1);
        assert!(content.is_content());
        assert_eq!(content.value(), Some(&1));
        assert_eq!(content.failure(), None);

        let loading: State<String, i32> = State::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.value(), None);

        let failure: State<String, i32> = State::Failure("boom".to_string());
        assert!(failure.is_failure());
        assert_eq!(failure.failure(), Some(&"boom".to_string()));
    }
}
