use std::fmt::Display;

/// A single operation of an edit script. The value is drawn verbatim from
/// one of the two inputs; for `Equal` the two source lines are identical,
/// so only one copy is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Removed { value: T },
    Added { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Removed { value } => value,
            Edit::Added { value } => value,
            Edit::Equal { value } => value,
        }
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Removed { value } => format!("-{}", value.clone().into()),
            Edit::Added { value } => format!("+{}", value.clone().into()),
            Edit::Equal { value } => format!(" {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
