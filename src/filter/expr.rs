use std::fmt;

/// One argument of a filter operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterArg {
    /// Positional value (`crop=W:H:X:Y`).
    Value(String),
    /// Keyword value (`eq=brightness=0.2`).
    Named {
        /// Option name.
        key: String,
        /// Option value, already escaped/quoted as needed.
        value: String,
    },
}

impl FilterArg {
    /// Positional argument.
    pub fn value(v: impl Into<String>) -> Self {
        Self::Value(v.into())
    }

    /// Keyword argument.
    pub fn named(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Named {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(v),
            Self::Named { key, value } => write!(f, "{key}={value}"),
        }
    }
}

/// A single filter stage: a named operation with arguments, or verbatim user text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Structured operation.
    Op {
        /// Filter name, e.g. `scale`.
        name: String,
        /// Arguments joined with `:`.
        args: Vec<FilterArg>,
    },
    /// Free-form text emitted as-is (custom filters).
    Raw(String),
}

impl Filter {
    /// Operation without arguments (`hflip`).
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Op {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Operation with arguments.
    pub fn op(name: impl Into<String>, args: Vec<FilterArg>) -> Self {
        Self::Op {
            name: name.into(),
            args,
        }
    }

    /// Operation with positional arguments only.
    pub fn positional<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::op(name, values.into_iter().map(FilterArg::value).collect())
    }

    /// Operation with keyword arguments only.
    pub fn keyed<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::op(
            name,
            pairs
                .into_iter()
                .map(|(k, v)| FilterArg::named(k, v))
                .collect(),
        )
    }

    /// Verbatim text.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Operation name (`None` for raw text).
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Op { name, .. } => Some(name),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(text) => f.write_str(text),
            Self::Op { name, args } => {
                f.write_str(name)?;
                for (i, arg) in args.iter().enumerate() {
                    f.write_str(if i == 0 { "=" } else { ":" })?;
                    write!(f, "{arg}")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered single-input, single-output filter chain, serialized comma-joined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterExpression {
    filters: Vec<Filter>,
}

impl FilterExpression {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Append every stage of `other`.
    pub fn extend(&mut self, other: FilterExpression) {
        self.filters.extend(other.filters);
    }

    /// Stages in order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// `true` when there are no stages.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// `None` for an empty chain, so callers never emit a no-op `-vf`/`-af`.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// `true` if any structured stage has operation `name`.
    pub fn contains_op(&self, name: &str) -> bool {
        self.filters.iter().any(|f| f.name() == Some(name))
    }
}

impl FromIterator<Filter> for FilterExpression {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/expr.rs"]
mod tests;
