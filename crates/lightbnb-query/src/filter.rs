/// A positional parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Comparison operators supported by a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Geq,
    Leq,
    /// Case-insensitive `LIKE` pattern match
    ILike,
}

impl Op {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Geq => ">=",
            Op::Leq => "<=",
            Op::ILike => "ILIKE",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

/// A row-level condition `column op value`.
///
/// The column is always a static identifier owned by this crate, while the
/// value is kept apart and only referenced by position when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: &'static str,
    op: Op,
    value: Value,
}

impl Condition {
    pub fn new(column: &'static str, op: Op, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }

    /// Matches rows whose `column` contains `text`, ignoring case.
    ///
    /// `LIKE` wildcards found in `text` are escaped so they match literally.
    pub fn contains_ignore_case(column: &'static str, text: &str) -> Self {
        Self::new(column, Op::ILike, format!("%{}%", escape_like(text)))
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Renders the condition referencing its value with the `$placeholder` parameter.
    pub fn render(&self, placeholder: usize) -> String {
        format!("{} {} ${}", self.column, self.op, placeholder)
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_uses_placeholder() {
        let cond = Condition::new("properties.owner_id", Op::Eq, 42);
        assert_eq!(cond.render(3), "properties.owner_id = $3");
        assert_eq!(cond.value(), &Value::Integer(42));
    }

    #[test]
    fn contains_wraps_with_wildcards() {
        let cond = Condition::contains_ignore_case("properties.city", "canc");
        assert_eq!(cond.op(), Op::ILike);
        assert_eq!(cond.value(), &Value::Text("%canc%".to_owned()));
    }

    #[test]
    fn contains_escapes_like_wildcards() {
        let cond = Condition::contains_ignore_case("properties.city", r"50%_off\");
        assert_eq!(cond.value(), &Value::Text(r"%50\%\_off\\%".to_owned()));
    }
}
