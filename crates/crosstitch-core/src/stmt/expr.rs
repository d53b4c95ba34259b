use super::{BinaryOp, ExprAnd, ExprBinaryOp, ExprField, ExprInList, ExprOr, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// An expression that evaluates to a constant value
    Value(Value),

    /// References a field on the queried entity, by name
    Field(ExprField),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// The expression is contained by the given list of values
    InList(ExprInList),

    /// OR a set of binary expressions
    Or(ExprOr),
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        ExprField { name: name.into() }.into()
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Eq,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Ne,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Ge,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Lt,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Expr
where
    Value: From<T>,
{
    fn from(value: T) -> Self {
        Self::Value(value.into())
    }
}
