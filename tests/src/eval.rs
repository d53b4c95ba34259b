//! A small expression evaluator so the fake backends can apply filters
//! honestly instead of returning canned rows verbatim.

use crosstitch_core::{
    err,
    stmt::{BinaryOp, Expr, Value, ValueRecord},
    Result,
};

pub fn eval_bool(row: &ValueRecord, expr: &Expr) -> Result<bool> {
    match eval(row, expr)? {
        Value::Bool(v) => Ok(v),
        other => Err(err!("filter did not evaluate to a boolean; value={other:?}")),
    }
}

pub fn eval(row: &ValueRecord, expr: &Expr) -> Result<Value> {
    Ok(match expr {
        Expr::Value(value) => value.clone(),
        Expr::Field(field) => row.get(&field.name).cloned().unwrap_or(Value::Null),
        Expr::And(and) => {
            for operand in and {
                if !eval_bool(row, operand)? {
                    return Ok(Value::Bool(false));
                }
            }
            Value::Bool(true)
        }
        Expr::Or(or) => {
            for operand in or {
                if eval_bool(row, operand)? {
                    return Ok(Value::Bool(true));
                }
            }
            Value::Bool(false)
        }
        Expr::BinaryOp(binary_op) => {
            let lhs = eval(row, &binary_op.lhs)?;
            let rhs = eval(row, &binary_op.rhs)?;
            Value::Bool(compare(binary_op.op, &lhs, &rhs)?)
        }
        Expr::InList(in_list) => {
            let lhs = eval(row, &in_list.expr)?;
            for item in &in_list.list {
                if eval(row, item)? == lhs {
                    return Ok(Value::Bool(true));
                }
            }
            Value::Bool(false)
        }
    })
}

fn compare(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    use std::cmp::Ordering::*;

    if op.is_eq() {
        return Ok(lhs == rhs);
    }
    if op.is_ne() {
        return Ok(lhs != rhs);
    }

    let ordering = match (lhs, rhs) {
        (Value::I64(lhs), Value::I64(rhs)) => lhs.cmp(rhs),
        (Value::String(lhs), Value::String(rhs)) => lhs.cmp(rhs),
        _ => return Err(err!("cannot order values; lhs={lhs:?} rhs={rhs:?}")),
    };

    Ok(match op {
        BinaryOp::Ge => matches!(ordering, Greater | Equal),
        BinaryOp::Gt => matches!(ordering, Greater),
        BinaryOp::Le => matches!(ordering, Less | Equal),
        BinaryOp::Lt => matches!(ordering, Less),
        BinaryOp::Eq | BinaryOp::Ne => unreachable!(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ValueRecord {
        let mut row = ValueRecord::new();
        row.insert("impact", 100_000_i64);
        row.insert("name", "Jane");
        row
    }

    #[test]
    fn field_comparison() {
        let row = row();
        assert!(eval_bool(&row, &Expr::ge(Expr::field("impact"), 100_000_i64)).unwrap());
        assert!(!eval_bool(&row, &Expr::lt(Expr::field("impact"), 100_000_i64)).unwrap());
        assert!(eval_bool(&row, &Expr::ne(Expr::field("name"), "")).unwrap());
    }

    #[test]
    fn missing_field_is_null() {
        let row = row();
        assert!(eval_bool(&row, &Expr::eq(Expr::field("missing"), Value::Null)).unwrap());
    }

    #[test]
    fn in_list_membership() {
        let row = row();
        let expr = Expr::in_list(Expr::field("name"), [Value::from("Jane"), Value::from("Joe")]);
        assert!(eval_bool(&row, &expr).unwrap());

        let expr = Expr::in_list(Expr::field("name"), [Value::from("Joe")]);
        assert!(!eval_bool(&row, &expr).unwrap());
    }
}
